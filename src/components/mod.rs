pub mod dashboard;
pub mod error_panel;
pub mod loading_panel;
pub mod metric_tile;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use dashboard::{Dashboard, DashboardProps, DashboardView, TileView};
pub use error_panel::{ErrorPanel, ErrorPanelProps};
pub use loading_panel::{LoadingPanel, LoadingPanelProps, SPINNER_FRAMES};
pub use metric_tile::{MetricTile, MetricTileProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};

use ratatui::style::Color;

/// Screen background
pub const BACKGROUND: Color = Color::Rgb(33, 33, 33);
/// Card background
pub const CARD: Color = Color::Rgb(50, 50, 51);
/// Warm accent for icons and controls
pub const ACCENT: Color = Color::Rgb(255, 235, 211);
