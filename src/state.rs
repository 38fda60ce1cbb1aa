//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shown when the user refuses location access.
pub const PERMISSION_DENIED_MESSAGE: &str = "Permission to access location was denied";

/// Shown for every other acquisition failure; the cause only goes to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// Spinner timing while a refresh is in flight.
pub const SPINNER_TICK_MS: u64 = 80;

/// A point-in-time device position, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One upstream condition entry ("Clouds" / "overcast clouds" / "04d")
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Result of one successful fetch. Replaced wholesale on the next one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub name: String,
    pub country: String,
    /// Seconds since the UNIX epoch
    pub sunrise: i64,
    /// Seconds since the UNIX epoch
    pub sunset: i64,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u32,
    pub pressure: u32,
    pub wind_speed: f64,
    pub conditions: Vec<Condition>,
}

impl WeatherSnapshot {
    /// The leading condition entry; the rest are ignored by the UI.
    pub fn condition(&self) -> Option<&Condition> {
        self.conditions.first()
    }
}

/// What the UI should currently show. Exactly one variant holds at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum ViewState {
    #[default]
    Loading,
    PermissionDenied(String),
    FetchFailed(String),
    Ready(WeatherSnapshot),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            ViewState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::PermissionDenied(msg) | ViewState::FetchFailed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Loading → PermissionDenied / FetchFailed / Ready
    #[debug(section = "Weather", label = "View", debug_fmt)]
    pub view: ViewState,

    /// Last coordinates read from the location service
    #[debug(section = "Location", label = "Coordinates", debug_fmt)]
    pub coordinates: Option<Coordinates>,

    /// Bumped on every refresh; results tagged with an older value are dropped
    #[debug(section = "Weather", label = "Generation")]
    pub generation: u64,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }
}
