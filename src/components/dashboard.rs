use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use chrono::{Local, TimeZone};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{ACCENT, CARD, Component, MetricTile, MetricTileProps};
use crate::action::Action;
use crate::format;
use crate::icons::{FeatherIcon, FontAwesomeIcon, Icon, MaterialIcon};
use crate::sprites::{self, ConditionGlyph};
use crate::state::WeatherSnapshot;

pub const TITLE: &str = "Daily Weather";
pub const MORE_INFO: &str = "More Information";

/// Rows used by the primary card, borders included.
const CARD_HEIGHT: u16 = 11;
/// Rows per metric tile, borders included.
const TILE_HEIGHT: u16 = 4;

/// One metric tile, ready to draw
#[derive(Clone, Debug, PartialEq)]
pub struct TileView {
    pub icon: Icon,
    pub label: &'static str,
    pub value: String,
}

/// Every string the dashboard shows, formatted once from a snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub place: String,
    pub temperature: String,
    pub celsius: f64,
    pub glyph: ConditionGlyph,
    pub description: String,
    pub tiles: [TileView; 7],
}

impl DashboardView {
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        Self::from_snapshot_in(snapshot, &Local)
    }

    /// Same as `from_snapshot`, with sunrise/sunset shown in `tz`.
    pub fn from_snapshot_in<Tz: TimeZone>(snapshot: &WeatherSnapshot, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let (glyph, description) = match snapshot.condition() {
            Some(condition) => (
                ConditionGlyph::for_category(&condition.main),
                condition.description.clone(),
            ),
            None => (ConditionGlyph::Sun, String::new()),
        };

        Self {
            place: format::place(snapshot),
            temperature: format::temperature(snapshot.temperature),
            celsius: snapshot.temperature,
            glyph,
            description,
            tiles: [
                TileView {
                    icon: Icon::Feather(FeatherIcon::Sunrise),
                    label: "Sunrise",
                    value: format::clock_in(snapshot.sunrise, tz),
                },
                TileView {
                    icon: Icon::Feather(FeatherIcon::Sunset),
                    label: "Sunset",
                    value: format::clock_in(snapshot.sunset, tz),
                },
                TileView {
                    icon: Icon::FontAwesome5(FontAwesomeIcon::TemperatureHigh),
                    label: "Max Temp",
                    value: format::temperature(snapshot.temp_max),
                },
                TileView {
                    icon: Icon::FontAwesome5(FontAwesomeIcon::TemperatureLow),
                    label: "Min Temp",
                    value: format::temperature(snapshot.temp_min),
                },
                TileView {
                    icon: Icon::Feather(FeatherIcon::Wind),
                    label: "Wind Speed",
                    value: format::wind_speed(snapshot.wind_speed),
                },
                TileView {
                    icon: Icon::Material(MaterialIcon::Gauge),
                    label: "Pressure",
                    value: format::pressure(snapshot.pressure),
                },
                TileView {
                    icon: Icon::Material(MaterialIcon::WaterPercent),
                    label: "Humidity",
                    value: format::humidity(snapshot.humidity),
                },
            ],
        }
    }
}

pub struct Dashboard;

pub struct DashboardProps<'a> {
    pub view: &'a DashboardView,
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1),           // Title
            Constraint::Length(1),           // Spacer
            Constraint::Length(CARD_HEIGHT), // Primary card
            Constraint::Length(1),           // Spacer
            Constraint::Length(1),           // "More Information"
            Constraint::Min(0),              // Tiles
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(TITLE).centered())
                .style(Style::default().fg(Color::White).bold()),
            chunks[0],
        );

        render_card(frame, chunks[2], props.view);

        frame.render_widget(
            Paragraph::new(Line::from(MORE_INFO)).style(Style::default().fg(Color::White).bold()),
            chunks[4],
        );

        render_tiles(frame, chunks[5], &props.view.tiles);
    }
}

fn render_card(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CARD))
        .style(Style::default().bg(CARD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(inner);

    let left_rows = Layout::vertical([
        Constraint::Length(1), // Place
        Constraint::Fill(1),   // Temperature
        Constraint::Length(1), // Refresh control
    ])
    .split(left);

    frame.render_widget(
        Paragraph::new(view.place.as_str()).style(Style::default().fg(Color::White).bold()),
        left_rows[0],
    );

    let renderer = temperature_renderer(view.celsius);
    frame.render_widget(ArtBox::new(&renderer, &view.temperature), left_rows[1]);

    let refresh = Line::from(vec![
        Span::styled("\u{27f3} ", Style::default().fg(ACCENT)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" refresh", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(refresh), left_rows[2]);

    let [sprite_area, desc_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(right);
    match sprites::condition_sprite(view.glyph, sprite_area.height) {
        Some(art) => frame.render_widget(
            Paragraph::new(art).alignment(Alignment::Center),
            sprite_area,
        ),
        None => frame.render_widget(
            Paragraph::new(Line::from(view.glyph.emoji()).centered()),
            sprite_area,
        ),
    }
    frame.render_widget(
        Paragraph::new(Line::from(view.description.as_str()).centered())
            .style(Style::default().fg(Color::White).bold()),
        desc_area,
    );
}

/// Two tiles per row, in fixed order.
fn render_tiles(frame: &mut Frame, area: Rect, tiles: &[TileView]) {
    let rows = tiles.len().div_ceil(2);
    let row_areas =
        Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); rows]).split(area);

    for (row_area, pair) in row_areas.iter().zip(tiles.chunks(2)) {
        let cols = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(1)
            .split(*row_area);
        for (col_area, tile) in cols.iter().zip(pair) {
            MetricTile.render(
                frame,
                *col_area,
                MetricTileProps {
                    icon: tile.icon,
                    label: tile.label,
                    value: &tile.value,
                },
            );
        }
    }
}

/// Big-font renderer for the card temperature, tinted by how warm it is.
pub fn temperature_renderer(celsius: f64) -> Renderer {
    Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(celsius))
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        t if t < 15.0 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        t if t < 25.0 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
        t if t < 35.0 => (ArtColor::rgb(255, 180, 80), ArtColor::rgb(255, 120, 80)),
        _ => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
