//! Metric icons as a closed set
//!
//! Each family keeps its own name enum, so an icon that a family does not
//! provide cannot be constructed. Glyphs and colors are resolved by `match`.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconFamily {
    Feather,
    FontAwesome5,
    MaterialCommunityIcons,
}

impl IconFamily {
    /// Accent shared by every icon of the family.
    pub fn color(self) -> Color {
        match self {
            IconFamily::Feather => Color::Rgb(255, 235, 211),
            IconFamily::FontAwesome5 => Color::Rgb(255, 200, 150),
            IconFamily::MaterialCommunityIcons => Color::Rgb(180, 215, 255),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatherIcon {
    Sunrise,
    Sunset,
    Wind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontAwesomeIcon {
    TemperatureHigh,
    TemperatureLow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialIcon {
    Gauge,
    WaterPercent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Feather(FeatherIcon),
    FontAwesome5(FontAwesomeIcon),
    Material(MaterialIcon),
}

impl Icon {
    pub fn family(self) -> IconFamily {
        match self {
            Icon::Feather(_) => IconFamily::Feather,
            Icon::FontAwesome5(_) => IconFamily::FontAwesome5,
            Icon::Material(_) => IconFamily::MaterialCommunityIcons,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Feather(FeatherIcon::Sunrise) => "\u{1f305}",
            Icon::Feather(FeatherIcon::Sunset) => "\u{1f307}",
            Icon::Feather(FeatherIcon::Wind) => "\u{1f4a8}",
            Icon::FontAwesome5(FontAwesomeIcon::TemperatureHigh) => "\u{1f321}",
            Icon::FontAwesome5(FontAwesomeIcon::TemperatureLow) => "\u{2744}",
            Icon::Material(MaterialIcon::Gauge) => "\u{23f2}",
            Icon::Material(MaterialIcon::WaterPercent) => "\u{1f4a7}",
        }
    }

    pub fn color(self) -> Color {
        self.family().color()
    }
}
