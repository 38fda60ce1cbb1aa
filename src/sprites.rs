//! Condition sprites with auto-sizing and multi-color layer support
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! File naming: {size}_{color}.txt (e.g., small_yellow.txt, medium_darkgray.txt)

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

mod sprite_data {
    pub mod sun {
        pub const SMALL_YELLOW: &str = include_str!("../sprites/sun/small_yellow.txt");
        pub const MEDIUM_YELLOW: &str = include_str!("../sprites/sun/medium_yellow.txt");
    }
    pub mod cloudy {
        // Back cloud (darker)
        pub const SMALL_DARKGRAY: &str = include_str!("../sprites/cloudy/small_darkgray.txt");
        pub const MEDIUM_DARKGRAY: &str = include_str!("../sprites/cloudy/medium_darkgray.txt");
        // Front cloud (lighter)
        pub const SMALL_LIGHTGRAY: &str = include_str!("../sprites/cloudy/small_lightgray.txt");
        pub const MEDIUM_LIGHTGRAY: &str = include_str!("../sprites/cloudy/medium_lightgray.txt");
    }
}

struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text; spaces are transparent, later layers win.
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(Vec::len).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flatten()
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            let mut found_char = ' ';
            let mut found_color = Color::Reset;

            for (layer, lines) in layers.iter().zip(&layer_lines).rev() {
                let ch = lines
                    .get(line_idx)
                    .and_then(|line| line.get(col_idx))
                    .copied()
                    .unwrap_or(' ');
                if ch != ' ' {
                    found_char = ch;
                    found_color = layer.color;
                    break;
                }
            }

            spans.push(Span::styled(
                found_char.to_string(),
                Style::default().fg(found_color),
            ));
        }
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// 5 lines
    Small,
    /// 7 lines
    Medium,
}

impl SpriteSize {
    /// Largest sprite that fits, or `None` below 5 rows.
    pub fn for_height(available: u16) -> Option<Self> {
        match available {
            0..=4 => None,
            5..=6 => Some(SpriteSize::Small),
            _ => Some(SpriteSize::Medium),
        }
    }
}

/// The primary card's condition icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionGlyph {
    Sun,
    Cloud,
}

impl ConditionGlyph {
    /// "Clouds", "Haze" and "Rainy" get a cloud; every other category a sun.
    pub fn for_category(category: &str) -> Self {
        match category {
            "Clouds" | "Haze" | "Rainy" => ConditionGlyph::Cloud,
            _ => ConditionGlyph::Sun,
        }
    }

    /// Fallback when no sprite fits
    pub fn emoji(self) -> &'static str {
        match self {
            ConditionGlyph::Sun => "\u{2600}\u{fe0f}",
            ConditionGlyph::Cloud => "\u{2601}\u{fe0f}",
        }
    }
}

/// Sprite for the glyph sized to `available_height`, or `None` if too small.
pub fn condition_sprite(glyph: ConditionGlyph, available_height: u16) -> Option<Text<'static>> {
    let size = SpriteSize::for_height(available_height)?;
    Some(get_sprite(glyph, size))
}

pub fn get_sprite(glyph: ConditionGlyph, size: SpriteSize) -> Text<'static> {
    let layers = match glyph {
        ConditionGlyph::Sun => vec![SpriteLayer {
            content: match size {
                SpriteSize::Small => sprite_data::sun::SMALL_YELLOW,
                SpriteSize::Medium => sprite_data::sun::MEDIUM_YELLOW,
            },
            color: Color::Rgb(255, 235, 211),
        }],
        ConditionGlyph::Cloud => vec![
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::cloudy::SMALL_DARKGRAY,
                    SpriteSize::Medium => sprite_data::cloudy::MEDIUM_DARKGRAY,
                },
                color: Color::Rgb(120, 120, 140),
            },
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::cloudy::SMALL_LIGHTGRAY,
                    SpriteSize::Medium => sprite_data::cloudy::MEDIUM_LIGHTGRAY,
                },
                color: Color::Rgb(255, 235, 211),
            },
        ],
    };

    composite_layers(&layers)
}
