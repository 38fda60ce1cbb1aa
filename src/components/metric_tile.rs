//! A small card pairing an icon, a label and an already formatted value.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{CARD, Component};
use crate::action::Action;
use crate::icons::Icon;

pub struct MetricTile;

pub struct MetricTileProps<'a> {
    pub icon: Icon,
    pub label: &'a str,
    pub value: &'a str,
}

impl Component<Action> for MetricTile {
    type Props<'a> = MetricTileProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD))
            .style(Style::default().bg(CARD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [icon_area, text_area] =
            Layout::horizontal([Constraint::Length(4), Constraint::Min(1)]).areas(inner);

        let icon = Line::from(props.icon.glyph()).style(Style::default().fg(props.icon.color()));
        frame.render_widget(Paragraph::new(icon), icon_area);

        let lines = vec![
            Line::from(props.label).style(Style::default().fg(Color::White).bold()),
            Line::from(props.value).style(Style::default().fg(Color::White)),
        ];
        frame.render_widget(Paragraph::new(lines), text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::MaterialIcon;
    use tui_dispatch::testing::*;

    #[test]
    fn test_render_label_and_value_verbatim() {
        let mut render = RenderHarness::new(30, 4);
        let mut tile = MetricTile;

        let output = render.render_to_string_plain(|frame| {
            tile.render(
                frame,
                frame.area(),
                MetricTileProps {
                    icon: Icon::Material(MaterialIcon::Gauge),
                    label: "Pressure",
                    value: "1013 hPa",
                },
            );
        });

        assert!(output.contains("Pressure"), "label missing:\n{output}");
        assert!(output.contains("1013 hPa"), "value missing:\n{output}");
    }
}
