use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;

const BUTTON_BG: Color = Color::Rgb(37, 99, 235);

pub struct ErrorPanel;

pub struct ErrorPanelProps<'a> {
    pub message: &'a str,
}

impl ErrorPanel {
    /// Where the Retry button lands when the panel fills `area`.
    pub fn button_area(area: Rect) -> Rect {
        Self::layout(area)[1]
    }

    fn layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::vertical([
            Constraint::Length(2), // message
            Constraint::Length(1), // blank
            Constraint::Length(3), // button
            Constraint::Length(1), // hint
        ])
        .flex(Flex::Center)
        .split(area);

        let [button] = Layout::horizontal([Constraint::Length(11)])
            .flex(Flex::Center)
            .areas(chunks[2]);
        [chunks[0], button, chunks[3]]
    }
}

impl Component<Action> for ErrorPanel {
    type Props<'a> = ErrorPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [message_area, button_area, hint_area] = Self::layout(area);

        frame.render_widget(
            Paragraph::new(Line::from(props.message).centered())
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: true }),
            message_area,
        );

        let button = Paragraph::new(Line::from("Retry").bold().centered()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BUTTON_BG))
                .style(Style::default().bg(BUTTON_BG).fg(Color::White)),
        );
        frame.render_widget(button, button_area);

        let hint = Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(hint), hint_area);
    }
}
