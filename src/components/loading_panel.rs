use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use super::{ACCENT, Component};
use crate::action::Action;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingPanel;

pub struct LoadingPanelProps {
    pub tick_count: u32,
}

impl LoadingPanel {
    pub fn frame_for(tick_count: u32) -> &'static str {
        SPINNER_FRAMES[tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Component<Action> for LoadingPanel {
    type Props<'a> = LoadingPanelProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let spinner = Line::from(Self::frame_for(props.tick_count))
            .style(Style::default().fg(ACCENT).bold())
            .centered();
        frame.render_widget(Paragraph::new(spinner), row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(LoadingPanel::frame_for(0), SPINNER_FRAMES[0]);
        assert_eq!(LoadingPanel::frame_for(3), SPINNER_FRAMES[3]);
        assert_eq!(
            LoadingPanel::frame_for(SPINNER_FRAMES.len() as u32),
            SPINNER_FRAMES[0]
        );
    }
}
