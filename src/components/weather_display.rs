use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Position};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    BACKGROUND, Component, Dashboard, DashboardProps, DashboardView, ErrorPanel, ErrorPanelProps,
    LoadingPanel, LoadingPanelProps,
};
use crate::action::Action;
use crate::state::{AppState, ViewState};

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The root view: spinner, error panel or dashboard, chosen by `ViewState`
#[derive(Default)]
pub struct WeatherDisplay {
    /// Retry button from the last render; only set while an error is shown
    retry_button: Option<Rect>,
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                // Retry / refresh only exist on the error panel and dashboard
                KeyCode::Char('r') | KeyCode::F(5) | KeyCode::Enter
                    if !props.state.is_loading() =>
                {
                    Some(Action::WeatherRefresh)
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let at = Position::new(mouse.column, mouse.row);
                let on_retry = self.retry_button.is_some_and(|button| button.contains(at));
                (on_retry && props.state.view.error_message().is_some())
                    .then_some(Action::WeatherRefresh)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        frame.render_widget(
            Block::default().style(Style::default().bg(BACKGROUND)),
            area,
        );

        let state = props.state;
        self.retry_button = None;
        match &state.view {
            ViewState::Loading => {
                LoadingPanel.render(
                    frame,
                    area,
                    LoadingPanelProps {
                        tick_count: state.tick_count,
                    },
                );
            }
            ViewState::PermissionDenied(message) | ViewState::FetchFailed(message) => {
                let [body, bar] = split_status_bar(area);
                ErrorPanel.render(frame, body, ErrorPanelProps { message });
                self.retry_button = Some(ErrorPanel::button_area(body));
                render_status_bar(frame, bar, "retry");
            }
            ViewState::Ready(snapshot) => {
                let [body, bar] = split_status_bar(area);
                let view = DashboardView::from_snapshot(snapshot);
                Dashboard.render(frame, body, DashboardProps { view: &view });
                render_status_bar(frame, bar, "refresh");
            }
        }
    }
}

fn split_status_bar(area: Rect) -> [Rect; 2] {
    Layout::vertical([
        Constraint::Min(1),    // Main content
        Constraint::Length(1), // Help bar
    ])
    .areas(area)
}

fn render_status_bar(frame: &mut Frame, area: Rect, refresh_label: &'static str) {
    let mut status_bar = StatusBar::new();
    <StatusBar as Component<Action>>::render(
        &mut status_bar,
        frame,
        area,
        StatusBarProps {
            left: StatusBarSection::empty(),
            center: StatusBarSection::hints(&[
                StatusBarHint::new("r", refresh_label),
                StatusBarHint::new("q", "quit"),
            ]),
            right: StatusBarSection::empty(),
            style: StatusBarStyle::default(),
            is_focused: false,
        },
    );
}
