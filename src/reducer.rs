//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, ViewState, FETCH_FAILED_MESSAGE, PERMISSION_DENIED_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherRefresh => {
            state.generation = state.generation.wrapping_add(1);
            state.view = ViewState::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::Refresh {
                generation: state.generation,
            })
        }

        Action::WeatherDidLoad(generation, coordinates, snapshot) => {
            if generation != state.generation {
                return DispatchResult::unchanged();
            }
            state.coordinates = Some(coordinates);
            state.view = ViewState::Ready(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidDeny(generation) => {
            if generation != state.generation {
                return DispatchResult::unchanged();
            }
            state.view = ViewState::PermissionDenied(PERMISSION_DENIED_MESSAGE.into());
            DispatchResult::changed()
        }

        Action::WeatherDidFail(generation, coordinates) => {
            if generation != state.generation {
                return DispatchResult::unchanged();
            }
            if coordinates.is_some() {
                state.coordinates = coordinates;
            }
            state.view = ViewState::FetchFailed(FETCH_FAILED_MESSAGE.into());
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
