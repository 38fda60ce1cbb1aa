//! Actions - intents from the UI and results from the refresh task

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Coordinates, WeatherSnapshot};

/// Application actions with automatic category inference
///
/// Result actions carry the generation of the refresh that produced them.
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: run the permission → location → fetch sequence
    #[action(category = "weather")]
    WeatherRefresh,

    /// Result: coordinates read and weather fetched
    #[action(category = "weather_did")]
    WeatherDidLoad(u64, Coordinates, WeatherSnapshot),

    /// Result: location permission refused
    #[action(category = "weather_did")]
    WeatherDidDeny(u64),

    /// Result: anything else went wrong (coordinates kept if they were read)
    #[action(category = "weather_did")]
    WeatherDidFail(u64, Option<Coordinates>),

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
