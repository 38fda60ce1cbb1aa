//! Acquisition controller - permission → location → fetch, strictly in order

use std::sync::Arc;

use crate::action::Action;
use crate::api::{FetchError, WeatherService};
use crate::location::{LocationError, LocationService, Permission};
use crate::state::{Coordinates, WeatherSnapshot};

#[derive(thiserror::Error, Debug)]
pub enum AcquisitionError {
    #[error("permission request failed: {0}")]
    Permission(#[source] LocationError),
    #[error("could not read coordinates: {0}")]
    Location(#[source] LocationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Outcome of one acquisition sequence
#[derive(Debug)]
pub enum Acquisition {
    Ready {
        coordinates: Coordinates,
        snapshot: WeatherSnapshot,
    },
    PermissionDenied,
    Failed {
        coordinates: Option<Coordinates>,
        error: AcquisitionError,
    },
}

#[derive(Clone)]
pub struct Controller {
    location: Arc<dyn LocationService>,
    weather: Arc<dyn WeatherService>,
}

impl Controller {
    pub fn new(location: Arc<dyn LocationService>, weather: Arc<dyn WeatherService>) -> Self {
        Self { location, weather }
    }

    /// Run the sequence once. Never returns early with an error: every
    /// failure is folded into the outcome.
    pub async fn acquire(&self) -> Acquisition {
        match self.location.request_foreground_permission().await {
            Ok(Permission::Granted) => {}
            Ok(Permission::Denied) => return Acquisition::PermissionDenied,
            Err(e) => {
                return Acquisition::Failed {
                    coordinates: None,
                    error: AcquisitionError::Permission(e),
                }
            }
        }

        let coordinates = match self.location.current_coordinates().await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                return Acquisition::Failed {
                    coordinates: None,
                    error: AcquisitionError::Location(e),
                }
            }
        };

        match self.weather.current_weather(coordinates).await {
            Ok(snapshot) => Acquisition::Ready {
                coordinates,
                snapshot,
            },
            Err(e) => Acquisition::Failed {
                coordinates: Some(coordinates),
                error: e.into(),
            },
        }
    }

    /// Run the sequence and turn the outcome into a result action for `generation`.
    pub async fn refresh(&self, generation: u64) -> Action {
        match self.acquire().await {
            Acquisition::Ready {
                coordinates,
                snapshot,
            } => {
                tracing::info!(
                    generation,
                    place = %snapshot.name,
                    lat = coordinates.latitude,
                    lon = coordinates.longitude,
                    "weather refreshed"
                );
                Action::WeatherDidLoad(generation, coordinates, snapshot)
            }
            Acquisition::PermissionDenied => {
                tracing::info!(generation, "location permission denied");
                Action::WeatherDidDeny(generation)
            }
            Acquisition::Failed { coordinates, error } => {
                tracing::warn!(generation, error = %error, "weather refresh failed");
                Action::WeatherDidFail(generation, coordinates)
            }
        }
    }
}
