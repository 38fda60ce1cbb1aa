//! Runtime configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::OpenWeatherClient;
use crate::controller::Controller;
use crate::location::{FixedLocation, IpLocation, LocationService};
use crate::state::Coordinates;

/// Weather API credential, baked in from the build environment.
pub const BUILD_API_KEY: Option<&str> = option_env!("OPEN_WEATHER_API_KEY");

/// Where coordinates come from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocationSource {
    /// Look up by public IP; `consent: false` behaves as a refused permission
    Network { consent: bool },
    Fixed(Coordinates),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub location: LocationSource,
}

impl Config {
    pub fn new(location: LocationSource) -> Self {
        if BUILD_API_KEY.is_none() {
            tracing::warn!("OPEN_WEATHER_API_KEY was not set at build time");
        }
        Self {
            api_key: BUILD_API_KEY.unwrap_or_default().to_string(),
            location,
        }
    }

    pub fn controller(&self) -> Controller {
        let location: Arc<dyn LocationService> = match self.location {
            LocationSource::Fixed(coordinates) => Arc::new(FixedLocation::new(coordinates)),
            LocationSource::Network { consent } => Arc::new(IpLocation::new(consent)),
        };
        Controller::new(location, Arc::new(OpenWeatherClient::new(self.api_key.clone())))
    }
}

/// Resolve `--lat/--lon/--no-locate` into a location source.
pub fn location_source(lat: Option<f64>, lon: Option<f64>, no_locate: bool) -> LocationSource {
    match (lat, lon) {
        (Some(lat), Some(lon)) => LocationSource::Fixed(Coordinates::new(lat, lon)),
        _ => LocationSource::Network {
            consent: !no_locate,
        },
    }
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("daily-weather.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_location_source_prefers_fixed() {
        assert_eq!(
            location_source(Some(40.0), Some(-74.0), true),
            LocationSource::Fixed(Coordinates::new(40.0, -74.0))
        );
    }

    #[test]
    fn test_location_source_network_consent() {
        assert_eq!(
            location_source(None, None, false),
            LocationSource::Network { consent: true }
        );
        assert_eq!(
            location_source(Some(1.0), None, true),
            LocationSource::Network { consent: false }
        );
    }

    #[test]
    fn test_config_carries_build_key_and_location() {
        let source = LocationSource::Fixed(Coordinates::new(1.5, -2.5));
        let config = Config::new(source);

        assert_eq!(config.location, source);
        assert_eq!(config.api_key, BUILD_API_KEY.unwrap_or_default());
    }

    #[tokio::test]
    async fn test_controller_without_consent_is_denied() {
        let controller = Config::new(LocationSource::Network { consent: false }).controller();

        assert_eq!(controller.refresh(3).await, Action::WeatherDidDeny(3));
    }

    #[test]
    fn test_default_log_file_name() {
        assert!(default_log_file().ends_with("daily-weather.log"));
    }
}
