//! Location service - permission and a single coordinate read

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::Coordinates;

/// IP geolocation endpoint used when no fixed coordinates are given.
pub const IP_LOOKUP_URL: &str = "http://ip-api.com/json";

/// Outcome of a foreground permission request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Permission {
    Granted,
    Denied,
}

#[derive(thiserror::Error, Debug)]
pub enum LocationError {
    #[error("location request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("location lookup returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("location lookup failed: {0}")]
    Lookup(String),
    #[error("location unavailable")]
    Unavailable,
}

#[async_trait]
pub trait LocationService: Send + Sync {
    async fn request_foreground_permission(&self) -> Result<Permission, LocationError>;

    async fn current_coordinates(&self) -> Result<Coordinates, LocationError>;
}

/// Coordinates supplied up front (e.g. `--lat/--lon`). Always permitted.
#[derive(Clone, Copy, Debug)]
pub struct FixedLocation {
    coordinates: Coordinates,
}

impl FixedLocation {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl LocationService for FixedLocation {
    async fn request_foreground_permission(&self) -> Result<Permission, LocationError> {
        Ok(Permission::Granted)
    }

    async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Network geolocation by public IP, gated on user consent.
#[derive(Clone, Debug)]
pub struct IpLocation {
    http: Client,
    url: String,
    consent: bool,
}

impl IpLocation {
    pub fn new(consent: bool) -> Self {
        Self::with_url(IP_LOOKUP_URL, consent)
    }

    pub fn with_url(url: impl Into<String>, consent: bool) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            consent,
        }
    }
}

#[async_trait]
impl LocationService for IpLocation {
    async fn request_foreground_permission(&self) -> Result<Permission, LocationError> {
        Ok(if self.consent {
            Permission::Granted
        } else {
            Permission::Denied
        })
    }

    async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Status(status));
        }

        let data: IpLookupResponse = response.json().await?;
        if data.status != "success" {
            return Err(LocationError::Lookup(
                data.message.unwrap_or_else(|| data.status.clone()),
            ));
        }

        match (data.lat, data.lon) {
            (Some(lat), Some(lon)) => {
                tracing::debug!(lat, lon, "resolved location by ip");
                Ok(Coordinates::new(lat, lon))
            }
            _ => Err(LocationError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fixed_location_is_granted() {
        let service = FixedLocation::new(Coordinates::new(40.0, -74.0));
        assert_eq!(
            service.request_foreground_permission().await.unwrap(),
            Permission::Granted
        );
        assert_eq!(
            service.current_coordinates().await.unwrap(),
            Coordinates::new(40.0, -74.0)
        );
    }

    #[tokio::test]
    async fn test_ip_location_without_consent_is_denied() {
        let service = IpLocation::new(false);
        assert_eq!(
            service.request_foreground_permission().await.unwrap(),
            Permission::Denied
        );
    }

    #[tokio::test]
    async fn test_ip_location_reads_coordinates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .and(query_param("fields", "status,message,lat,lon"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "lat": 40.5,
                "lon": -74.25
            })))
            .mount(&mock_server)
            .await;

        let service = IpLocation::with_url(format!("{}/json", mock_server.uri()), true);
        let coords = service.current_coordinates().await.unwrap();

        assert_eq!(coords, Coordinates::new(40.5, -74.25));
    }

    #[tokio::test]
    async fn test_ip_location_fail_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "fail",
                "message": "reserved range"
            })))
            .mount(&mock_server)
            .await;

        let service = IpLocation::with_url(format!("{}/json", mock_server.uri()), true);
        let err = service.current_coordinates().await.unwrap_err();

        assert!(matches!(err, LocationError::Lookup(ref msg) if msg == "reserved range"));
    }

    #[tokio::test]
    async fn test_ip_location_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let service = IpLocation::with_url(format!("{}/json", mock_server.uri()), true);
        let err = service.current_coordinates().await.unwrap_err();

        assert!(matches!(err, LocationError::Status(s) if s.as_u16() == 503));
    }
}
