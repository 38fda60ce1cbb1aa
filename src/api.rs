//! OpenWeatherMap current-conditions client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::state::{Condition, Coordinates, WeatherSnapshot};

pub const OPEN_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather API returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("weather response parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("weather response has no condition entries")]
    MissingCondition,
}

#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn current_weather(&self, coordinates: Coordinates) -> Result<WeatherSnapshot, FetchError>;
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    sys: Sys,
    main: Main,
    wind: Wind,
    weather: Vec<WeatherEntry>,
}

#[derive(Debug, Deserialize)]
struct Sys {
    /// Absent over open sea and unclaimed land
    #[serde(default)]
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct Main {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u32,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherEntry {
    main: String,
    description: String,
    icon: String,
}

impl TryFrom<WeatherResponse> for WeatherSnapshot {
    type Error = FetchError;

    fn try_from(data: WeatherResponse) -> Result<Self, Self::Error> {
        if data.weather.is_empty() {
            return Err(FetchError::MissingCondition);
        }

        Ok(WeatherSnapshot {
            name: data.name,
            country: data.sys.country,
            sunrise: data.sys.sunrise,
            sunset: data.sys.sunset,
            temperature: data.main.temp,
            temp_min: data.main.temp_min,
            temp_max: data.main.temp_max,
            humidity: data.main.humidity,
            pressure: data.main.pressure,
            wind_speed: data.wind.speed,
            conditions: data
                .weather
                .into_iter()
                .map(|w| Condition {
                    main: w.main,
                    description: w.description,
                    icon: w.icon,
                })
                .collect(),
        })
    }
}

/// Parse a raw response body into a snapshot.
pub fn parse_snapshot(body: &str) -> Result<WeatherSnapshot, FetchError> {
    let data: WeatherResponse = serde_json::from_str(body)?;
    WeatherSnapshot::try_from(data)
}

// ============================================================================
// Client
// ============================================================================

#[derive(Clone, Debug)]
pub struct OpenWeatherClient {
    http: Client,
    url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(OPEN_WEATHER_URL, api_key)
    }

    pub fn with_url(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn current_weather(&self, coordinates: Coordinates) -> Result<WeatherSnapshot, FetchError> {
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();

        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let snapshot = parse_snapshot(&body)?;
        tracing::debug!(place = %snapshot.name, "fetched current weather");
        Ok(snapshot)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
