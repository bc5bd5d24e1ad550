//! Open-Meteo client
//!
//! Fetches current conditions plus the first forecast hour for a coordinate
//! pair. The external payload is parsed into typed structs with explicit
//! presence checks per required path, so a missing field becomes a named
//! fetch error rather than a lookup panic downstream.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Fields the adapter reads from one weather query, already extracted out
/// of the nested payload.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub wind_speed: f64,
    pub cloud_cover: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub solar_radiation: f64,
}

/// External weather source failures. All recoverable per request and never
/// retried automatically.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("weather source returned status {0}")]
    Status(u16),

    #[error("malformed weather payload: {0}")]
    Parse(String),

    #[error("weather payload missing {0}")]
    MissingField(&'static str),
}

/// HTTP client for the weather source, bounded by a request timeout.
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { http, base_url }
    }

    /// Query current conditions and the first-hour series at a coordinate.
    pub async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, FetchError> {
        let url = format!(
            "{}?latitude={}&longitude={}\
             &current=temperature_2m,wind_speed_10m,cloud_cover\
             &hourly=relative_humidity_2m,surface_pressure,shortwave_radiation\
             &forecast_days=1",
            self.base_url, latitude, longitude
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let payload: ForecastResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        extract(payload)
    }
}

// Typed view of the Open-Meteo response; only the paths we read.

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentBlock>,
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
    cloud_cover: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    relative_humidity_2m: Option<Vec<f64>>,
    surface_pressure: Option<Vec<f64>>,
    shortwave_radiation: Option<Vec<f64>>,
}

/// Pull the required readings out of the parsed payload, naming whichever
/// path is absent.
fn extract(payload: ForecastResponse) -> Result<WeatherObservation, FetchError> {
    let current = payload.current.ok_or(FetchError::MissingField("current"))?;
    let hourly = payload.hourly.ok_or(FetchError::MissingField("hourly"))?;

    Ok(WeatherObservation {
        temperature: current
            .temperature_2m
            .ok_or(FetchError::MissingField("current.temperature_2m"))?,
        wind_speed: current
            .wind_speed_10m
            .ok_or(FetchError::MissingField("current.wind_speed_10m"))?,
        cloud_cover: current
            .cloud_cover
            .ok_or(FetchError::MissingField("current.cloud_cover"))?,
        humidity: first_hour(hourly.relative_humidity_2m, "hourly.relative_humidity_2m")?,
        pressure: first_hour(hourly.surface_pressure, "hourly.surface_pressure")?,
        solar_radiation: first_hour(hourly.shortwave_radiation, "hourly.shortwave_radiation")?,
    })
}

fn first_hour(series: Option<Vec<f64>>, path: &'static str) -> Result<f64, FetchError> {
    series
        .and_then(|values| values.first().copied())
        .ok_or(FetchError::MissingField(path))
}
