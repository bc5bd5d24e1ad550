//! Weather-to-feature adapter
//!
//! Turns a named city into a complete `FeatureRecord` by querying the
//! external weather source and renaming its readings into the feature
//! schema. The source has no notion of daily temperature range, so
//! `temp_range` is filled from a named, configurable default instead.

use serde_json::{json, Map};

use crate::error::{AppError, AppResult};
use crate::logic::features::FeatureRecord;
use super::client::{WeatherClient, WeatherObservation};
use super::locations;

/// Fallback for `temp_range`, which no external field maps to.
/// Overridable via `TEMP_RANGE_DEFAULT` in the environment.
pub const TEMP_RANGE_DEFAULT: f64 = 5.0;

pub struct WeatherAdapter {
    client: WeatherClient,
    temp_range_default: f64,
}

impl WeatherAdapter {
    pub fn new(client: WeatherClient, temp_range_default: f64) -> Self {
        Self {
            client,
            temp_range_default,
        }
    }

    /// Resolve a city and produce the full seven-feature record for it.
    /// Fails whole: callers never see a partially populated record.
    pub async fn fetch_features(&self, city: &str) -> AppResult<FeatureRecord> {
        let location =
            locations::resolve(city).ok_or_else(|| AppError::InvalidLocation(city.to_string()))?;

        tracing::debug!(city = location.key, "fetching current conditions");

        let observation = self
            .client
            .current_conditions(location.latitude, location.longitude)
            .await
            .map_err(|e| AppError::WeatherFetch(e.to_string()))?;

        record_from_observation(&observation, self.temp_range_default)
    }
}

/// Rename external readings into schema features and validate the result.
/// A non-finite reading from the source fails here as a fetch error, the
/// same as a missing payload field would.
fn record_from_observation(
    observation: &WeatherObservation,
    temp_range: f64,
) -> AppResult<FeatureRecord> {
    let mut raw = Map::new();
    raw.insert("temp_mean".to_string(), json!(observation.temperature));
    raw.insert("temp_range".to_string(), json!(temp_range));
    raw.insert("humidity_min".to_string(), json!(observation.humidity));
    raw.insert("wind_speed_max".to_string(), json!(observation.wind_speed));
    raw.insert("pressure_mean".to_string(), json!(observation.pressure));
    raw.insert(
        "solar_radiation_mean".to_string(),
        json!(observation.solar_radiation),
    );
    raw.insert("cloud_cover_mean".to_string(), json!(observation.cloud_cover));

    FeatureRecord::from_raw(&raw).map_err(|e| AppError::WeatherFetch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FEATURE_SCHEMA;
    use std::time::Duration;

    fn sample_observation() -> WeatherObservation {
        WeatherObservation {
            temperature: 33.4,
            wind_speed: 14.2,
            cloud_cover: 25.0,
            humidity: 61.0,
            pressure: 1007.9,
            solar_radiation: 180.0,
        }
    }

    fn offline_adapter() -> WeatherAdapter {
        // Points at a closed port; only resolution-failure paths may run.
        let client = WeatherClient::new(
            "http://127.0.0.1:9".to_string(),
            Duration::from_millis(100),
        );
        WeatherAdapter::new(client, TEMP_RANGE_DEFAULT)
    }

    #[test]
    fn test_observation_maps_to_schema_names() {
        let record = record_from_observation(&sample_observation(), TEMP_RANGE_DEFAULT).unwrap();

        assert_eq!(record.get("temp_mean"), Some(33.4));
        assert_eq!(record.get("wind_speed_max"), Some(14.2));
        assert_eq!(record.get("cloud_cover_mean"), Some(25.0));
        assert_eq!(record.get("humidity_min"), Some(61.0));
        assert_eq!(record.get("pressure_mean"), Some(1007.9));
        assert_eq!(record.get("solar_radiation_mean"), Some(180.0));
    }

    #[test]
    fn test_temp_range_comes_from_named_default() {
        let record = record_from_observation(&sample_observation(), TEMP_RANGE_DEFAULT).unwrap();
        assert_eq!(record.get("temp_range"), Some(TEMP_RANGE_DEFAULT));

        let overridden = record_from_observation(&sample_observation(), 11.5).unwrap();
        assert_eq!(overridden.get("temp_range"), Some(11.5));
    }

    #[test]
    fn test_record_is_complete() {
        let record = record_from_observation(&sample_observation(), TEMP_RANGE_DEFAULT).unwrap();
        for name in FEATURE_SCHEMA {
            assert!(record.get(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn test_nan_reading_fails_as_fetch_error() {
        let mut observation = sample_observation();
        observation.pressure = f64::NAN;

        assert!(matches!(
            record_from_observation(&observation, TEMP_RANGE_DEFAULT),
            Err(AppError::WeatherFetch(_))
        ));
    }

    /// Serve one canned Open-Meteo response on an ephemeral local port.
    async fn spawn_weather_stub(body: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        addr
    }

    #[tokio::test]
    async fn test_fetch_features_returns_complete_record_for_known_city() {
        let addr = spawn_weather_stub(
            r#"{
                "latitude": 13.0827,
                "longitude": 80.2707,
                "current": {
                    "time": "2025-04-02T09:00",
                    "temperature_2m": 33.4,
                    "wind_speed_10m": 14.2,
                    "cloud_cover": 25.0
                },
                "hourly": {
                    "time": ["2025-04-02T00:00", "2025-04-02T01:00"],
                    "relative_humidity_2m": [61.0, 64.0],
                    "surface_pressure": [1007.9, 1008.3],
                    "shortwave_radiation": [0.0, 12.5]
                }
            }"#,
        )
        .await;

        let client = WeatherClient::new(format!("http://{}", addr), Duration::from_secs(1));
        let adapter = WeatherAdapter::new(client, TEMP_RANGE_DEFAULT);

        let record = adapter.fetch_features("chennai").await.unwrap();

        for name in FEATURE_SCHEMA {
            assert!(record.get(name).is_some(), "missing {}", name);
        }
        assert_eq!(record.get("temp_mean"), Some(33.4));
        assert_eq!(record.get("wind_speed_max"), Some(14.2));
        assert_eq!(record.get("cloud_cover_mean"), Some(25.0));
        assert_eq!(record.get("humidity_min"), Some(61.0));
        assert_eq!(record.get("pressure_mean"), Some(1007.9));
        assert_eq!(record.get("solar_radiation_mean"), Some(0.0));
        assert_eq!(record.get("temp_range"), Some(TEMP_RANGE_DEFAULT));
    }

    #[test]
    fn test_unknown_city_fails_before_any_network_call() {
        let adapter = offline_adapter();

        let result = tokio_test::block_on(adapter.fetch_features("atlantis"));
        assert!(matches!(result, Err(AppError::InvalidLocation(_))));
    }

    #[test]
    fn test_known_city_reaches_the_fetch_stage() {
        let adapter = offline_adapter();

        // chennai resolves, so the failure is the (unreachable) source,
        // not location validation.
        let result = tokio_test::block_on(adapter.fetch_features("chennai"));
        assert!(matches!(result, Err(AppError::WeatherFetch(_))));
    }
}
