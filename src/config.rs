//! Configuration module

use std::env;

use crate::logic::weather::TEMP_RANGE_DEFAULT;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the ONNX model artifact
    pub model_path: String,

    /// Path to the model metadata sidecar (feature order + importances)
    pub model_metadata_path: String,

    /// Weather source base URL
    pub weather_base_url: String,

    /// Timeout for external weather calls, seconds
    pub weather_timeout_secs: u64,

    /// Substitute value for temp_range, which the weather source
    /// cannot provide
    pub temp_range_default: f64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model/wildfire_risk.onnx".to_string()),

            model_metadata_path: env::var("MODEL_METADATA_PATH")
                .unwrap_or_else(|_| "model/wildfire_risk.meta.json".to_string()),

            weather_base_url: env::var("WEATHER_BASE_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".to_string()),

            weather_timeout_secs: env::var("WEATHER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            temp_range_default: env::var("TEMP_RANGE_DEFAULT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(TEMP_RANGE_DEFAULT),
        }
    }
}
