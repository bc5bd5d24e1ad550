//! Error handling
//!
//! Every per-request failure maps to a structured JSON error payload with a
//! distinguishable category; nothing surfaces a stack trace and nothing
//! crashes the serving process. Model-load failures live in the model
//! module - they are startup-fatal and never become responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Schema validation: required features absent from the request,
    /// all of them reported together.
    #[error("Missing features: {}", .0.join(", "))]
    MissingFeatures(Vec<String>),

    /// Schema validation: a feature was present but not coercible to a
    /// finite number.
    #[error("Non-numeric value for feature: {0}")]
    NonNumericFeature(String),

    /// The requested city is not in the known-location table.
    #[error("Invalid city selected")]
    InvalidLocation(String),

    /// External weather source failed: network, timeout or malformed payload.
    #[error("Weather data fetch failed: {0}")]
    WeatherFetch(String),

    /// Scoring failed after validation passed.
    #[error("Prediction failed: {0}")]
    Prediction(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingFeatures(names) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("Missing features: {}", names.join(", ")) }),
            ),
            AppError::NonNumericFeature(name) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("Non-numeric value for feature: {}", name) }),
            ),
            AppError::InvalidLocation(city) => {
                tracing::warn!("Unknown city requested: {}", city);
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "Invalid city selected" }),
                )
            }
            AppError::WeatherFetch(cause) => {
                tracing::error!("Weather fetch failed: {}", cause);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Weather data fetch failed", "details": cause }),
                )
            }
            AppError::Prediction(cause) => {
                tracing::error!("Prediction failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Prediction failed", "details": cause }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
