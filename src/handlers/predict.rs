//! Prediction handler

use axum::{extract::State, Json};
use serde_json::{Map, Value};

use crate::models::PredictionResult;
use crate::{AppResult, AppState};

/// Score a raw feature payload and return probability, risk tier and
/// top contributing factors.
pub async fn predict(
    State(state): State<AppState>,
    Json(raw): Json<Map<String, Value>>,
) -> AppResult<Json<PredictionResult>> {
    let result = state.pipeline.predict(&raw)?;

    tracing::debug!(
        probability = result.probability,
        risk_level = ?result.risk_level,
        "prediction served"
    );

    Ok(Json(result))
}
