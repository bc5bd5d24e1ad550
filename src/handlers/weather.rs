//! Weather-by-location handler

use axum::{extract::State, Json};

use crate::logic::features::FeatureRecord;
use crate::models::WeatherQuery;
use crate::{AppResult, AppState};

/// Resolve a known city and return its current conditions shaped as a
/// complete feature record, ready to feed back into `/predict`.
pub async fn by_city(
    State(state): State<AppState>,
    Json(query): Json<WeatherQuery>,
) -> AppResult<Json<FeatureRecord>> {
    let record = state.adapter.fetch_features(&query.city).await?;
    Ok(Json(record))
}
