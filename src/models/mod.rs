//! API request/response types

use serde::{Deserialize, Serialize};

use crate::logic::model::RiskLevel;

/// Result of one prediction, as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability of wildfire occurrence, rounded to two decimals.
    pub probability: f64,
    pub risk_level: RiskLevel,
    /// Up to three feature names, most influential first.
    pub top_factors: Vec<String>,
}

/// Weather-by-location request body.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
}
