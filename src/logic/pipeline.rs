//! Inference Pipeline
//!
//! Orchestrates one prediction: validate the raw input, score it, map the
//! probability to a risk tier and attach the top contributing features.
//! Any validation failure aborts before scoring; there are no partial
//! results.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::models::PredictionResult;
use super::explain::{top_factors, TOP_FACTOR_COUNT};
use super::features::FeatureRecord;
use super::model::{RiskLevel, ScoringModel};

/// The prediction pipeline, holding the process-wide shared model.
/// Stateless per call; safe for unlimited concurrent use.
#[derive(Clone)]
pub struct RiskPipeline {
    model: Arc<dyn ScoringModel>,
}

impl RiskPipeline {
    pub fn new(model: Arc<dyn ScoringModel>) -> Self {
        Self { model }
    }

    /// Run one prediction over a raw request object.
    ///
    /// The reported probability is rounded to two decimals and the tier is
    /// derived from that rounded value, so the two are always consistent in
    /// the response. Top factors are a property of the loaded model, not of
    /// the input.
    pub fn predict(&self, raw: &Map<String, Value>) -> AppResult<PredictionResult> {
        let record = FeatureRecord::from_raw(raw)?;

        let probability = self
            .model
            .score(&record.as_vector())
            .map_err(|e| crate::error::AppError::Prediction(e.to_string()))?;

        let probability = round2(probability);
        let risk_level = RiskLevel::from_probability(probability);

        let top_factors = top_factors(self.model.importances(), TOP_FACTOR_COUNT)
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        Ok(PredictionResult {
            probability,
            risk_level,
            top_factors,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
