//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the trained wildfire classifier and scores single feature vectors.
//! The ONNX graph carries the probability model; a sidecar JSON metadata file
//! exported at training time carries what ONNX cannot: the feature order the
//! model was trained with and its static feature importances. Both are
//! validated against the schema at load, so an incompatible artifact refuses
//! to start the process instead of silently mis-scoring.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::{FEATURE_COUNT, FEATURE_SCHEMA};

/// A loaded classifier: probability scoring plus static importances.
///
/// Implementations must be shareable across request handlers; the pipeline
/// holds one behind an `Arc` for the life of the process.
pub trait ScoringModel: Send + Sync {
    /// Probability of wildfire occurrence in [0, 1] for one feature vector
    /// given in schema order.
    fn score(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, InferenceError>;

    /// Per-feature importance weights in schema order. Nonnegative, stable
    /// for the lifetime of the loaded model; the total is model-defined.
    fn importances(&self) -> &[f64; FEATURE_COUNT];
}

/// Scoring failure at request time. Surfaced to the caller as a
/// "Prediction failed" response, never a crash.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InferenceError(pub String);

/// Artifact problems at startup. All of these are fatal: the process must
/// not serve requests without a usable model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact unreadable: {0}")]
    Artifact(String),

    #[error("model metadata unreadable: {0}")]
    Metadata(String),

    #[error("metadata feature order does not match schema: expected {expected:?}, got {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("expected {expected} importance weights, got {actual}")]
    ImportanceCount { expected: usize, actual: usize },

    #[error("importance weight for {0} is not a nonnegative finite number")]
    BadImportance(String),
}

/// Sidecar metadata written next to the ONNX artifact by the training
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub feature_names: Vec<String>,
    pub feature_importances: Vec<f64>,
    #[serde(default)]
    pub trained_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// The production classifier: an ONNX session plus validated importances.
///
/// `ort::Session::run` needs `&mut self`, so the session sits behind a
/// `parking_lot::Mutex` held only for the duration of a single run. Nothing
/// else in the model mutates after load.
pub struct RiskModel {
    session: Mutex<Session>,
    importances: [f64; FEATURE_COUNT],
}

impl RiskModel {
    /// Load the ONNX artifact and its metadata sidecar.
    pub fn load(model_path: &str, metadata_path: &str) -> Result<Self, ModelLoadError> {
        tracing::info!("Loading scoring model from {}", model_path);

        if !Path::new(model_path).exists() {
            return Err(ModelLoadError::Artifact(format!("not found: {}", model_path)));
        }

        let session = Session::builder()
            .map_err(|e| ModelLoadError::Artifact(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelLoadError::Artifact(format!("optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ModelLoadError::Artifact(e.to_string()))?;

        let metadata = load_metadata(metadata_path)?;
        let importances = validate_metadata(&metadata)?;

        if let Some(trained_at) = metadata.trained_at {
            tracing::info!("Model trained at {}", trained_at);
        }
        tracing::info!("Scoring model loaded ({} features)", FEATURE_COUNT);

        Ok(Self {
            session: Mutex::new(session),
            importances,
        })
    }
}

impl ScoringModel for RiskModel {
    fn score(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, InferenceError> {
        let input: Vec<f32> = features.iter().map(|&v| v as f32).collect();

        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), input)
            .map_err(|e| InferenceError(format!("input shape error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("tensor error: {}", e)))?;

        let mut session = self.session.lock();

        // Classifier graphs exported from tree ensembles emit the class
        // label first and the probability tensor last.
        let output_name = session
            .outputs()
            .last()
            .map(|o| o.name().to_string())
            .ok_or_else(|| InferenceError("model defines no outputs".to_string()))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError("missing probability output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("extract error: {}", e)))?;

        // Row is [P(no fire), P(fire)]; the positive class is last.
        let probability = output_tensor
            .1
            .last()
            .copied()
            .ok_or_else(|| InferenceError("empty probability output".to_string()))?;

        Ok((probability as f64).clamp(0.0, 1.0))
    }

    fn importances(&self) -> &[f64; FEATURE_COUNT] {
        &self.importances
    }
}

fn load_metadata(path: &str) -> Result<ModelMetadata, ModelLoadError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ModelLoadError::Metadata(format!("{}: {}", path, e)))?;
    serde_json::from_str(&raw).map_err(|e| ModelLoadError::Metadata(e.to_string()))
}

/// Check the sidecar against the schema and extract the importance vector.
fn validate_metadata(metadata: &ModelMetadata) -> Result<[f64; FEATURE_COUNT], ModelLoadError> {
    let expected: Vec<String> = FEATURE_SCHEMA.iter().map(|s| s.to_string()).collect();
    if metadata.feature_names != expected {
        return Err(ModelLoadError::SchemaMismatch {
            expected,
            actual: metadata.feature_names.clone(),
        });
    }

    if metadata.feature_importances.len() != FEATURE_COUNT {
        return Err(ModelLoadError::ImportanceCount {
            expected: FEATURE_COUNT,
            actual: metadata.feature_importances.len(),
        });
    }

    let mut importances = [0.0; FEATURE_COUNT];
    for (i, &weight) in metadata.feature_importances.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ModelLoadError::BadImportance(FEATURE_SCHEMA[i].to_string()));
        }
        importances[i] = weight;
    }

    Ok(importances)
}
