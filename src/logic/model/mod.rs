//! Classifier wrapper and risk tier mapping

pub mod inference;
pub mod risk;

pub use inference::{InferenceError, ModelLoadError, ModelMetadata, RiskModel, ScoringModel};
pub use risk::RiskLevel;
