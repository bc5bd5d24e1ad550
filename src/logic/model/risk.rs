//! Risk Tier Mapping
//!
//! Pure probability-to-tier mapping. Boundaries are half-open on the lower
//! side: exactly 0.33 is MEDIUM and exactly 0.66 is HIGH.

use serde::{Deserialize, Serialize};

/// Probability at or above which risk is at least MEDIUM.
pub const MEDIUM_THRESHOLD: f64 = 0.33;

/// Probability at or above which risk is HIGH.
pub const HIGH_THRESHOLD: f64 = 0.66;

/// Discrete wildfire risk tier reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Map a probability in [0, 1] to its tier.
    pub fn from_probability(probability: f64) -> Self {
        if probability < MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if probability < HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
