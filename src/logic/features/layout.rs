//! Feature Schema - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The order below is the order the classifier was trained with. Scoring
//! input vectors are always assembled by name lookup against this list,
//! never from the ordering of a caller's payload - a silent order mismatch
//! corrupts every prediction without raising an error.

/// Feature names in the exact order the model expects them.
/// This is the SINGLE SOURCE OF TRUTH for the feature schema.
pub const FEATURE_SCHEMA: &[&str] = &[
    "temp_mean",            // 0: Daily mean temperature (C)
    "temp_range",           // 1: Daily temperature range (C)
    "humidity_min",         // 2: Daily minimum relative humidity (%)
    "wind_speed_max",       // 3: Daily maximum wind speed (km/h)
    "pressure_mean",        // 4: Daily mean surface pressure (hPa)
    "solar_radiation_mean", // 5: Daily mean shortwave radiation (W/m2)
    "cloud_cover_mean",     // 6: Daily mean cloud cover (%)
];

/// Total number of features.
/// IMPORTANT: Must match FEATURE_SCHEMA.len()!
pub const FEATURE_COUNT: usize = 7;

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_SCHEMA.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_SCHEMA.get(index).copied()
}
