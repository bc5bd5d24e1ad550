//! Explainability - top contributing features
//!
//! Ranks the model's static feature importances and selects the leading
//! entries for the human-facing "top factors" list.

use std::cmp::Ordering;

use crate::logic::features::feature_name;

/// How many factors a prediction reports.
pub const TOP_FACTOR_COUNT: usize = 3;

/// Feature names ranked by descending importance weight, truncated to `k`.
///
/// Equal weights keep their schema order (the sort is stable), so the
/// ranking is deterministic for a given loaded model. Tolerates fewer than
/// `k` weights; never fails.
pub fn top_factors(importances: &[f64], k: usize) -> Vec<&'static str> {
    let mut ranked: Vec<(usize, f64)> = importances.iter().copied().enumerate().collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(k)
        .filter_map(|(index, _)| feature_name(index))
        .collect()
}
