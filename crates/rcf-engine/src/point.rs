//! Point estimate: mean corrected unit price scaled by the requested surface.

use rcf_core::models::{PointEstimate, PointOutcome};

/// Drop missing and non-finite unit prices.
pub fn valid_prices(prices: &[Option<f64>]) -> Vec<f64> {
    prices
        .iter()
        .flatten()
        .copied()
        .filter(|p| p.is_finite())
        .collect()
}

/// Arithmetic mean, `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Estimate the building cost from `sample` (already filtered by
/// [`valid_prices`]). `matched` is the reference-class size, used to tell
/// "no match" apart from "matched but unpriced".
pub fn estimate(sample: &[f64], surface: f64, matched: usize) -> PointOutcome {
    if matched == 0 {
        return PointOutcome::NoMatch;
    }
    match mean(sample) {
        Some(mean_unit_price) => PointOutcome::Estimate(PointEstimate {
            mean_unit_price,
            building_cost: mean_unit_price * surface,
            sample_size: sample.len(),
        }),
        None => PointOutcome::NoValidPriceData { matched },
    }
}
