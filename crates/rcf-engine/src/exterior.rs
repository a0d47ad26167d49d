//! Exterior works range: min and max corrected exterior unit price,
//! scaled by the requested exterior surface.

use rcf_core::models::{ExteriorOutcome, ExteriorRange};

/// Build the exterior outcome from the reference class's corrected
/// exterior unit prices. Missing and non-positive values never contribute.
pub fn estimate<I>(corrected_unit_prices: I, exterior_surface: f64) -> ExteriorOutcome
where
    I: IntoIterator<Item = Option<f64>>,
{
    if exterior_surface <= 0.0 {
        return ExteriorOutcome::NotRequested;
    }

    let (unit_min, unit_max, sample_size) = corrected_unit_prices
        .into_iter()
        .flatten()
        .filter(|p| p.is_finite() && *p > 0.0)
        .fold((f64::INFINITY, f64::NEG_INFINITY, 0usize), |(lo, hi, n), p| {
            (lo.min(p), hi.max(p), n + 1)
        });

    if sample_size == 0 {
        return ExteriorOutcome::NoPricingData;
    }

    ExteriorOutcome::Range(ExteriorRange {
        unit_min,
        unit_max,
        cost_min: unit_min * exterior_surface,
        cost_max: unit_max * exterior_surface,
        sample_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_scales_by_surface() {
        let outcome = estimate([Some(40.0), Some(55.0)], 100.0);
        let r = outcome.range().unwrap();
        assert_eq!((r.unit_min, r.unit_max), (40.0, 55.0));
        assert_eq!((r.cost_min, r.cost_max), (4000.0, 5500.0));
        assert_eq!(r.sample_size, 2);
    }

    #[test]
    fn test_not_requested_when_surface_zero() {
        assert_eq!(estimate([Some(40.0)], 0.0), ExteriorOutcome::NotRequested);
    }

    #[test]
    fn test_no_pricing_data_ignores_missing_and_zero() {
        assert_eq!(
            estimate([None, Some(0.0), Some(-3.0)], 50.0),
            ExteriorOutcome::NoPricingData
        );
    }

    #[test]
    fn test_single_value_range_is_degenerate() {
        let outcome = estimate([None, Some(60.0)], 10.0);
        let r = outcome.range().unwrap();
        assert_eq!(r.cost_min, 600.0);
        assert_eq!(r.cost_max, 600.0);
    }
}
