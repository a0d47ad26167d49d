//! Picks the interval method for a sample.

use rcf_core::models::{IntervalBounds, IntervalOutcome};
use tracing::{debug, warn};

use super::normality::{self, NormalityTest};
use super::{parametric, quantile, IntervalConfig};

/// Distribution-adaptive interval estimator. Stateless apart from config.
#[derive(Debug, Clone, Default)]
pub struct IntervalEstimator {
    config: IntervalConfig,
}

impl IntervalEstimator {
    pub fn new(config: IntervalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntervalConfig {
        &self.config
    }

    /// Estimate an interval for the corrected unit prices in `sample`.
    /// Cost bounds are the unit bounds scaled by `surface`.
    pub fn estimate(&self, sample: &[f64], surface: f64) -> IntervalOutcome {
        let n = sample.len();
        let threshold = self.config.min_sample_size;
        if n < threshold {
            debug!(n, threshold, "sample below interval threshold");
            return IntervalOutcome::InsufficientData {
                count: n,
                threshold,
            };
        }

        let test = match normality::shapiro_wilk(sample) {
            Ok(test) => test,
            Err(reason) => {
                warn!(n, %reason, "normality test failed");
                return IntervalOutcome::TestFailed { reason };
            }
        };
        debug!(n, w = test.w, p_value = test.p_value, "shapiro-wilk");

        if test.is_normal(self.config.normality_alpha) {
            self.normal_interval(sample, surface, &test)
        } else {
            self.quantile_interval(sample, surface, &test)
        }
    }

    fn normal_interval(
        &self,
        sample: &[f64],
        surface: f64,
        test: &NormalityTest,
    ) -> IntervalOutcome {
        match parametric::interval(sample, self.config.confidence_level) {
            Ok((_, lower, upper)) => IntervalOutcome::Normal(bounds(lower, upper, surface, test)),
            Err(reason) => IntervalOutcome::TestFailed { reason },
        }
    }

    fn quantile_interval(
        &self,
        sample: &[f64],
        surface: f64,
        test: &NormalityTest,
    ) -> IntervalOutcome {
        match quantile::interval(sample, self.config.tail()) {
            Some((lower, upper)) => IntervalOutcome::NonNormal(bounds(lower, upper, surface, test)),
            // Unreachable past the normality gate, which needs n >= 3.
            None => IntervalOutcome::InsufficientData {
                count: sample.len(),
                threshold: self.config.min_sample_size,
            },
        }
    }
}

fn bounds(lower: f64, upper: f64, surface: f64, test: &NormalityTest) -> IntervalBounds {
    IntervalBounds {
        lower,
        upper,
        lower_cost: lower * surface,
        upper_cost: upper * surface,
        p_value: test.p_value,
        w: test.w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcf_core::errors::NormalityError;

    #[test]
    fn test_below_threshold_is_insufficient() {
        let est = IntervalEstimator::default();
        assert_eq!(
            est.estimate(&[1000.0, 1100.0], 100.0),
            IntervalOutcome::InsufficientData {
                count: 2,
                threshold: 4
            }
        );
    }

    #[test]
    fn test_threshold_three_allows_three() {
        let est = IntervalEstimator::new(IntervalConfig {
            min_sample_size: 3,
            ..Default::default()
        });
        let outcome = est.estimate(&[1000.0, 1100.0, 1050.0], 10.0);
        assert_eq!(outcome.tag(), "normal");
    }

    #[test]
    fn test_normal_branch() {
        let est = IntervalEstimator::default();
        let sample = [1000.0, 1100.0, 1050.0, 1200.0];
        let outcome = est.estimate(&sample, 100.0);
        let b = match outcome {
            IntervalOutcome::Normal(b) => b,
            other => panic!("expected normal interval, got {other:?}"),
        };
        assert!(b.p_value >= 0.05);
        assert!(b.lower <= 1087.5 && 1087.5 <= b.upper);
        assert!((b.lower_cost - b.lower * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_normal_branch() {
        let est = IntervalEstimator::default();
        let sample = [
            1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 5000.0,
        ];
        let outcome = est.estimate(&sample, 1.0);
        let b = match outcome {
            IntervalOutcome::NonNormal(b) => b,
            other => panic!("expected non-normal interval, got {other:?}"),
        };
        assert!(b.p_value < 0.05);
        assert_eq!(b.lower, 1000.0);
        // rank 0.975 * 9 = 8.775 → 1000 + 0.775 * 4000
        assert!((b.upper - 4100.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_values_report_failure() {
        let est = IntervalEstimator::default();
        assert_eq!(
            est.estimate(&[900.0; 5], 1.0),
            IntervalOutcome::TestFailed {
                reason: NormalityError::ZeroRange { n: 5 }
            }
        );
    }

    #[test]
    fn test_threshold_below_test_minimum_reports_failure() {
        let est = IntervalEstimator::new(IntervalConfig {
            min_sample_size: 1,
            ..Default::default()
        });
        assert!(matches!(
            est.estimate(&[900.0, 950.0], 1.0),
            IntervalOutcome::TestFailed {
                reason: NormalityError::SampleTooSmall { n: 2, .. }
            }
        ));
    }

    #[test]
    fn test_overflowing_variance_reports_numerical_failure() {
        let est = IntervalEstimator::default();
        let outcome = est.estimate(&[1e308, 1.5e308, 1.7e308, 1.2e308], 1.0);
        assert!(
            matches!(
                outcome,
                IntervalOutcome::TestFailed {
                    reason: NormalityError::Numerical { .. }
                }
            ),
            "expected a numerical failure, got {outcome:?}"
        );
    }
}
