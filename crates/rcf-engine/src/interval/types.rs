//! Interval estimator configuration.

use rcf_core::config::ForecastConfig;
use rcf_core::constants;

/// Settings for [`IntervalEstimator`](super::IntervalEstimator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalConfig {
    /// Smallest sample that gets an interval (default: 4).
    pub min_sample_size: usize,
    /// Two-sided coverage (default: 0.95).
    pub confidence_level: f64,
    /// Normality significance level (default: 0.05).
    pub normality_alpha: f64,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            min_sample_size: constants::DEFAULT_MIN_SAMPLE_SIZE,
            confidence_level: constants::DEFAULT_CONFIDENCE_LEVEL,
            normality_alpha: constants::DEFAULT_NORMALITY_ALPHA,
        }
    }
}

impl From<&ForecastConfig> for IntervalConfig {
    fn from(config: &ForecastConfig) -> Self {
        Self {
            min_sample_size: config.effective_min_sample_size(),
            confidence_level: config.effective_confidence_level(),
            normality_alpha: config.effective_normality_alpha(),
        }
    }
}

impl IntervalConfig {
    /// Probability mass outside the interval on each side.
    pub fn tail(&self) -> f64 {
        (1.0 - self.confidence_level) / 2.0
    }
}
