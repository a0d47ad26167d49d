//! Forecast parameters that have varied between deployments.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Numeric knobs of the estimation pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForecastConfig {
    /// Compound annual price-correction rate. Default: 0.023.
    pub annual_rate: Option<f64>,
    /// Minimum reference-class size for an interval. Default: 4.
    pub min_sample_size: Option<usize>,
    /// Two-sided interval coverage. Default: 0.95.
    pub confidence_level: Option<f64>,
    /// Normality-test significance level. Default: 0.05.
    pub normality_alpha: Option<f64>,
}

impl ForecastConfig {
    /// Returns the effective annual rate, defaulting to 0.023.
    pub fn effective_annual_rate(&self) -> f64 {
        self.annual_rate.unwrap_or(constants::DEFAULT_ANNUAL_RATE)
    }

    /// Returns the effective minimum sample size, defaulting to 4.
    pub fn effective_min_sample_size(&self) -> usize {
        self.min_sample_size
            .unwrap_or(constants::DEFAULT_MIN_SAMPLE_SIZE)
    }

    /// Returns the effective confidence level, defaulting to 0.95.
    pub fn effective_confidence_level(&self) -> f64 {
        self.confidence_level
            .unwrap_or(constants::DEFAULT_CONFIDENCE_LEVEL)
    }

    /// Returns the effective normality alpha, defaulting to 0.05.
    pub fn effective_normality_alpha(&self) -> f64 {
        self.normality_alpha
            .unwrap_or(constants::DEFAULT_NORMALITY_ALPHA)
    }
}
