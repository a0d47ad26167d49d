//! Forecast output. One tagged variant per outcome, so "no data" and
//! "test failed" travel in the result instead of as errors.

use serde::{Deserialize, Serialize};

use crate::errors::NormalityError;

/// Central building-cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEstimate {
    /// Mean corrected unit price (€/m²).
    pub mean_unit_price: f64,
    /// `mean_unit_price * surface`.
    pub building_cost: f64,
    /// Number of unit prices in the mean.
    pub sample_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PointOutcome {
    Estimate(PointEstimate),
    /// The reference class is empty.
    NoMatch,
    /// Records matched, but none had a derivable unit price.
    NoValidPriceData { matched: usize },
}

impl PointOutcome {
    pub fn estimate(&self) -> Option<&PointEstimate> {
        match self {
            Self::Estimate(e) => Some(e),
            _ => None,
        }
    }
}

/// Interval on the mean unit price, plus the same bounds scaled by surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBounds {
    pub lower: f64,
    pub upper: f64,
    pub lower_cost: f64,
    pub upper_cost: f64,
    /// Shapiro-Wilk p-value that selected the method.
    pub p_value: f64,
    /// Shapiro-Wilk W statistic.
    pub w: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum IntervalOutcome {
    /// z-interval around the mean; sample judged approximately normal.
    Normal(IntervalBounds),
    /// Empirical quantile interval; normality rejected.
    NonNormal(IntervalBounds),
    /// Sample below the configured minimum.
    InsufficientData { count: usize, threshold: usize },
    /// The normality test could not run on this sample.
    TestFailed { reason: NormalityError },
}

impl IntervalOutcome {
    pub fn bounds(&self) -> Option<&IntervalBounds> {
        match self {
            Self::Normal(b) | Self::NonNormal(b) => Some(b),
            _ => None,
        }
    }

    /// Short tag: `normal`, `non-normal`, `insufficient-data`, `test-failed`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Normal(_) => "normal",
            Self::NonNormal(_) => "non-normal",
            Self::InsufficientData { .. } => "insufficient-data",
            Self::TestFailed { .. } => "test-failed",
        }
    }
}

/// Min–max exterior works range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExteriorRange {
    pub unit_min: f64,
    pub unit_max: f64,
    pub cost_min: f64,
    pub cost_max: f64,
    pub sample_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExteriorOutcome {
    Range(ExteriorRange),
    /// Requested exterior surface was zero.
    NotRequested,
    /// Exterior requested but no matched record carries exterior pricing.
    NoPricingData,
}

impl ExteriorOutcome {
    pub fn range(&self) -> Option<&ExteriorRange> {
        match self {
            Self::Range(r) => Some(r),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

/// A matched record with its time-corrected prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectedProject {
    pub name: String,
    pub completion_year: i32,
    pub unit_price: Option<f64>,
    pub corrected_unit_price: Option<f64>,
    pub exterior_unit_price: Option<f64>,
    pub corrected_exterior_unit_price: Option<f64>,
}

/// Everything one forecast call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub match_count: usize,
    /// Matched records without a derivable building unit price.
    pub excluded_count: usize,
    pub target_year: i32,
    pub annual_rate: f64,
    pub estimate: PointOutcome,
    pub interval: IntervalOutcome,
    pub exterior: ExteriorOutcome,
    /// Building estimate plus exterior range, when both exist.
    pub total_range: Option<CostRange>,
    pub projects: Vec<CorrectedProject>,
}

impl ForecastResult {
    pub fn mean_unit_price(&self) -> Option<f64> {
        self.estimate.estimate().map(|e| e.mean_unit_price)
    }

    pub fn building_cost(&self) -> Option<f64> {
        self.estimate.estimate().map(|e| e.building_cost)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
