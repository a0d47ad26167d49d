//! Distribution-adaptive interval estimation.
//!
//! Method selection:
//! - n < min_sample_size → insufficient data, no interval
//! - Shapiro-Wilk p ≥ alpha → z-interval on the mean
//! - Shapiro-Wilk p < alpha → empirical quantile interval
//! - normality test cannot run → reported failure, forecast continues

pub mod normality;
pub mod parametric;
pub mod quantile;
pub mod selector;
pub mod types;

pub use normality::{shapiro_wilk, NormalityTest};
pub use selector::IntervalEstimator;
pub use types::IntervalConfig;
