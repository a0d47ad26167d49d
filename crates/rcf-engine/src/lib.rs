//! # rcf-engine
//!
//! Reference-class forecasting engine. Selects the historical projects that
//! share the request's classification, corrects their unit prices to the
//! target year, and reports a point estimate, an interval whose method
//! depends on a Shapiro-Wilk normality test, and an exterior works range.
//!
//! Pure and synchronous: no I/O, no state between calls.

pub mod engine;
pub mod exterior;
pub mod inflation;
pub mod interval;
pub mod point;
pub mod reference_class;

pub use engine::ForecastEngine;
pub use interval::{IntervalConfig, IntervalEstimator, NormalityTest};
pub use reference_class::ReferenceClass;
