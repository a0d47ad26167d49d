//! # rcf-core
//!
//! Foundation crate for the reference-class cost forecaster.
//! Defines the record and result types, errors, config, tracing setup,
//! and the record-source seam. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RcfConfig;
pub use errors::{RcfError, RcfResult};
pub use models::{
    AttributeValue, Classification, ClassificationSchema, ForecastRequest, ForecastResult,
    ProjectRecord,
};
