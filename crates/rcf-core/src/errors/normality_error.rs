//! Normality-test failures.
//!
//! These never reach a caller as `Err`: the interval estimator turns them
//! into a reported outcome so the rest of the forecast still runs.

use serde::{Deserialize, Serialize};

use super::error_code::{self, RcfErrorCode};

/// Reasons the Shapiro-Wilk test cannot produce a p-value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalityError {
    #[error("sample of {n} is below the test minimum of {min}")]
    SampleTooSmall { n: usize, min: usize },

    #[error("sample of {n} exceeds the test maximum of {max}")]
    SampleTooLarge { n: usize, max: usize },

    #[error("all {n} values are identical")]
    ZeroRange { n: usize },

    #[error("sample contains a non-finite value")]
    NonFinite,

    #[error("numerical failure: {message}")]
    Numerical { message: String },
}

impl RcfErrorCode for NormalityError {
    fn error_code(&self) -> &'static str {
        error_code::NORMALITY_TEST_FAILED
    }
}
