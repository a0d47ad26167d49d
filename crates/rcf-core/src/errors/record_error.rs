//! Historical record shape violations.

use super::error_code::{self, RcfErrorCode};

/// A record that does not satisfy the stored-record invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("record `{name}`: {field} must be positive, got {value}")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("record `{name}`: {field} must be non-negative, got {value}")]
    Negative {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("record `{name}`: completion year {year} is after {current_year}")]
    FutureCompletionYear {
        name: String,
        year: i32,
        current_year: i32,
    },

    #[error("record `{name}`: missing classification attribute `{attribute}`")]
    MissingAttribute { name: String, attribute: String },
}

impl RcfErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_RECORD
    }
}
