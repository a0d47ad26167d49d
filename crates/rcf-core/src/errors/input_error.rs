//! Forecast request errors, raised before any record is looked at.

use super::error_code::{self, RcfErrorCode};

/// Rejections of a malformed forecast request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("surface must be a positive finite number, got {value}")]
    NonPositiveSurface { value: f64 },

    #[error("exterior surface must be a non-negative finite number, got {value}")]
    InvalidExteriorSurface { value: f64 },

    #[error("criterion is missing attribute `{attribute}`")]
    MissingAttribute { attribute: String },

    #[error("criterion has attribute `{attribute}` which is not in the schema")]
    UnknownAttribute { attribute: String },
}

impl RcfErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
