//! Top-level error aggregating subsystem errors.

use super::error_code::RcfErrorCode;
use super::{ConfigError, InputError, NormalityError, RecordError, StoreError};

/// Errors a forecast call can return to its caller.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RcfError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Normality test error: {0}")]
    Normality(#[from] NormalityError),
}

impl RcfErrorCode for RcfError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Normality(e) => e.error_code(),
        }
    }
}

/// Result alias used across the workspace.
pub type RcfResult<T> = Result<T, RcfError>;
