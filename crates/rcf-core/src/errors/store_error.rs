//! Record-source errors.

use super::error_code::{self, RcfErrorCode};
use super::RecordError;

/// Errors surfaced by a [`RecordSource`](crate::traits::RecordSource).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record index {index} out of range (store holds {len} records)")]
    NotFound { index: usize, len: usize },

    #[error("rejected record: {0}")]
    Rejected(#[from] RecordError),

    #[error("record store lock poisoned")]
    Poisoned,

    #[error("record store unavailable: {message}")]
    Unavailable { message: String },
}

impl RcfErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::RECORD_NOT_FOUND,
            Self::Rejected(e) => e.error_code(),
            Self::Poisoned | Self::Unavailable { .. } => error_code::STORE_ERROR,
        }
    }
}
