//! Error handling for the forecaster.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod normality_error;
pub mod rcf_error;
pub mod record_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::RcfErrorCode;
pub use input_error::InputError;
pub use normality_error::NormalityError;
pub use rcf_error::{RcfError, RcfResult};
pub use record_error::RecordError;
pub use store_error::StoreError;
