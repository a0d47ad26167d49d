//! RcfErrorCode trait for collaborator-facing error codes.

/// Structured error code for every error enum in the workspace.
/// Collaborators (form surfaces, record stores) branch on the code,
/// never on the message text.
pub trait RcfErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const INVALID_RECORD: &str = "INVALID_RECORD";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const RECORD_NOT_FOUND: &str = "RECORD_NOT_FOUND";
pub const NORMALITY_TEST_FAILED: &str = "NORMALITY_TEST_FAILED";
