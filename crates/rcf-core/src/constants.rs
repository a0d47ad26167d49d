//! Shared constants for the forecaster.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default compound annual price-correction rate.
pub const DEFAULT_ANNUAL_RATE: f64 = 0.023;

/// Default minimum reference-class size before an interval is attempted.
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 4;

/// Default two-sided interval coverage.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default significance level for the normality test.
pub const DEFAULT_NORMALITY_ALPHA: f64 = 0.05;

/// Default classification attributes (destination + special techniques flag).
pub const DEFAULT_SCHEMA_ATTRIBUTES: [&str; 2] = ["destination", "special_features"];

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "rcf.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "RCF_LOG";

/// Fallback tracing filter when `RCF_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "rcf=info";

// ---- Shapiro-Wilk limits ----

/// Smallest sample the Shapiro-Wilk approximation accepts.
pub const SHAPIRO_WILK_MIN_N: usize = 3;

/// Largest sample the Shapiro-Wilk approximation is calibrated for.
pub const SHAPIRO_WILK_MAX_N: usize = 5000;
