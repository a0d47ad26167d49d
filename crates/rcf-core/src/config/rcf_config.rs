//! Top-level configuration with layered resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ForecastConfig, SchemaConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`RCF_*`)
/// 3. Project config (`rcf.toml` in the project root)
/// 4. User config (`~/.rcf/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RcfConfig {
    pub forecast: ForecastConfig,
    pub schema: SchemaConfig,
}

/// Caller-supplied overrides, e.g. from a form or command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub annual_rate: Option<f64>,
    pub min_sample_size: Option<usize>,
    pub confidence_level: Option<f64>,
    pub normality_alpha: Option<f64>,
}

impl RcfConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RcfConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RcfConfig) -> Result<(), ConfigError> {
        let f = &config.forecast;
        if let Some(rate) = f.annual_rate {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "forecast.annual_rate".to_string(),
                    message: "must be a finite number greater than -1".to_string(),
                });
            }
        }
        if let Some(min) = f.min_sample_size {
            if min == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "forecast.min_sample_size".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(level) = f.confidence_level {
            if !(level > 0.0 && level < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "forecast.confidence_level".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(alpha) = f.normality_alpha {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "forecast.normality_alpha".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for attribute in &config.schema.attributes {
            if attribute.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "schema.attributes".to_string(),
                    message: "attribute names must not be blank".to_string(),
                });
            }
            if !seen.insert(attribute.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "schema.attributes".to_string(),
                    message: format!("duplicate attribute `{attribute}`"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.rcf/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".rcf").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RcfConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RcfConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut RcfConfig, other: &RcfConfig) {
        if other.forecast.annual_rate.is_some() {
            base.forecast.annual_rate = other.forecast.annual_rate;
        }
        if other.forecast.min_sample_size.is_some() {
            base.forecast.min_sample_size = other.forecast.min_sample_size;
        }
        if other.forecast.confidence_level.is_some() {
            base.forecast.confidence_level = other.forecast.confidence_level;
        }
        if other.forecast.normality_alpha.is_some() {
            base.forecast.normality_alpha = other.forecast.normality_alpha;
        }
        if !other.schema.attributes.is_empty() {
            base.schema.attributes = other.schema.attributes.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RCF_ANNUAL_RATE`, `RCF_MIN_SAMPLE_SIZE`, `RCF_SCHEMA_ATTRIBUTES=a,b`.
    fn apply_env_overrides(config: &mut RcfConfig) {
        if let Ok(val) = std::env::var("RCF_ANNUAL_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.forecast.annual_rate = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RCF_MIN_SAMPLE_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.forecast.min_sample_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RCF_CONFIDENCE_LEVEL") {
            if let Ok(v) = val.parse::<f64>() {
                config.forecast.confidence_level = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RCF_NORMALITY_ALPHA") {
            if let Ok(v) = val.parse::<f64>() {
                config.forecast.normality_alpha = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RCF_SCHEMA_ATTRIBUTES") {
            let attributes: Vec<String> = val
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
            if !attributes.is_empty() {
                config.schema.attributes = attributes;
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut RcfConfig, o: &ConfigOverrides) {
        if let Some(v) = o.annual_rate {
            config.forecast.annual_rate = Some(v);
        }
        if let Some(v) = o.min_sample_size {
            config.forecast.min_sample_size = Some(v);
        }
        if let Some(v) = o.confidence_level {
            config.forecast.confidence_level = Some(v);
        }
        if let Some(v) = o.normality_alpha {
            config.forecast.normality_alpha = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
