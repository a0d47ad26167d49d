//! Tests for layered configuration loading.

use std::sync::Mutex;

use rcf_core::config::{ConfigOverrides, RcfConfig};
use rcf_core::errors::ConfigError;

/// Serializes tests that touch `RCF_*` environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_defaults() {
    let config = RcfConfig::default();
    assert_eq!(config.forecast.effective_annual_rate(), 0.023);
    assert_eq!(config.forecast.effective_min_sample_size(), 4);
    assert_eq!(config.forecast.effective_confidence_level(), 0.95);
    assert_eq!(config.forecast.effective_normality_alpha(), 0.05);
    assert_eq!(
        config.schema.effective_attributes(),
        vec!["destination".to_string(), "special_features".to_string()]
    );
}

#[test]
fn test_from_toml() {
    let config = RcfConfig::from_toml(
        r#"
        [forecast]
        annual_rate = 0.027
        min_sample_size = 3

        [schema]
        attributes = ["has_hvac", "has_solar"]
        "#,
    )
    .unwrap();
    assert_eq!(config.forecast.effective_annual_rate(), 0.027);
    assert_eq!(config.forecast.effective_min_sample_size(), 3);
    assert_eq!(config.forecast.effective_confidence_level(), 0.95);
    assert_eq!(config.schema.schema().attributes(), ["has_hvac", "has_solar"]);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = RcfConfig::from_toml("[forecast\nannual_rate = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("[forecast]\nannual_rate = -1.5", "forecast.annual_rate"),
        ("[forecast]\nmin_sample_size = 0", "forecast.min_sample_size"),
        ("[forecast]\nconfidence_level = 1.0", "forecast.confidence_level"),
        ("[forecast]\nnormality_alpha = 0.0", "forecast.normality_alpha"),
        ("[schema]\nattributes = [\"a\", \"a\"]", "schema.attributes"),
        ("[schema]\nattributes = [\" \"]", "schema.attributes"),
    ];
    for (toml_str, expected_field) in cases {
        match RcfConfig::from_toml(toml_str) {
            Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation failure for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let config = RcfConfig::from_toml("[forecast]\nannual_rate = 0.027").unwrap();
    let text = config.to_toml().unwrap();
    let back = RcfConfig::from_toml(&text).unwrap();
    assert_eq!(back.forecast.annual_rate, Some(0.027));
}

#[test]
fn test_load_project_file_env_and_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("rcf.toml"),
        "[forecast]\nannual_rate = 0.027\nmin_sample_size = 3\nconfidence_level = 0.9\n",
    )
    .unwrap();

    // Project file alone.
    let config = RcfConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.forecast.effective_annual_rate(), 0.027);
    assert_eq!(config.forecast.effective_min_sample_size(), 3);

    // Env beats project file.
    std::env::set_var("RCF_MIN_SAMPLE_SIZE", "5");
    let config = RcfConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.forecast.effective_min_sample_size(), 5);
    assert_eq!(config.forecast.effective_confidence_level(), 0.9);

    // Overrides beat env.
    let overrides = ConfigOverrides {
        min_sample_size: Some(6),
        ..Default::default()
    };
    let config = RcfConfig::load(dir.path(), Some(&overrides)).unwrap();
    std::env::remove_var("RCF_MIN_SAMPLE_SIZE");
    assert_eq!(config.forecast.effective_min_sample_size(), 6);
    assert_eq!(config.forecast.effective_annual_rate(), 0.027);
}

#[test]
fn test_load_env_schema_attributes() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("RCF_SCHEMA_ATTRIBUTES", "has_hvac, has_solar");
    let config = RcfConfig::load(dir.path(), None);
    std::env::remove_var("RCF_SCHEMA_ATTRIBUTES");
    let config = config.unwrap();
    assert_eq!(
        config.schema.effective_attributes(),
        vec!["has_hvac".to_string(), "has_solar".to_string()]
    );
}

#[test]
fn test_load_rejects_invalid_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let overrides = ConfigOverrides {
        confidence_level: Some(1.5),
        ..Default::default()
    };
    let err = RcfConfig::load(dir.path(), Some(&overrides)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}
