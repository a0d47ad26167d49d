//! Configuration system for the forecaster.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod forecast_config;
pub mod rcf_config;
pub mod schema_config;

pub use forecast_config::ForecastConfig;
pub use rcf_config::{ConfigOverrides, RcfConfig};
pub use schema_config::SchemaConfig;
