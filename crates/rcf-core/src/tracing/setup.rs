//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants;

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `RCF_LOG` for per-module log levels.
/// Format: `RCF_LOG=rcf_engine=debug,rcf_core=warn`
///
/// Falls back to `rcf=info` if `RCF_LOG` is not set or is invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

        // Another subscriber may already be installed by the embedding process.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
