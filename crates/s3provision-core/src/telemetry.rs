//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Build the filter used by [`init_tracing`].
///
/// `RUST_LOG` wins when set; otherwise `log_level` is parsed as a filter.
pub fn env_filter(log_level: &str) -> Result<EnvFilter, ConfigError> {
    if std::env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::from_default_env());
    }
    EnvFilter::try_new(log_level).map_err(|e| ConfigError::InvalidLogLevel(format!("{log_level}: {e}")))
}

/// Install a global fmt subscriber.
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_tracing(log_level: &str) -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::Tracing(e.to_string()))
}

/// Install a global fmt subscriber that writes through the test harness,
/// so output is captured per test instead of going straight to stdout.
pub fn init_test_tracing(log_level: &str) -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_test_writer()
        .try_init()
        .map_err(|e| ConfigError::Tracing(e.to_string()))
}
