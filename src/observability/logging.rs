//! Tracing subscriber setup.

use crate::config::Config;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the configured
/// log level.
///
/// # Errors
///
/// Fails if the log level is not a valid filter directive or a global
/// subscriber has already been installed.
pub fn init_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| anyhow!("Invalid log level '{}': {}", config.log_level, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(log_level = %config.log_level, "Logging initialized");
    Ok(())
}
