#![forbid(unsafe_code)]

//! Global `tracing` subscriber setup.
//!
//! Log lines go to stderr, compact by default or one JSON object per line
//! when [`DashboardConfig::log_json`] is set. The filter directive comes from
//! [`DashboardConfig::log_filter`] (`GRIDBOARD_LOG`).

use tracing_subscriber::EnvFilter;

use crate::{DashboardConfig, Error, Result};

/// Parse the configured filter directive.
pub fn filter(config: &DashboardConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.log_filter)
        .map_err(|e| Error::Logging(format!("invalid log filter {:?}: {e}", config.log_filter)))
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when another subscriber is already installed; that
/// one is kept.
pub fn install(config: &DashboardConfig) -> Result<bool> {
    let filter = filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    let installed = if config.log_json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    };
    if installed {
        tracing::debug!(filter = %config.log_filter, json = config.log_json, "logging installed");
    }
    Ok(installed)
}
