//! Tracing setup.
//!
//! The terminal is owned by the UI while a session runs, so the subscriber
//! writes to a file. `RUST_LOG` takes precedence over the configured filter.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::error::{Error, Result};

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` without touching anything when logging is disabled.
/// Fails with `Error::Config` on a bad filter or when a global subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let filter = build_filter(&config.filter)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("logging: {e}")))?;

    tracing::debug!(file = %config.file.display(), "logging initialized");
    Ok(true)
}

fn build_filter(directive: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(directive)
            .map_err(|e| Error::Config(format!("log filter {directive:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_noop() {
        let config = LogConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_filter_directive_parses() {
        assert!(EnvFilter::try_new("trellis_tui=debug,info").is_ok());
    }
}
