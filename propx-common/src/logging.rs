//! Tracing subscriber initialisation
//!
//! The engine crates only emit `tracing` events; the host process decides
//! whether and how they are collected by calling [`init_tracing`] once.

use crate::config::LoggingConfig;
use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter for a logging configuration
///
/// `RUST_LOG` is deliberately not consulted: the configured level is the
/// only source.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(config.level.trim())
        .map_err(|e| Error::Config(format!("invalid logging.level '{}': {}", config.level, e)))
}

/// Install a global fmt subscriber
///
/// Returns an error if the filter is invalid or a global subscriber has
/// already been installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Config(format!("failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let config = LoggingConfig {
                level: level.to_string(),
            };
            assert!(build_filter(&config).is_ok(), "level {level} should parse");
        }
    }

    #[test]
    fn test_build_filter_accepts_directives() {
        let config = LoggingConfig {
            level: "propx_recon=debug,info".to_string(),
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        let config = LoggingConfig {
            level: "propx_recon=notalevel".to_string(),
        };
        assert!(matches!(build_filter(&config), Err(Error::Config(_))));
    }
}
