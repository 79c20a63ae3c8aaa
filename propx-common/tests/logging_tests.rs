//! Global subscriber installation
//!
//! Kept in its own test binary: a process can install only one global
//! subscriber.

use propx_common::logging::init_tracing;
use propx_common::{Error, LoggingConfig};

#[test]
fn test_init_tracing_installs_once() {
    let config = LoggingConfig {
        level: "propx_recon=debug,warn".to_string(),
    };
    assert!(init_tracing(&config).is_ok());
    tracing::info!("subscriber installed");

    let second = init_tracing(&config);
    assert!(matches!(second, Err(Error::Config(_))));
}
