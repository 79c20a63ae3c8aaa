//! # propx Common Library
//!
//! Shared code for the propx listing reconciliation crates:
//! - Error type used by every fallible support operation
//! - Settings loading (TOML bootstrap, built-in defaults)
//! - Tracing subscriber initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use config::{LoggingConfig, MapperSettings, ReconSettings, ResolverSettings};
pub use error::{Error, Result};
