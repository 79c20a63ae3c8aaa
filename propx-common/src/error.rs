//! Common error types for propx

use thiserror::Error;

/// Common result type for propx support operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the propx crates
///
/// The reconciliation engine itself is total and never returns these; they
/// surface only while loading settings or installing the log subscriber.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse / deserialization error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
