//! Settings loading for the reconciliation engine
//!
//! Settings are bootstrap-only: they are read once when the host process
//! starts and handed to the engine explicitly. Source priority:
//! 1. Explicit file path supplied by the caller
//! 2. Per-user config file (`<config_dir>/propx/recon.toml`) if it exists
//! 3. Built-in defaults (code constants)
//!
//! A missing per-user file is not an error; a missing explicit file is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default agreement window for cross-validated rates (rate units, i.e. percent points)
pub const DEFAULT_TOLERANCE: f64 = 0.2;

/// Default multiplier applied to numerator / denominator ratios
pub const DEFAULT_RATIO_SCALE: f64 = 100.0;

/// Default upper bound below which an ambiguous "HOA Fee" is read as monthly
pub const DEFAULT_AMBIGUOUS_MONTHLY_CEILING: f64 = 3000.0;

/// Top-level engine settings
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ReconSettings {
    /// Confidence-tiered resolver settings
    pub resolver: ResolverSettings,

    /// Canonical field mapper settings
    pub mapper: MapperSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Resolver tuning
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverSettings {
    /// Maximum absolute difference for two values to count as agreeing (inclusive)
    pub tolerance: f64,

    /// Multiplier applied to computed ratios (100 turns a fraction into a percent)
    pub ratio_scale: f64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            ratio_scale: DEFAULT_RATIO_SCALE,
        }
    }
}

/// Mapper tuning
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapperSettings {
    /// Values of an ambiguous "HOA Fee" strictly below this are treated as monthly.
    /// `0` disables the heuristic.
    pub ambiguous_monthly_ceiling: f64,
}

impl Default for MapperSettings {
    fn default() -> Self {
        Self {
            ambiguous_monthly_ceiling: DEFAULT_AMBIGUOUS_MONTHLY_CEILING,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter directive (trace, debug, info, warn, error, or an EnvFilter expression)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ReconSettings {
    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: ReconSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings following the bootstrap priority order
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // Priority 1: caller-supplied file must exist
        if let Some(path) = explicit_path {
            info!(path = %path.display(), "Loading reconciliation settings");
            let content = std::fs::read_to_string(path)?;
            return Self::from_toml_str(&content);
        }

        // Priority 2: per-user config file, if present
        if let Some(path) = default_config_path() {
            if path.exists() {
                info!(path = %path.display(), "Loading reconciliation settings");
                let content = std::fs::read_to_string(&path)?;
                return Self::from_toml_str(&content);
            }
            debug!(path = %path.display(), "No settings file found, using built-in defaults");
        }

        // Priority 3: built-in defaults
        Ok(Self::default())
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.resolver.tolerance.is_finite() || self.resolver.tolerance < 0.0 {
            return Err(Error::Config(format!(
                "resolver.tolerance must be a non-negative number, got {}",
                self.resolver.tolerance
            )));
        }
        if !self.resolver.ratio_scale.is_finite() || self.resolver.ratio_scale <= 0.0 {
            return Err(Error::Config(format!(
                "resolver.ratio_scale must be positive, got {}",
                self.resolver.ratio_scale
            )));
        }
        if !self.mapper.ambiguous_monthly_ceiling.is_finite()
            || self.mapper.ambiguous_monthly_ceiling < 0.0
        {
            return Err(Error::Config(format!(
                "mapper.ambiguous_monthly_ceiling must be a non-negative number, got {}",
                self.mapper.ambiguous_monthly_ceiling
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Per-user settings file location for the current platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("propx").join("recon.toml"))
}
