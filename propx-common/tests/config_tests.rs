//! Settings file loading tests
//!
//! Covers the bootstrap priority order: explicit file first, otherwise
//! built-in defaults, and the validation performed on loaded values.

use propx_common::config::{ReconSettings, DEFAULT_TOLERANCE};
use propx_common::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_explicit_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recon.toml");
    fs::write(
        &path,
        r#"
[resolver]
tolerance = 0.25
ratio_scale = 1000.0

[mapper]
ambiguous_monthly_ceiling = 2500.0

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let settings = ReconSettings::load(Some(&path)).unwrap();
    assert_eq!(settings.resolver.tolerance, 0.25);
    assert_eq!(settings.resolver.ratio_scale, 1000.0);
    assert_eq!(settings.mapper.ambiguous_monthly_ceiling, 2500.0);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_explicit_file_missing_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.toml");

    let err = ReconSettings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_explicit_file_with_invalid_values_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recon.toml");
    fs::write(&path, "[resolver]\nratio_scale = -5.0\n").unwrap();

    let err = ReconSettings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("ratio_scale"));
}

#[test]
fn test_unknown_sections_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recon.toml");
    fs::write(&path, "[server]\nport = 8080\n\n[resolver]\ntolerance = 0.1\n").unwrap();

    let settings = ReconSettings::load(Some(&path)).unwrap();
    assert_eq!(settings.resolver.tolerance, 0.1);
}

#[test]
fn test_implicit_load_never_fails_without_user_file() {
    // Either the per-user file exists on this machine or defaults are used;
    // in the default case the tolerance must be the compiled constant.
    if let Ok(settings) = ReconSettings::load(None) {
        if propx_common::config::default_config_path()
            .map(|p| !p.exists())
            .unwrap_or(true)
        {
            assert_eq!(settings.resolver.tolerance, DEFAULT_TOLERANCE);
        }
    }
}
