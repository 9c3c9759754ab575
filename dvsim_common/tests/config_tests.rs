//! Integration tests for `SimConfig` loading against the public API only.

use dvsim_common::config::{ConfigError, ConfigLoader, LogFormat, LogLevel, SimConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_full_config_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dvsim.toml");
    fs::write(
        &path,
        r#"
        log_level = "warn"
        log_format = "json"
        max_time_fs = 20_000_000
        max_iterations = 500
        "#,
    )
    .unwrap();

    let config = SimConfig::load(&path).unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.max_time_fs, Some(20_000_000));
    assert_eq!(config.max_iterations, Some(500));
    assert!(config.validate().is_ok());
}

#[test]
fn empty_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dvsim.toml");
    fs::write(&path, "").unwrap();

    let config = SimConfig::load(&path).unwrap();
    assert_eq!(config, SimConfig::default());
}

#[test]
fn missing_file_is_reported_distinctly_from_bad_toml() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        SimConfig::load(&dir.path().join("missing.toml")),
        Err(ConfigError::FileNotFound)
    ));

    let bad_path = dir.path().join("bad.toml");
    fs::write(&bad_path, "not valid toml = [").unwrap();
    assert!(matches!(SimConfig::load(&bad_path), Err(ConfigError::ParseError(_))));
}
