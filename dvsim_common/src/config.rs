//! Configuration loading for the dvsim kernel.
//!
//! The kernel's own configuration is deliberately small: logging
//! verbosity/format and the two optional external caps described in
//! §5 "Cancellation & timeouts" of the design. Anything design-specific
//! (signal/process configuration) belongs to the elaborated tree, not
//! here.
//!
//! # Usage
//!
//! ```rust,no_run
//! use dvsim_common::config::{ConfigLoader, SimConfig};
//! use std::path::Path;
//!
//! let config = SimConfig::load(Path::new("dvsim.toml")).unwrap_or_default();
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    #[error("configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, compact single-line output.
    #[default]
    Pretty,
    /// Newline-delimited JSON, for machine consumption.
    Json,
}

/// Log verbosity, mirroring `tracing::Level` but serializable via TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level verbosity.
    Trace,
    /// Debug-level verbosity.
    Debug,
    /// Info-level verbosity (default).
    Info,
    /// Warning-level verbosity.
    Warn,
    /// Error-level verbosity.
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl LogLevel {
    /// The `tracing_subscriber::EnvFilter` directive for this level.
    pub fn as_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// The kernel's ambient configuration.
///
/// `max_time_fs` and `max_iterations` are *not* part of the simulation
/// cycle's contract (§5): they are an optional outer `while` condition
/// the cycle driver applies on top of the spec's "run until the queue
/// drains" semantics, useful for bounding otherwise-unbounded designs
/// (e.g. the delta-oscillator scenario in §8) in CI or interactive use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SimConfig {
    /// Minimum verbosity of emitted log events.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Output format for log events.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Optional wall-clock cap on simulated time, in femtoseconds.
    pub max_time_fs: Option<u64>,

    /// Optional cap on the number of cohorts (distinct `(now,
    /// iteration)` pairs) the cycle driver will dispatch.
    pub max_iterations: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            max_time_fs: None,
            max_iterations: None,
        }
    }
}

impl SimConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if `max_iterations` is
    /// `Some(0)` — a cap of zero cohorts can never make progress past
    /// the initialisation phase, which is almost certainly a typo.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_iterations of 0 would never dispatch a cohort".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// Provides a default implementation for any `DeserializeOwned` type,
/// so `SimConfig::load(path)` works without a manual impl.
///
/// # Contract
/// - Returns `ConfigError::FileNotFound` if the file does not exist.
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid.
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
