// src/config.rs

//! Manages engine configuration: loading from TOML, defaults, and validation.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Settings for the slow log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SlowLogConfig {
    /// Commands taking at least this long are recorded, e.g. `"10ms"`.
    #[serde(with = "humantime_serde", default = "default_log_slower_than")]
    pub log_slower_than: Duration,
    /// Maximum number of retained entries.
    #[serde(default = "default_slowlog_max_len")]
    pub max_len: usize,
}

impl Default for SlowLogConfig {
    fn default() -> Self {
        Self {
            log_slower_than: default_log_slower_than(),
            max_len: default_slowlog_max_len(),
        }
    }
}

/// Holds safety-related limits applied while executing commands.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SafetyConfig {
    /// Rejects `LRANGE` replies longer than this many elements. `0` disables the check.
    #[serde(default)]
    pub max_list_range_len: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_slower_than() -> Duration {
    Duration::from_millis(10)
}
fn default_slowlog_max_len() -> usize {
    128
}

/// Represents the final, validated engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub slowlog: SlowLogConfig,
    #[serde(default)]
    pub safety: SafetyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            slowlog: SlowLogConfig::default(),
            safety: SafetyConfig::default(),
        }
    }
}

impl Config {
    /// Reads, parses and validates a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::from_file`], but falls back to defaults when the file does not exist.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(
                "Config file '{}' not found. Using default configuration.",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }
        if self.slowlog.max_len == 0 {
            return Err(anyhow!("slowlog.max_len cannot be 0"));
        }
        if self.slowlog.log_slower_than.is_zero() {
            warn!("slowlog.log_slower_than is 0: every command will be recorded in the slow log.");
        }
        Ok(())
    }
}
