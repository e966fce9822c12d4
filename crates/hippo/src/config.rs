//! Environment configuration
//!
//! | Variable    | Meaning                               | Default |
//! |-------------|---------------------------------------|---------|
//! | `TIMEZONE`  | IANA zone for offset-less temporals   | UTC     |
//! | `LOG_LEVEL` | `trace`, `debug`, `info`, `warn`, `error` | `info` |
//!
//! A `.env` file in the working directory is loaded first when present.

use hippo_diagnostics::{HippoError, Result};
use hippo_types::{Tz, parse_timezone, set_timezone};
use std::env;
use tracing::Level;

/// Timezone variable name
pub const TIMEZONE_VAR: &str = "TIMEZONE";
/// Log level variable name
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Process configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Zone used to read and render temporal values
    pub timezone: Tz,
    /// Default log level when `RUST_LOG` is not set
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Load configuration from the process environment, after `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|_| None)
    }

    /// Like [`Config::from_env`], but `overrides` is consulted first, so an
    /// overridden variable is never read from the environment.
    pub fn from_env_with(overrides: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| overrides(key).or_else(|| env::var(key).ok()))
    }

    /// Load configuration through `lookup`, which returns `None` for unset
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup(TIMEZONE_VAR) {
            config.timezone = parse_timezone(&name)?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            let level = level.trim();
            if !level.is_empty() {
                config.log_level = parse_level(level)?;
            }
        }

        Ok(config)
    }

    /// Install the configured timezone for the whole process.
    ///
    /// Safe to call again with the same configuration.
    pub fn apply(&self) -> Result<()> {
        set_timezone(self.timezone)?;
        tracing::debug!(
            timezone = %self.timezone.name(),
            log_level = %self.log_level,
            "configuration applied"
        );
        Ok(())
    }

    /// Log level as an `EnvFilter` directive
    pub fn log_directive(&self) -> String {
        self.log_level.as_str().to_ascii_lowercase()
    }
}

fn parse_level(value: &str) -> Result<Level> {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(HippoError::invalid_config(LOG_LEVEL_VAR, value)),
    }
}
