//! Configuration schema for the shred binary

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::error::ConfigError;
use crate::security::{DEFAULT_PASSES, Shredder};

/// Level names accepted in `log_level`
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off", "none"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Number of random overwrite passes before unlinking
    #[serde(default = "default_passes")]
    pub passes: u32,

    /// Log level: "trace", "debug", "info", "warn", "error", "off"/"none"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

fn default_passes() -> u32 {
    DEFAULT_PASSES.get()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            passes: default_passes(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pass_count()?;

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log_level {:?}, expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Build the shredder described by this configuration
    pub fn shredder(&self) -> Result<Shredder, ConfigError> {
        self.pass_count().map(Shredder::with_passes)
    }

    fn pass_count(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.passes)
            .ok_or_else(|| ConfigError::Invalid("passes must be at least 1".to_string()))
    }
}
