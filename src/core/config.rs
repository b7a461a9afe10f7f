//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Initial configuration with command prefix, speaker label and world path

use anyhow::Result;
use std::env;

/// Default command name (typed in chat as `!acg`)
pub const DEFAULT_COMMAND: &str = "acg";
/// Default speaker label for every message this script sends
pub const DEFAULT_FEEDBACK_NAME: &str = "Ability Check Group";
/// Default world snapshot consumed by the stdin host adapter
pub const DEFAULT_WORLD_PATH: &str = "world.yaml";
/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Command name without the leading `!`
    pub command: String,
    /// Label shown as the speaker of feedback messages
    pub feedback_name: String,
    pub world_path: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            feedback_name: DEFAULT_FEEDBACK_NAME.to_string(),
            world_path: DEFAULT_WORLD_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unset keys fall back to their defaults. The result is validated before
    /// being returned.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            command: lookup("ACG_COMMAND").unwrap_or(defaults.command),
            feedback_name: lookup("ACG_FEEDBACK_NAME").unwrap_or(defaults.feedback_name),
            world_path: lookup("ACG_WORLD_PATH").unwrap_or(defaults.world_path),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.command.is_empty() {
            return Err(anyhow::anyhow!("ACG_COMMAND must not be empty"));
        }
        if self.command.starts_with('!') {
            return Err(anyhow::anyhow!(
                "ACG_COMMAND must not include the leading '!': {}",
                self.command
            ));
        }
        if self.command.chars().any(char::is_whitespace) {
            return Err(anyhow::anyhow!(
                "ACG_COMMAND must not contain whitespace: {:?}",
                self.command
            ));
        }
        if self.feedback_name.trim().is_empty() {
            return Err(anyhow::anyhow!("ACG_FEEDBACK_NAME must not be empty"));
        }
        Ok(())
    }
}
