// Rust guideline compliant 2026-10-19

//! Configuration management for Leitner.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Returns the lowercase name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const MAX_SHUTDOWN_GRACE_MS: u64 = 10_000;

/// Configuration for Leitner behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// State file name, relative to the deck directory.
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pause after the shutdown save before exiting, in milliseconds.
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,

    /// Whether a missing state file is replaced by the sample deck.
    #[serde(default = "default_seed_default_deck")]
    pub seed_default_deck: bool,
}

fn default_state_file() -> String {
    "state.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_shutdown_grace_ms() -> u64 {
    200
}

fn default_seed_default_deck() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
            seed_default_deck: default_seed_default_deck(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<deck_dir>/config.toml`
    /// 3. Environment variables with `LEITNER_` prefix
    ///
    /// # Arguments
    ///
    /// * `deck_dir` - Path to the deck directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(deck_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = deck_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LEITNER_STATE_FILE` - State file name
    /// - `LEITNER_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `LEITNER_LOG_LEVEL` - Log level
    /// - `LEITNER_SHUTDOWN_GRACE_MS` - Shutdown grace period in milliseconds
    /// - `LEITNER_SEED_DEFAULT_DECK` - Seed the sample deck (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("LEITNER_STATE_FILE") {
            self.state_file = val;
        }

        if let Ok(val) = std::env::var("LEITNER_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "LEITNER_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("LEITNER_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("LEITNER_SHUTDOWN_GRACE_MS") {
            self.shutdown_grace_ms = val.parse().map_err(|_| {
                Error::Config("LEITNER_SHUTDOWN_GRACE_MS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("LEITNER_SEED_DEFAULT_DECK") {
            self.seed_default_deck = val.parse().map_err(|_| {
                Error::Config("LEITNER_SEED_DEFAULT_DECK must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - state_file is empty
    /// - log_level is not a known level
    /// - shutdown_grace_ms exceeds 10 seconds
    fn validate(&self) -> Result<()> {
        if self.state_file.trim().is_empty() {
            return Err(Error::Config("state_file cannot be empty".to_string()));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if self.shutdown_grace_ms > MAX_SHUTDOWN_GRACE_MS {
            return Err(Error::Config(format!(
                "shutdown_grace_ms must be at most {}, got {}",
                MAX_SHUTDOWN_GRACE_MS, self.shutdown_grace_ms
            )));
        }

        Ok(())
    }

    /// Returns the state file path inside the deck directory.
    pub fn state_path(&self, deck_dir: &Path) -> PathBuf {
        deck_dir.join(&self.state_file)
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `deck_dir` - Path to the deck directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, deck_dir: &Path) -> Result<()> {
        let config_path = deck_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
