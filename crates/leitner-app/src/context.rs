// Rust guideline compliant 2026-10-19

//! Deck directory discovery and path management utilities.

use crate::error::{AppError, Result};
use leitner_core::{Config, StateFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Default deck directory name, relative to the working directory.
pub const DEFAULT_DECK_DIR: &str = ".leitner";

/// Path metadata for a deck directory.
#[derive(Debug, Clone)]
pub struct DeckContext {
    deck_dir: PathBuf,
    config_path: PathBuf,
}

impl DeckContext {
    fn at(deck_dir: PathBuf) -> Self {
        Self {
            config_path: deck_dir.join("config.toml"),
            deck_dir,
        }
    }

    fn resolve(deck_dir: Option<&Path>) -> Result<PathBuf> {
        match deck_dir {
            Some(dir) => Ok(dir.to_path_buf()),
            None => Ok(std::env::current_dir()?.join(DEFAULT_DECK_DIR)),
        }
    }

    /// Discovers an initialized deck directory.
    ///
    /// # Arguments
    ///
    /// * `deck_dir` - Optional deck directory; defaults to `./.leitner`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The working directory cannot be resolved
    /// - The deck directory is missing
    pub fn discover(deck_dir: Option<&Path>) -> Result<Self> {
        let deck_dir = Self::resolve(deck_dir)?;
        if !deck_dir.is_dir() {
            return Err(AppError::DeckNotInitialized { path: deck_dir });
        }
        Ok(Self::at(deck_dir))
    }

    /// Creates the deck directory and a default `config.toml` if missing.
    ///
    /// # Returns
    ///
    /// The context and whether a new config file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config file cannot be created.
    pub fn init(deck_dir: Option<&Path>) -> Result<(Self, bool)> {
        let deck_dir = Self::resolve(deck_dir)?;
        fs::create_dir_all(&deck_dir)?;

        let context = Self::at(deck_dir);
        let created = !context.config_path.exists();
        if created {
            Config::default().save(&context.deck_dir)?;
        }
        Ok((context, created))
    }

    /// Returns the deck directory path.
    #[must_use]
    pub fn deck_dir(&self) -> &Path {
        self.deck_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Loads deck configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(&self.deck_dir)?)
    }

    /// Opens the state file named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file path is invalid.
    pub fn open_state_file(&self, config: &Config) -> Result<StateFile> {
        Ok(StateFile::new(config.state_path(&self.deck_dir))?)
    }
}
