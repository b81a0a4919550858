// Rust guideline compliant 2026-10-19

//! Command implementations for the Leitner CLI.

pub mod add;
pub mod hint;
pub mod history;
pub mod init;
pub mod next_day;
pub mod practice;
pub mod progress;
pub mod review;
pub mod show;
pub mod study;

use crate::OutputFormatter;
use leitner_app::{init_tracing, DeckContext, Result, Session};
use std::path::PathBuf;

/// Shared state for a single CLI invocation.
pub struct Context {
    /// Deck directory override from `--dir`.
    pub deck_dir: Option<PathBuf>,
    /// Log level override from `--log-level`.
    pub log_level: Option<String>,
    /// Formatter selected by the global output flags.
    pub formatter: Box<dyn OutputFormatter>,
}

impl Context {
    /// Creates a new command context.
    pub fn new(
        deck_dir: Option<PathBuf>,
        log_level: Option<String>,
        formatter: Box<dyn OutputFormatter>,
    ) -> Self {
        Self {
            deck_dir,
            log_level,
            formatter,
        }
    }

    /// Returns the active output formatter.
    pub fn formatter(&self) -> &dyn OutputFormatter {
        self.formatter.as_ref()
    }

    /// Discovers the deck, installs logging and opens a session.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The deck directory has not been initialized
    /// - The configuration is invalid
    /// - The state file is corrupted or cannot be read
    pub fn open_session(&self) -> Result<Session> {
        let deck = DeckContext::discover(self.deck_dir.as_deref())?;
        let config = deck.load_config()?;
        init_tracing(self.log_level.as_deref().unwrap_or(&config.log_level))?;
        let state = deck.open_state_file(&config)?;
        Session::open(state, &config)
    }
}
