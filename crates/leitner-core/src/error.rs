// Rust guideline compliant 2026-10-19

//! Error types for the Leitner core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Leitner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Leitner operations.
///
/// A missing state file is not represented here: [`crate::StateFile::load`]
/// reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted state document failed validation.
    #[error("Invalid state document: {0}")]
    Validation(String),

    /// The card is not present in any bucket.
    #[error("Card not found: {front} / {back}")]
    CardNotFound {
        /// Front text of the requested card.
        front: String,
        /// Back text of the requested card.
        back: String,
    },

    /// A card with the same front and back already exists.
    #[error("Card already exists: {front} / {back}")]
    DuplicateCard {
        /// Front text of the duplicate card.
        front: String,
        /// Back text of the duplicate card.
        back: String,
    },

    /// Invalid card data.
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    /// State file exists but does not contain parseable JSON.
    #[error("Corrupted state file {}: {source}", path.display())]
    Corruption {
        /// Path of the corrupted file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Builds a `CardNotFound` error from a card identity.
    pub fn card_not_found(front: &str, back: &str) -> Self {
        Error::CardNotFound {
            front: front.to_string(),
            back: back.to_string(),
        }
    }

    /// Builds a `DuplicateCard` error from a card identity.
    pub fn duplicate_card(front: &str, back: &str) -> Self {
        Error::DuplicateCard {
            front: front.to_string(),
            back: back.to_string(),
        }
    }
}
