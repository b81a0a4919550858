// Rust guideline compliant 2026-10-19

//! Error handling for Leitner application services.

use leitner_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested card was not found.
    NotFound,
    /// A card with the same front and back already exists.
    Duplicate,
    /// Card or state document validation failed.
    ValidationError,
    /// The state file exists but is not valid JSON.
    CorruptState,
    /// IO failure while reading or writing deck data.
    IoError,
    /// JSON serialization failed.
    JsonError,
    /// Configuration is invalid.
    ConfigError,
    /// The deck directory has not been initialized.
    DeckNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Deck directory is missing.
    #[error("Leitner deck not initialized at {path}. Run 'ltn init' first.")]
    DeckNotInitialized {
        /// Path where the deck directory was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The final save during shutdown failed.
    #[error("Failed to save state during shutdown: {0}")]
    ShutdownFailed(#[source] CoreError),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn core_code(core: &CoreError) -> ErrorCode {
    match core {
        CoreError::CardNotFound { .. } => ErrorCode::NotFound,
        CoreError::DuplicateCard { .. } => ErrorCode::Duplicate,
        CoreError::InvalidCard(_) => ErrorCode::ValidationError,
        CoreError::Validation(_) => ErrorCode::ValidationError,
        CoreError::Corruption { .. } => ErrorCode::CorruptState,
        CoreError::Io(_) => ErrorCode::IoError,
        CoreError::Json(_) => ErrorCode::JsonError,
        CoreError::Config(_) => ErrorCode::ConfigError,
    }
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DeckNotInitialized { .. } => ErrorCode::DeckNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::ShutdownFailed(core) | AppError::Core(core) => core_code(core),
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::DeckNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(core) | AppError::ShutdownFailed(core) => match core {
                CoreError::CardNotFound { front, back }
                | CoreError::DuplicateCard { front, back } => Some(serde_json::json!({
                    "front": front,
                    "back": back,
                })),
                CoreError::Corruption { path, .. } => Some(serde_json::json!({
                    "path": path,
                })),
                _ => None,
            },
            AppError::InvalidInput(_) | AppError::Io(_) => None,
        }
    }
}
