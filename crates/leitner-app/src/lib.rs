// Rust guideline compliant 2026-10-19

//! Shared application services for Leitner.
//!
//! This crate provides reusable, non-CLI-specific helpers for deck
//! discovery, the session lifecycle (startup load-or-seed, saving and
//! one-shot shutdown), stable error codes, response envelopes and logging.

pub mod context;
pub mod error;
pub mod logging;
pub mod response;
pub mod seed;
pub mod session;
pub mod time;

pub use context::DeckContext;
pub use error::{AppError, ErrorCode, Result};
pub use logging::init_tracing;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use seed::default_deck;
pub use session::{DueCards, Session, StartupSource};
pub use time::unix_millis;
