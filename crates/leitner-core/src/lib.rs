// Rust guideline compliant 2026-10-19

//! Leitner Core Library
//!
//! This crate provides the foundational components for the Leitner scheduler:
//! - Data models (Flashcard, Difficulty, PracticeRecord)
//! - Bucket map with a value-keyed card index
//! - Bucket store owning buckets, history and the day counter
//! - Scheduling algorithm (due set, review transitions, hints, progress)
//! - State document serialization with strict validation
//! - Durable state file (atomic write, absent/corrupt/IO classification)
//! - Configuration and error types

pub mod buckets;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod serialize;
pub mod storage;
pub mod store;

pub use buckets::BucketMap;
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{is_retired, Difficulty, Flashcard, PracticeRecord, NO_BUCKET, RETIRED_BUCKET};
pub use scheduler::{due, hint, next_bucket, progress, update, ProgressStats};
pub use serialize::{deserialize, serialize, Document};
pub use storage::StateFile;
pub use store::BucketStore;
