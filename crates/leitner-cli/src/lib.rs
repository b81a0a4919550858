// Rust guideline compliant 2026-10-19

//! Leitner CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;
pub mod signals;
pub mod terminal;

pub use commands::Context;
pub use output::{create_formatter, OutputFormatter};
pub use signals::{ShutdownSignal, ShutdownSignals};
pub use terminal::should_use_color;
