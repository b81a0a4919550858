// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn init` command.
//!
//! Creates the deck directory with a default `config.toml` and the initial
//! state file.

use crate::Context;
use anyhow::Result;
use leitner_app::{init_tracing, DeckContext, Session, StartupSource};

/// Initializes a deck directory.
///
/// Existing configuration and state are left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The deck directory or config file cannot be created
/// - An existing state file is corrupted
/// - The initial state cannot be saved
pub fn execute(ctx: &Context) -> Result<()> {
    let (deck, created) = DeckContext::init(ctx.deck_dir.as_deref())?;
    let config = deck.load_config()?;
    init_tracing(ctx.log_level.as_deref().unwrap_or(&config.log_level))?;
    let session = Session::open(deck.open_state_file(&config)?, &config)?;

    let state = match session.source() {
        StartupSource::Loaded => "kept existing state",
        StartupSource::Seeded => "seeded sample deck",
        StartupSource::Empty => "created empty deck",
    };
    let config_note = if created {
        "created config.toml"
    } else {
        "kept config.toml"
    };

    println!(
        "{}",
        ctx.formatter().format_message(&format!(
            "Leitner deck initialized at {} ({}, {})",
            deck.deck_dir().display(),
            config_note,
            state
        ))
    );
    Ok(())
}
