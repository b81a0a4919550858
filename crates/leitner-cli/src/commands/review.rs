// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn review` command.
//!
//! Applies a practice outcome to a card, records it in the history and
//! saves the deck.

use crate::Context;
use anyhow::Result;
use leitner_app::AppError;
use leitner_core::Difficulty;

/// Records a review of one card.
///
/// # Arguments
///
/// * `ctx` - The command context
/// * `front` - Front of the reviewed card
/// * `back` - Back of the reviewed card
/// * `difficulty` - Outcome name (`wrong`, `hard`, `easy` or a shorthand)
///
/// # Errors
///
/// Returns an error if:
/// - The difficulty is not recognized
/// - The card does not exist
/// - The state cannot be saved
pub fn execute(ctx: &Context, front: String, back: String, difficulty: String) -> Result<()> {
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|err: leitner_core::Error| AppError::InvalidInput(err.to_string()))?;

    let mut session = ctx.open_session()?;
    let record = session.review(&front, &back, difficulty)?;
    session.save()?;

    println!("{}", ctx.formatter().format_record(&record));
    Ok(())
}
