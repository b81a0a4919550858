// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn add` command.

use crate::Context;
use anyhow::Result;
use leitner_app::AppError;
use leitner_core::Flashcard;

/// Adds a new card to bucket 0 and saves the deck.
///
/// # Arguments
///
/// * `ctx` - The command context
/// * `front` - Prompt text
/// * `back` - Answer text
/// * `hint` - Optional author-supplied hint
/// * `tags` - Tags to attach
///
/// # Errors
///
/// Returns an error if:
/// - Either side of the card is blank
/// - A card with the same front and back already exists
/// - The state cannot be saved
pub fn execute(
    ctx: &Context,
    front: String,
    back: String,
    hint: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let mut session = ctx.open_session()?;

    let mut card = Flashcard::new(front, back)
        .map_err(AppError::from)?
        .with_tags(tags);
    if let Some(hint) = hint {
        card = card.with_hint(hint);
    }
    let front = card.front.clone();

    session.add_card(card)?;
    session.save()?;

    println!(
        "{}",
        ctx.formatter()
            .format_message(&format!("Added \"{}\" to bucket 0", front))
    );
    Ok(())
}
