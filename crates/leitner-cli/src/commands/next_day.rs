// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn next-day` command.

use crate::Context;
use anyhow::Result;

/// Advances the deck to the next day and saves it.
///
/// # Errors
///
/// Returns an error if the state cannot be loaded or saved.
pub fn execute(ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session()?;
    let day = session.advance_day();
    session.save()?;

    println!(
        "{}",
        ctx.formatter().format_message(&format!("Advanced to day {}", day))
    );
    Ok(())
}
