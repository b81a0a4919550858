// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn practice` command.

use crate::Context;
use anyhow::Result;

/// Lists the cards due on the current day.
///
/// # Errors
///
/// Returns an error if the deck cannot be opened.
pub fn execute(ctx: &Context) -> Result<()> {
    let session = ctx.open_session()?;
    println!("{}", ctx.formatter().format_due(&session.due()));
    Ok(())
}
