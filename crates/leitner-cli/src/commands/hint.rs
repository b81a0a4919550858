// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn hint` command.

use crate::Context;
use anyhow::Result;

/// Prints a hint for a card without revealing the answer.
///
/// # Errors
///
/// Returns an error if the card does not exist.
pub fn execute(ctx: &Context, front: String, back: String) -> Result<()> {
    let session = ctx.open_session()?;
    let hint = session.hint(&front, &back)?;
    println!("{}", ctx.formatter().format_hint(&front, &hint));
    Ok(())
}
