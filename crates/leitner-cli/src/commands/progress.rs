// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn progress` command.

use crate::Context;
use anyhow::Result;

/// Prints bucket counts and review statistics.
///
/// # Errors
///
/// Returns an error if the deck cannot be opened.
pub fn execute(ctx: &Context) -> Result<()> {
    let session = ctx.open_session()?;
    let stats = session.store().progress();
    println!("{}", ctx.formatter().format_progress(&stats));
    Ok(())
}
