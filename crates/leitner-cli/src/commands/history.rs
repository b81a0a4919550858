// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn history` command.

use crate::Context;
use anyhow::Result;

/// Prints practice records, oldest first.
///
/// # Arguments
///
/// * `ctx` - The command context
/// * `limit` - Show only the most recent `limit` records
///
/// # Errors
///
/// Returns an error if the deck cannot be opened.
pub fn execute(ctx: &Context, limit: Option<usize>) -> Result<()> {
    let session = ctx.open_session()?;
    let history = session.store().history();
    let start = limit.map_or(0, |limit| history.len().saturating_sub(limit));
    println!("{}", ctx.formatter().format_history(&history[start..]));
    Ok(())
}
