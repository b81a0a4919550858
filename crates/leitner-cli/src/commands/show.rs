// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn show` command.

use crate::Context;
use anyhow::Result;

/// Prints every card grouped by bucket.
///
/// # Errors
///
/// Returns an error if the deck cannot be opened.
pub fn execute(ctx: &Context) -> Result<()> {
    let session = ctx.open_session()?;
    let store = session.store();
    println!(
        "{}",
        ctx.formatter().format_buckets(store.buckets(), store.day())
    );
    Ok(())
}
