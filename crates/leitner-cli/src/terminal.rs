// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the Leitner CLI.

use std::env;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Returns true if stdin is an interactive terminal.
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}
