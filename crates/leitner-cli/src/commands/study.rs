// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn study` command.
//!
//! Runs an interactive practice loop over the cards due each day. Stdin and
//! the interrupt and terminate signals are multiplexed on a current-thread
//! runtime; quitting, end of input and either signal all end in a single
//! shutdown save.

use crate::signals::ShutdownSignals;
use crate::terminal::is_interactive;
use crate::Context;
use anyhow::Result;
use leitner_app::Session;
use leitner_core::{Difficulty, Flashcard};
use std::collections::HashSet;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands: w/h/e (wrong, hard, easy), hint, show, n (next day), save, q (quit)";

/// A parsed line of study input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyInput {
    /// Record an outcome for the current card.
    Answer(Difficulty),
    /// Print a hint for the current card.
    Hint,
    /// Reveal the back of the current card.
    Show,
    /// Advance to the next day.
    NextDay,
    /// Save without leaving the loop.
    Save,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
    /// Anything else.
    Unknown,
}

/// Parses one line typed during a study session.
pub fn parse_input(line: &str) -> StudyInput {
    match line.trim().to_lowercase().as_str() {
        "hint" | "?" => StudyInput::Hint,
        "show" | "answer" | "a" => StudyInput::Show,
        "n" | "next" => StudyInput::NextDay,
        "s" | "save" => StudyInput::Save,
        "help" => StudyInput::Help,
        "q" | "quit" | "exit" => StudyInput::Quit,
        other => other
            .parse::<Difficulty>()
            .map(StudyInput::Answer)
            .unwrap_or(StudyInput::Unknown),
    }
}

/// Runs the interactive study loop.
///
/// # Errors
///
/// Returns an error if:
/// - The deck cannot be opened
/// - Reading stdin fails
/// - The state cannot be saved, including the final shutdown save
pub fn execute(ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(run(ctx, &mut session));
    if let Err(err) = &outcome {
        tracing::warn!(error = %err, "study loop ended with an error");
    }

    if let Err(err) = session.shutdown() {
        tracing::error!(error = %err, "failed to save state on shutdown");
        return Err(err.into());
    }
    outcome
}

fn next_card(session: &Session, reviewed: &HashSet<(String, String)>) -> Option<Flashcard> {
    session.due().cards.into_iter().find(|card| {
        let (front, back) = card.key();
        !reviewed.contains(&(front.to_string(), back.to_string()))
    })
}

fn prompt(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

async fn run(ctx: &Context, session: &mut Session) -> Result<()> {
    let formatter = ctx.formatter();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut reviewed: HashSet<(String, String)> = HashSet::new();
    let mut signals = ShutdownSignals::install()?;

    println!("{}", HELP);
    loop {
        if session.store().buckets().is_empty() {
            println!(
                "{}",
                formatter.format_message("The deck is empty. Add cards with 'ltn add'.")
            );
            return Ok(());
        }
        if session.store().is_exhausted() {
            println!(
                "{}",
                formatter.format_message("All cards are retired. Nothing left to practice.")
            );
            return Ok(());
        }

        let current = next_card(session, &reviewed);
        match &current {
            Some(card) => println!("\n[day {}] {}", session.store().day(), card.front),
            None => println!(
                "\n[day {}] No more cards due today. Enter 'n' for the next day or 'q' to quit.",
                session.store().day()
            ),
        }
        if is_interactive() {
            prompt("> ")?;
        }

        let line = tokio::select! {
            received = signals.recv() => {
                println!();
                tracing::info!(signal = received.as_str(), "signal received, shutting down");
                return Ok(());
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            tracing::info!("end of input, shutting down");
            return Ok(());
        };

        match (parse_input(&line), current) {
            (StudyInput::Quit, _) => return Ok(()),
            (StudyInput::Help, _) => println!("{}", HELP),
            (StudyInput::NextDay, _) => {
                let day = session.advance_day();
                reviewed.clear();
                println!(
                    "{}",
                    formatter.format_message(&format!("Advanced to day {}", day))
                );
            }
            (StudyInput::Save, _) => {
                session.save()?;
                println!("{}", formatter.format_message("State saved"));
            }
            (StudyInput::Hint, Some(card)) => {
                let hint = session.hint(&card.front, &card.back)?;
                println!("{}", formatter.format_hint(&card.front, &hint));
            }
            (StudyInput::Show, Some(card)) => println!("{}", card.back),
            (StudyInput::Answer(difficulty), Some(card)) => {
                let record = session.review(&card.front, &card.back, difficulty)?;
                reviewed.insert((card.front, card.back));
                println!("{}", formatter.format_record(&record));
            }
            (StudyInput::Hint | StudyInput::Show | StudyInput::Answer(_), None) => {
                println!("No card is waiting for an answer.");
            }
            (StudyInput::Unknown, _) => println!("Unrecognized input. {}", HELP),
        }
    }
}
