// Rust guideline compliant 2026-10-19

//! Leitner CLI Application
//!
//! Command-line interface for the Leitner spaced-repetition scheduler.

use clap::Parser;
use leitner_app::{AppError, DeckContext};
use leitner_cli::{commands, create_formatter, should_use_color, Context};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "ltn",
    version,
    about = "Leitner: spaced-repetition flashcards with bucket scheduling",
    long_about = "Leitner keeps flashcards in numbered buckets. A card in bucket b is practiced on days divisible by 2^b; easy answers move it up, wrong answers send it back to bucket 0, and bucket 4 retires it.",
    after_help = "Examples:\n  ltn init\n  ltn add \"capital of France\" Paris --hint \"City of light\" --tag geo\n  ltn practice\n  ltn review \"capital of France\" Paris easy\n  ltn next-day\n  ltn study\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Deck directory (defaults to ./.leitner)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new deck
    Init,

    /// Add a card to bucket 0
    Add {
        /// Prompt side of the card
        front: String,

        /// Answer side of the card
        back: String,

        /// Hint shown instead of the masked answer
        #[arg(long)]
        hint: Option<String>,

        /// Tags to assign
        #[arg(long, value_delimiter = ',')]
        tag: Vec<String>,
    },

    /// List cards due today
    Practice,

    /// Record the outcome of practicing a card
    Review {
        /// Front of the card
        front: String,

        /// Back of the card
        back: String,

        /// Outcome (wrong, hard, easy)
        difficulty: String,
    },

    /// Show a hint for a card
    Hint {
        /// Front of the card
        front: String,

        /// Back of the card
        back: String,
    },

    /// Show bucket counts and review statistics
    Progress,

    /// Advance to the next day
    NextDay,

    /// Show every card by bucket
    Show,

    /// Show practice history
    History {
        /// Maximum number of recent records to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Practice due cards interactively
    Study,
}

/// Reads the default output format from the deck config, if one exists.
fn configured_format(deck_dir: Option<&Path>) -> &'static str {
    DeckContext::discover(deck_dir)
        .and_then(|deck| deck.load_config())
        .map(|config| config.output_format.as_str())
        .unwrap_or("table")
}

fn run(cli: Cli, ctx: &Context) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Init) => commands::init::execute(ctx),
        Some(Commands::Add {
            front,
            back,
            hint,
            tag,
        }) => commands::add::execute(ctx, front, back, hint, tag),
        Some(Commands::Practice) => commands::practice::execute(ctx),
        Some(Commands::Review {
            front,
            back,
            difficulty,
        }) => commands::review::execute(ctx, front, back, difficulty),
        Some(Commands::Hint { front, back }) => commands::hint::execute(ctx, front, back),
        Some(Commands::Progress) => commands::progress::execute(ctx),
        Some(Commands::NextDay) => commands::next_day::execute(ctx),
        Some(Commands::Show) => commands::show::execute(ctx),
        Some(Commands::History { limit }) => commands::history::execute(ctx, limit),
        Some(Commands::Study) => commands::study::execute(ctx),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => configured_format(cli.dir.as_deref()),
    };
    let ctx = Context::new(
        cli.dir.clone(),
        cli.log_level.clone(),
        create_formatter(format, use_color),
    );

    match run(cli, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app) => eprintln!("{}", ctx.formatter().format_error(app)),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
