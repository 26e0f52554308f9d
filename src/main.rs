//! Pagesmith - landing-page theme editor with bounded undo/redo
//!
//! Creates, edits and validates page projects from the command line.

use clap::{Parser, Subcommand};
use pagesmith::cli::{
    ConfigArgs, EditArgs, ExitCode, ListArgs, NewArgs, ShowArgs, SuggestArgs, ValidateArgs,
};
use pagesmith::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pagesmith - landing-page theme editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new project with the starter layout
    New(NewArgs),
    /// List projects in the projects directory
    List(ListArgs),
    /// Show a project's theme and sections
    Show(ShowArgs),
    /// Apply an edit script to a project
    Edit(EditArgs),
    /// Validate a project file
    Validate(ValidateArgs),
    /// Suggest a theme from a description or pasted CSS
    Suggest(SuggestArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::New(args) => args.execute(),
        Command::List(args) => args.execute(),
        Command::Show(args) => args.execute(),
        Command::Edit(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Suggest(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("{APP_BINARY_NAME}: {err}");
        std::process::exit(err.exit_code().into());
    }

    std::process::exit(ExitCode::Success.into());
}
