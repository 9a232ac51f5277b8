//! `lang-merge` command line.
//!
//! `merge` handles a single template, `convert` runs the client/server
//! workflow, `inspect` reports template structure and dictionary coverage,
//! and `languages` prints the configured catalogue.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod convert;
mod guided;
mod inspect;
mod languages;
mod merge;
mod utils;

/// Merge translated key/value dictionaries into .lang templates without losing formatting
#[derive(Parser)]
#[command(name = "lang-merge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge one dictionary into one template
    Merge(merge::MergeArgs),

    /// Convert client/server dictionaries into translated .lang files
    Convert(Box<convert::ConvertArgs>),

    /// Show template structure and dictionary coverage
    Inspect(inspect::InspectArgs),

    /// List the configured target languages
    Languages(languages::LanguagesArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries merged text only; logs go to stderr. RUST_LOG
    // directives apply first, -v lowers the floor to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Merge(args) => merge::run(args),
        Commands::Convert(args) => convert::run(*args),
        Commands::Inspect(args) => inspect::run(args),
        Commands::Languages(args) => languages::run(args),
    }
}
