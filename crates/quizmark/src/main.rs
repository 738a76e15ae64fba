//! Quizmark CLI - quiz rendering engine.
//!
//! Provides commands for:
//! - `render`: Render quiz sources to HTML documents
//! - `check`: Validate quiz sources and print a summary

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs};
use output::Output;

/// Quizmark - quiz rendering engine.
#[derive(Parser)]
#[command(name = "quizmark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render quiz sources to HTML documents.
    Render(RenderArgs),
    /// Validate quiz sources and print a summary.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
