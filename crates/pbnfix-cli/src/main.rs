//! pbnfix CLI
//!
//! Converts PBN hand-record files between line layouts by copying a
//! repeating pattern of line positions out of fixed-size blocks.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;
use pbnfix_blocks::LinePattern;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let pattern = build_pattern(&cli.pattern, cli.block_size)?;
    commands::run_convert(&cli.inputfile, &cli.outputfile, &pattern)
}

/// Parse the --pattern flag, applying the --block-size override if given.
fn build_pattern(pattern: &str, block_size: Option<usize>) -> Result<LinePattern> {
    let parsed: LinePattern = pattern.parse()?;
    match block_size {
        Some(size) => Ok(LinePattern::with_block_size(parsed.into_positions(), size)?),
        None => Ok(parsed),
    }
}
