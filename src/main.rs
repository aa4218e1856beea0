//! txt2svg - Wrap plain-text scripts and render them into SVG templates
//!
//! txt2svg provides:
//! - Character-count line wrapping (character and word policies)
//! - Japanese closing punctuation kept off line starts
//! - Batch rendering of `*.txt` scripts into an SVG template

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backends;
mod cli;
mod core;
mod flows;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "txt2svg=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    cli::run(cli)
}
