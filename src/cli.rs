//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::flows::generate::{run_generate, GenerateConfig};

/// txt2svg - wrap plain-text scripts and render them into an SVG template.
#[derive(Parser, Debug)]
#[command(name = "txt2svg")]
#[command(
    author,
    version,
    about,
    long_about = r#"txt2svg reads every *.txt file in the scripts directory, wraps its text to a
fixed number of characters per line, and writes <name>.svg into the output
directory with the wrapped text substituted for the (TEXT HERE) marker of
the template.

Wrap modes:
- char (default): break between any two characters; closing Japanese
  punctuation (。、？！) never starts a line and may overflow by one
- word: break between whitespace-separated words; words longer than the
  line are split into hard chunks

Examples:
    txt2svg
    txt2svg --line-width 18 --template templates/card.svg
    txt2svg --mode word --scripts-dir en --output-dir deploy/en
"#
)]
pub struct Cli {
    /// Maximum characters per wrapped line.
    #[arg(
        long,
        env = "TXT2SVG_LINE_WIDTH",
        default_value = "25",
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
        long_help = "Maximum number of characters per wrapped line (at least 1).\n\n\
Every character counts as one, whatever its script or display width."
    )]
    pub line_width: u64,

    /// SVG template containing the (TEXT HERE) marker.
    #[arg(
        long,
        env = "TXT2SVG_TEMPLATE",
        default_value = "templates/text.svg",
        value_name = "PATH",
        long_help = "Path to the SVG template.\n\n\
The template must contain the literal marker (TEXT HERE); the first occurrence\n\
is replaced with the wrapped text. A missing template or marker aborts the run."
    )]
    pub template: PathBuf,

    /// Directory scanned for *.txt scripts.
    #[arg(
        long,
        env = "TXT2SVG_SCRIPTS_DIR",
        default_value = "scripts",
        value_name = "DIR",
        long_help = "Directory scanned for *.txt scripts (top level only, dotfiles skipped).\n\n\
The run aborts when no scripts are found."
    )]
    pub scripts_dir: PathBuf,

    /// Directory for generated SVG files.
    #[arg(
        long,
        env = "TXT2SVG_OUTPUT_DIR",
        default_value = "deploy",
        value_name = "DIR",
        long_help = "Directory for generated SVG files. Created if absent.\n\n\
Each script <name>.txt produces <name>.svg here; existing files are overwritten."
    )]
    pub output_dir: PathBuf,

    /// Wrap mode (char/word).
    #[arg(
        long,
        env = "TXT2SVG_MODE",
        default_value = "char",
        value_parser = ["char", "word"],
        value_name = "MODE",
        long_help = "Select the wrapping policy.\n\n\
Supported values:\n\
- char (default): character-granular, for CJK text\n\
- word: word-granular, for space-delimited text"
    )]
    pub mode: String,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored warning/error prefixes. The NO_COLOR environment\n\
variable is honoured as well."
    )]
    pub no_color: bool,

    /// Quiet mode (no progress lines).
    #[arg(
        short,
        long,
        long_help = "Suppress progress lines. Warnings and errors are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        long_help = "Emit debug diagnostics on stderr. RUST_LOG overrides the filter."
    )]
    pub verbose: bool,
}

impl Cli {
    /// Build the generate configuration from parsed arguments
    pub fn to_config(&self) -> GenerateConfig {
        GenerateConfig {
            line_width: usize::try_from(self.line_width).unwrap_or(usize::MAX),
            mode: self.mode.parse().unwrap_or_default(),
            template: self.template.clone(),
            scripts_dir: self.scripts_dir.clone(),
            output_dir: self.output_dir.clone(),
            quiet: self.quiet,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.to_config();
    tracing::debug!(?config, "Resolved configuration");

    let summary = run_generate(&config)?;
    if summary.skipped + summary.failed > 0 {
        tracing::warn!(
            skipped = summary.skipped,
            failed = summary.failed,
            "Some scripts were not converted"
        );
    }

    Ok(())
}
