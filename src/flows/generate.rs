//! Generate flow - Wrap every script and render it into the SVG template
//!
//! Steps:
//! 1. Validate the width and load the template (fatal on failure)
//! 2. Discover `*.txt` scripts (fatal when there are none)
//! 3. For each script in sorted order: read, trim, wrap, render, write
//!
//! Per-file failures are reported and counted; they never abort the batch.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::scan::find_text_files;
use crate::core::error::Txt2SvgError;
use crate::core::paths::{normalize_path, output_path_for};
use crate::core::template::{Template, MARKER};
use crate::core::wrap::{WrapMode, Wrapper, DEFAULT_LINE_WIDTH};

/// Everything a generate run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub line_width: usize,
    pub mode: WrapMode,
    pub template: PathBuf,
    pub scripts_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Suppress progress lines (warnings and errors are still shown)
    pub quiet: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            mode: WrapMode::default(),
            template: PathBuf::from("templates/text.svg"),
            scripts_dir: PathBuf::from("scripts"),
            output_dir: PathBuf::from("deploy"),
            quiet: false,
        }
    }
}

/// What happened to a single script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Generated(PathBuf),
    /// Unreadable, not UTF-8, or empty after trimming
    Skipped,
    /// The output could not be written
    Failed,
}

/// Totals for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub generated: Vec<PathBuf>,
    pub skipped: usize,
    pub failed: usize,
}

impl GenerateSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Generated(path) => self.generated.push(path),
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

/// Run the generate flow
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateSummary> {
    let wrapper = Wrapper::new(config.line_width, config.mode)?;

    let template = Template::load(&config.template)?;
    if template.marker_count() > 1 {
        eprintln!(
            "{} template {} contains {} occurrences of {}; only the first is replaced",
            "Warning:".yellow(),
            normalize_path(template.path()),
            template.marker_count(),
            MARKER
        );
    }

    let sources = find_text_files(&config.scripts_dir);
    if sources.is_empty() {
        return Err(Txt2SvgError::NoInputFiles(config.scripts_dir.clone()).into());
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| Txt2SvgError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    status(
        config,
        format!(
            "Processing {} text files with line width {}...",
            sources.len(),
            wrapper.width()
        ),
    );
    tracing::debug!(mode = %wrapper.mode(), template = %template.path().display(), "Starting run");

    let mut summary = GenerateSummary::default();
    for source in &sources {
        let outcome = process_file(config, &wrapper, &template, source);
        summary.record(outcome);
    }

    status(config, "Done".to_string());
    tracing::info!(
        generated = summary.generated.len(),
        skipped = summary.skipped,
        failed = summary.failed,
        "Run finished"
    );

    Ok(summary)
}

/// Wrap one script and write its SVG
pub fn process_file(
    config: &GenerateConfig,
    wrapper: &Wrapper,
    template: &Template,
    source: &Path,
) -> FileOutcome {
    let output = output_path_for(source, &config.output_dir);
    let (src_display, out_display) = (normalize_path(source), normalize_path(&output));

    status(
        config,
        format!("Processing: {} -> {}", src_display, out_display),
    );

    let text = match read_script(source) {
        Some(text) => text,
        None => {
            println!(
                "{} Empty or unreadable file: {}",
                "Warning:".yellow(),
                src_display
            );
            return FileOutcome::Skipped;
        }
    };

    let wrapped = wrapper.wrap(&text);
    tracing::debug!(
        source = %src_display,
        chars = text.chars().count(),
        lines = wrapped.lines().count(),
        "Wrapped script"
    );

    match fs::write(&output, template.render(&wrapped)) {
        Ok(()) => {
            status(config, format!("Generated: {}", out_display));
            FileOutcome::Generated(output)
        }
        Err(err) => {
            eprintln!("{} writing {}: {}", "Error".red(), out_display, err);
            FileOutcome::Failed
        }
    }
}

/// Read a script and trim the whole text; `None` when unusable
fn read_script(source: &Path) -> Option<String> {
    match fs::read_to_string(source) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(err) => {
            eprintln!(
                "{} reading text file {}: {}",
                "Error".red(),
                normalize_path(source),
                err
            );
            None
        }
    }
}

fn status(config: &GenerateConfig, message: String) {
    if !config.quiet {
        println!("{}", message);
    }
}
