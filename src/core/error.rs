//! Typed errors for configuration and fatal run conditions
//!
//! Per-file problems are not errors at this level; the generate flow turns
//! them into skipped/failed outcomes and keeps going.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Txt2SvgError {
    #[error("line width must be at least 1, got {0}")]
    InvalidWidth(usize),

    #[error("template file not found or unreadable: {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {path} does not contain the marker {marker}")]
    MarkerMissing { path: PathBuf, marker: &'static str },

    #[error("no .txt files found in {0}")]
    NoInputFiles(PathBuf),

    #[error("failed to create output directory {path}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
