//! Input discovery
//!
//! Uses the ignore crate's walker limited to the top level of the scripts
//! directory, with dotfiles skipped and VCS ignore rules off.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::core::paths::is_input_file;

/// List `*.txt` files directly inside `dir`, sorted by path.
///
/// A missing or unreadable directory yields an empty list.
pub fn find_text_files(dir: &Path) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false).hidden(true).max_depth(Some(1));

    let mut files: Vec<PathBuf> = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "Skipping scan entry");
                continue;
            }
        };

        let path = entry.path();
        if path == dir || !path.is_file() || !is_input_file(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    files
}
