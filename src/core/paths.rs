//! Path helpers for input discovery and output naming

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extension of source scripts
pub const INPUT_EXTENSION: &str = "txt";

/// Extension of generated documents
pub const OUTPUT_EXTENSION: &str = "svg";

/// Normalize a path to use '/' as separator (for stable console output)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check if a path names a source script (`*.txt`, case-sensitive)
pub fn is_input_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(INPUT_EXTENSION))
}

/// Output location for a source file: same stem, `.svg`, inside `output_dir`
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let mut name: OsString = source
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    output_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("scripts/intro.txt");
        assert_eq!(normalize_path(path), "scripts/intro.txt");
    }

    #[test]
    fn test_is_input_file() {
        assert!(is_input_file(Path::new("scripts/a.txt")));
        assert!(is_input_file(Path::new("a.b.txt")));
        assert!(!is_input_file(Path::new("a.TXT")));
        assert!(!is_input_file(Path::new("a.md")));
        assert!(!is_input_file(Path::new("txt")));
    }

    #[test]
    fn test_output_path_for() {
        let out = output_path_for(Path::new("scripts/intro.txt"), Path::new("deploy"));
        assert_eq!(out, PathBuf::from("deploy/intro.svg"));
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let out = output_path_for(Path::new("scripts/ch1.part2.txt"), Path::new("out"));
        assert_eq!(out, PathBuf::from("out/ch1.part2.svg"));
    }

    #[test]
    fn test_output_path_unicode_stem() {
        let out = output_path_for(Path::new("台本.txt"), Path::new("deploy"));
        assert_eq!(out, PathBuf::from("deploy/台本.svg"));
    }
}
