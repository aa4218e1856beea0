//! SVG template loading and marker substitution

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Txt2SvgError;

/// Placeholder replaced by the wrapped text
pub const MARKER: &str = "(TEXT HERE)";

/// A template document known to contain at least one marker
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    content: String,
    marker_count: usize,
}

impl Template {
    /// Read and validate a template from disk
    pub fn load(path: &Path) -> Result<Self, Txt2SvgError> {
        let content = fs::read_to_string(path).map_err(|source| Txt2SvgError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, content)
    }

    /// Validate template content; fails when the marker is absent
    pub fn parse(path: &Path, content: impl Into<String>) -> Result<Self, Txt2SvgError> {
        let content = content.into();
        let marker_count = content.matches(MARKER).count();
        if marker_count == 0 {
            return Err(Txt2SvgError::MarkerMissing {
                path: path.to_path_buf(),
                marker: MARKER,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            content,
            marker_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of marker occurrences; only the first is ever replaced
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Substitute `text` for the first marker occurrence
    pub fn render(&self, text: &str) -> String {
        self.content.replacen(MARKER, text, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<Template, Txt2SvgError> {
        Template::parse(Path::new("text.svg"), content)
    }

    #[test]
    fn test_render_exact() {
        let template = parse("<svg>(TEXT HERE)</svg>").unwrap();
        assert_eq!(template.render("A\nB"), "<svg>A\nB</svg>");
    }

    #[test]
    fn test_missing_marker_is_error() {
        let err = parse("<svg></svg>").unwrap_err();
        assert!(matches!(err, Txt2SvgError::MarkerMissing { .. }));
    }

    #[test]
    fn test_repeated_marker_replaces_first_only() {
        let template = parse("(TEXT HERE)|(TEXT HERE)").unwrap();
        assert_eq!(template.marker_count(), 2);
        assert_eq!(template.render("x"), "x|(TEXT HERE)");
    }

    #[test]
    fn test_render_text_containing_marker() {
        let template = parse("[(TEXT HERE)]").unwrap();
        assert_eq!(template.render("(TEXT HERE)"), "[(TEXT HERE)]");
    }

    #[test]
    fn test_load_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("text.svg");
        std::fs::write(&path, "<text>(TEXT HERE)</text>").unwrap();

        let template = Template::load(&path).unwrap();
        assert_eq!(template.path(), path.as_path());
        assert_eq!(template.marker_count(), 1);
        assert_eq!(template.render("hi"), "<text>hi</text>");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let err = Template::load(&temp.path().join("nope.svg")).unwrap_err();
        assert!(matches!(err, Txt2SvgError::TemplateRead { .. }));
    }
}
