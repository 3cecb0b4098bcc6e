//! Changelog document template
//!
//! A template is markdown text holding two markers, `<!-- {{HEADER}} -->`
//! and `<!-- {{CONTENT}} -->`. Markers are matched case-insensitively and
//! each is replaced once; all other text is kept verbatim.

use std::path::Path;
use std::sync::LazyLock;

use glchangelog_core::{Result, TemplateError};
use regex::{NoExpand, Regex};
use tracing::{debug, info};

const BUILTIN: &str = include_str!("../resources/template.md");

static HEADER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!-- \{\{HEADER\}\} -->").expect("Invalid regex"));

static CONTENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!-- \{\{CONTENT\}\} -->").expect("Invalid regex"));

/// A validated changelog template
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    /// The template shipped with glchangelog
    pub fn builtin() -> Self {
        Self {
            text: BUILTIN.to_string(),
        }
    }

    /// Parse template text, rejecting text without both markers
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();

        if !HEADER_MARKER.is_match(&text) {
            return Err(TemplateError::MissingMarker("HEADER").into());
        }
        if !CONTENT_MARKER.is_match(&text) {
            return Err(TemplateError::MissingMarker("CONTENT").into());
        }

        Ok(Self { text })
    }

    /// Load a template file
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading template");

        if !path.exists() {
            return Err(TemplateError::NotFound(path.to_path_buf()).into());
        }

        let text = std::fs::read_to_string(path).map_err(TemplateError::Io)?;
        Self::parse(text)
    }

    /// Template text before substitution
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitute the header and content into the template
    pub fn render(&self, header: &str, content: &str) -> String {
        let with_header = HEADER_MARKER.replace(&self.text, NoExpand(header));
        let rendered = CONTENT_MARKER.replace(&with_header, NoExpand(content));
        debug!(rendered_len = rendered.len(), "template rendered");
        rendered.into_owned()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glchangelog_core::ChangelogError;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_is_valid() {
        assert!(Template::parse(BUILTIN).is_ok());
    }

    #[test]
    fn test_render_replaces_markers_and_keeps_text() {
        let template = Template::builtin();
        let output = template.render("", "## [Unreleased]\n\n");

        assert!(!output.contains("{{HEADER}}"));
        assert!(!output.contains("{{CONTENT}}"));
        assert!(output.starts_with("# Changelog\n\nAll notable changes"));
        assert!(output.contains("and this project adheres to [Semantic Versioning]"));
        assert!(output.ends_with("## [Unreleased]\n\n\n"));
    }

    #[test]
    fn test_markers_match_case_insensitively() {
        let template = Template::parse("top\n<!-- {{header}} -->\nmid\n<!-- {{Content}} -->\nend").unwrap();
        assert_eq!(template.render("H", "C"), "top\nH\nmid\nC\nend");
    }

    #[test]
    fn test_content_is_inserted_literally() {
        let template = Template::parse("<!-- {{HEADER}} --><!-- {{CONTENT}} -->").unwrap();
        assert_eq!(template.render("", "costs $1 and ${2}"), "costs $1 and ${2}");
    }

    #[test]
    fn test_marker_in_content_is_not_replaced_again() {
        let template = Template::parse("<!-- {{HEADER}} -->|<!-- {{CONTENT}} -->").unwrap();
        assert_eq!(
            template.render("<!-- {{CONTENT}} -->", "body"),
            "body|<!-- {{CONTENT}} -->"
        );
    }

    #[test]
    fn test_missing_marker_is_rejected() {
        let err = Template::parse("# Changelog\n<!-- {{HEADER}} -->\n").unwrap_err();
        assert!(matches!(
            err,
            ChangelogError::Template(TemplateError::MissingMarker("CONTENT"))
        ));

        let err = Template::parse("<!-- {{CONTENT}} -->").unwrap_err();
        assert!(matches!(
            err,
            ChangelogError::Template(TemplateError::MissingMarker("HEADER"))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template.md");
        std::fs::write(&path, "# Releases\n<!-- {{HEADER}} -->\n<!-- {{CONTENT}} -->\n").unwrap();

        let template = Template::load(&path).unwrap();
        assert_eq!(template.render("", "x"), "# Releases\n\nx\n");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Template::load(&temp.path().join("nope.md")).unwrap_err();
        assert!(matches!(
            err,
            ChangelogError::Template(TemplateError::NotFound(_))
        ));
    }
}
