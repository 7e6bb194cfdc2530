#![warn(missing_docs)]
//! `yaml-editor-lang` - data-driven language configuration for `yaml-editor`.
//!
//! This crate stays dependency-free. It describes *what* a language looks like to the editor
//! (comment tokens and indentation unit) so hosts and highlighters can
//! configure themselves without knowing about YAML parsing.

/// Comment tokens for a language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `#`).
    pub line: Option<String>,
}

impl CommentConfig {
    /// A config with a line comment token.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
        }
    }

    /// Returns `true` if a non-empty line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Everything the editor needs to know about one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Language identifier (e.g. `"yaml"`).
    pub name: String,
    /// Comment tokens.
    pub comment: CommentConfig,
    /// Text inserted for one level of indentation.
    pub indent_unit: String,
}

impl LanguageConfig {
    /// YAML: `#` comments and two-space indentation.
    pub fn yaml() -> Self {
        Self {
            name: "yaml".to_string(),
            comment: CommentConfig::line("#"),
            indent_unit: "  ".to_string(),
        }
    }
}
