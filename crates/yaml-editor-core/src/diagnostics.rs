//! Diagnostics data model.
//!
//! Diagnostics are derived state: a [`LintSource`](crate::LintSource) produces them from a
//! document snapshot and the view keeps the latest list for gutter markers and inline messages.

use serde::Serialize;

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that makes the document invalid.
    Error,
    /// A suspicious construct.
    Warning,
    /// Informational note.
    Info,
}

/// A single reported problem at a point or range in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Range start (char offset, inclusive).
    pub from: usize,
    /// Range end (char offset). Equal to `from` for point diagnostics.
    pub to: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// The linter that produced the diagnostic (e.g. `"yaml"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with the given severity.
    pub fn new(from: usize, to: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            from,
            to,
            message: message.into(),
            severity,
            source: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(from: usize, to: usize, message: impl Into<String>) -> Self {
        Self::new(from, to, Severity::Error, message)
    }

    /// Attach the producing linter's name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Keep `from <= to <= len`.
    pub fn clamp_to(mut self, len: usize) -> Self {
        self.to = self.to.min(len);
        self.from = self.from.min(self.to);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to() {
        let d = Diagnostic::error(10, 20, "x").clamp_to(15);
        assert_eq!((d.from, d.to), (10, 15));

        let d = Diagnostic::error(30, 40, "x").clamp_to(15);
        assert_eq!((d.from, d.to), (15, 15));
    }

    #[test]
    fn test_serialized_shape() {
        let d = Diagnostic::error(3, 3, "bad indentation").with_source("yaml");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": 3,
                "to": 3,
                "message": "bad indentation",
                "severity": "error",
                "source": "yaml",
            })
        );
    }
}
