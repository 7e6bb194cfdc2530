//! YAML syntax diagnostics.
//!
//! The whole document is parsed on every run. A parse failure becomes a single error
//! diagnostic at the position the parser reports; a clean parse yields no diagnostics.

use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use yaml_editor_core::{Diagnostic, Document, LintSource};

/// Source name attached to YAML diagnostics.
pub const YAML_LINT_SOURCE: &str = "yaml";

/// Message used when the parser fails without producing an error value.
pub const PARSER_FAILURE_MESSAGE: &str = "YAML parser failed unexpectedly";

/// A position reported by the parser (1-based line and column, counted in chars).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

/// A YAML syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// The parser's description, verbatim.
    pub message: String,
    /// Where the parser gave up, if it said.
    pub mark: Option<Mark>,
    /// UTF-8 byte offset of the offending input, for errors raised while reading the text
    /// (e.g. a control character). Such errors carry no usable mark.
    pub byte_offset: Option<usize>,
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        let message = err.to_string();
        let location = err.location();

        // Reader errors report the start of the stream as their location and put the real
        // position at the end of the message.
        let byte_offset = location
            .as_ref()
            .filter(|location| location.index() == 0)
            .and_then(|_| reader_position(&message));
        let mark = location
            .filter(|_| byte_offset.is_none())
            .map(|location| Mark {
                line: location.line(),
                column: location.column(),
            });

        Self {
            message,
            mark,
            byte_offset,
        }
    }
}

fn reader_position(message: &str) -> Option<usize> {
    let (_, position) = message.rsplit_once(" at position ")?;
    position.trim().parse().ok()
}

/// Parse a single YAML document. A stream with more than one document is an error.
pub fn parse_yaml(text: &str) -> Result<serde_yaml::Value, ParseError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Diagnose `doc`. Never fails: problems are reported as diagnostics.
pub fn lint_yaml(doc: &Document) -> Vec<Diagnostic> {
    lint_with(doc, parse_yaml)
}

/// Diagnose `doc` with the given parser.
///
/// A panicking parser yields one generic error diagnostic at offset 0.
pub fn lint_with<F>(doc: &Document, parse: F) -> Vec<Diagnostic>
where
    F: Fn(&str) -> Result<serde_yaml::Value, ParseError>,
{
    let text = doc.text();
    match panic::catch_unwind(AssertUnwindSafe(|| parse(&text))) {
        Ok(Ok(_)) => Vec::new(),
        Ok(Err(err)) => vec![diagnostic_for(doc, &err)],
        Err(_) => {
            tracing::warn!("YAML parser panicked; reporting a generic diagnostic");
            vec![Diagnostic::error(0, 0, PARSER_FAILURE_MESSAGE).with_source(YAML_LINT_SOURCE)]
        }
    }
}

/// Convert a parse error into a point diagnostic.
///
/// A byte offset takes precedence over the mark. Errors with neither are reported at
/// offset 0. Positions past the end of a line or of the document are clamped.
pub fn diagnostic_for(doc: &Document, err: &ParseError) -> Diagnostic {
    let offset = match (err.byte_offset, err.mark) {
        (Some(byte), _) => doc.byte_to_char(byte),
        (None, Some(mark)) => mark_offset(doc, mark),
        (None, None) => 0,
    };
    Diagnostic::error(offset, offset, err.message.clone()).with_source(YAML_LINT_SOURCE)
}

fn mark_offset(doc: &Document, mark: Mark) -> usize {
    match doc.line(mark.line.max(1)) {
        Some(line) => (line.from + mark.column.saturating_sub(1)).min(line.to),
        None => doc.len(),
    }
}

/// [`LintSource`] reporting YAML syntax errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLinter;

impl LintSource for YamlLinter {
    fn source(&self) -> &str {
        YAML_LINT_SOURCE
    }

    fn lint(&self, doc: &Document) -> Vec<Diagnostic> {
        lint_yaml(doc)
    }
}
