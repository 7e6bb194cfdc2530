//! The linter extension point.

use crate::diagnostics::Diagnostic;
use crate::document::Document;

/// Produces diagnostics for a whole document snapshot.
///
/// Linters run synchronously on every document change and must not fail: problems in the
/// document are reported as [`Diagnostic`]s, never as errors.
pub trait LintSource: Send + Sync {
    /// Name recorded as the diagnostics' `source`.
    fn source(&self) -> &str;

    /// Diagnose `doc`.
    fn lint(&self, doc: &Document) -> Vec<Diagnostic>;
}
