use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced when editing or querying editor state.
pub enum EditorError {
    #[error("invalid range {from}..{to} for document of length {len}")]
    /// A change range was reversed or ran past the end of the document.
    InvalidRange {
        /// Range start (char offset).
        from: usize,
        /// Range end (char offset).
        to: usize,
        /// Document length in chars.
        len: usize,
    },

    #[error("line {line} out of range (document has {line_count} lines)")]
    /// A 1-based line number did not exist.
    LineOutOfRange {
        /// The requested line number.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },
}
