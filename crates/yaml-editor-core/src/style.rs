//! Style intervals and the syntax highlighting extension point.

use crate::document::Document;

/// Style ID type. Themes map ids to colors.
pub type StyleId = u32;

/// A styled span `[start, end)` in char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Start offset.
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// Style ID.
    pub style_id: StyleId,
}

impl Interval {
    /// Create a new interval with `[start, end)` offsets and a style id.
    pub fn new(start: usize, end: usize, style_id: StyleId) -> Self {
        Self {
            start,
            end,
            style_id,
        }
    }
}

/// Computes style intervals for a document.
pub trait Highlighter: Send + Sync {
    /// Style intervals for the whole document, in char offsets.
    fn highlight(&self, doc: &Document) -> Vec<Interval>;
}
