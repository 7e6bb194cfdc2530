//! Immutable document snapshots.
//!
//! A [`Document`] wraps a [`ropey::Rope`], so cloning a snapshot and producing an edited copy are
//! both cheap. Offsets are Unicode scalar (`char`) offsets; line numbers are 1-based.

use crate::error::EditorError;
use crate::text::trim_line_break;
use ropey::Rope;

/// One line of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    /// Char offset of the first character of the line.
    pub from: usize,
    /// Char offset just past the last character, before the line break.
    pub to: usize,
    /// Line text without its line break.
    pub text: String,
}

impl Line {
    /// Length of the line in chars (line break excluded).
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// Returns `true` if the line has no text.
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// An immutable text snapshot.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Build a snapshot from text.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Document length in chars.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` if the document has no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lines. An empty document has one line; a trailing line break starts a new one.
    pub fn lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text between two char offsets (clamped to the document).
    pub fn slice(&self, from: usize, to: usize) -> String {
        let to = to.min(self.len());
        let from = from.min(to);
        self.rope.slice(from..to).to_string()
    }

    /// Char offset of a UTF-8 byte offset into [`Document::text`]. A byte inside a multi-byte
    /// char maps to that char; offsets past the end are clamped.
    pub fn byte_to_char(&self, byte: usize) -> usize {
        self.rope.byte_to_char(byte.min(self.rope.len_bytes()))
    }

    /// The line containing `offset`. Offsets past the end resolve to the last line.
    pub fn line_at(&self, offset: usize) -> Line {
        let offset = offset.min(self.len());
        let index = self.rope.char_to_line(offset);
        self.line_by_index(index)
    }

    /// The line with the given 1-based number.
    pub fn line(&self, number: usize) -> Option<Line> {
        if number == 0 || number > self.lines() {
            return None;
        }
        Some(self.line_by_index(number - 1))
    }

    /// Like [`Document::line`], but reports a missing line as an error.
    pub fn try_line(&self, number: usize) -> Result<Line, EditorError> {
        self.line(number).ok_or(EditorError::LineOutOfRange {
            line: number,
            line_count: self.lines(),
        })
    }

    /// Replace `from..to` with `insert`, returning a new snapshot.
    pub fn replace(&self, from: usize, to: usize, insert: &str) -> Result<Document, EditorError> {
        let len = self.len();
        if from > to || to > len {
            return Err(EditorError::InvalidRange { from, to, len });
        }

        let mut rope = self.rope.clone();
        if from < to {
            rope.remove(from..to);
        }
        if !insert.is_empty() {
            rope.insert(from, insert);
        }
        Ok(Document { rope })
    }

    fn line_by_index(&self, index: usize) -> Line {
        let from = self.rope.line_to_char(index);
        let raw = self.rope.line(index).to_string();
        let text = trim_line_break(&raw).to_string();
        let to = from + text.chars().count();
        Line {
            number: index + 1,
            from,
            to,
            text,
        }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new("");
        assert_eq!(doc.lines(), 1);
        assert_eq!(doc.len(), 0);
        let line = doc.line_at(0);
        assert_eq!(line.number, 1);
        assert!(line.is_empty());
    }

    #[test]
    fn test_line_at() {
        let doc = Document::new("a:\n  b: 1\nc: 2");
        assert_eq!(doc.lines(), 3);

        let line = doc.line_at(4);
        assert_eq!(line.number, 2);
        assert_eq!(line.from, 3);
        assert_eq!(line.to, 9);
        assert_eq!(line.text, "  b: 1");

        // The line break belongs to the line it ends.
        assert_eq!(doc.line_at(2).number, 1);
        assert_eq!(doc.line_at(3).number, 2);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let doc = Document::new("x\ny");
        assert!(doc.line(0).is_none());
        assert_eq!(doc.line(1).map(|l| l.text), Some("x".to_string()));
        assert_eq!(doc.line(2).map(|l| l.text), Some("y".to_string()));
        assert!(doc.line(3).is_none());
        assert_eq!(
            doc.try_line(3),
            Err(EditorError::LineOutOfRange {
                line: 3,
                line_count: 2
            })
        );
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let doc = Document::new("a: 1\n");
        assert_eq!(doc.lines(), 2);
        let last = doc.line(2).unwrap();
        assert_eq!(last.from, 5);
        assert!(last.is_empty());
    }

    #[test]
    fn test_crlf_line_breaks() {
        let doc = Document::new("a:\r\n  b: 1\r\n");
        assert_eq!(doc.lines(), 3);
        let first = doc.line(1).unwrap();
        assert_eq!(first.text, "a:");
        assert_eq!(first.to, 2);
        assert_eq!(doc.line(2).unwrap().from, 4);
    }

    #[test]
    fn test_offsets_past_end_are_clamped() {
        let doc = Document::new("a\nb");
        assert_eq!(doc.line_at(100).number, 2);
        assert_eq!(doc.slice(2, 100), "b");
    }

    #[test]
    fn test_replace() {
        let doc = Document::new("key: 1");
        let edited = doc.replace(5, 6, "two").unwrap();
        assert_eq!(edited.text(), "key: two");
        // The original snapshot is untouched.
        assert_eq!(doc.text(), "key: 1");

        assert_eq!(
            doc.replace(4, 2, "").unwrap_err(),
            EditorError::InvalidRange {
                from: 4,
                to: 2,
                len: 6
            }
        );
        assert!(doc.replace(0, 7, "").is_err());
    }

    #[test]
    fn test_unicode_offsets() {
        let doc = Document::new("名前: 値\n  子: 1");
        let line = doc.line(2).unwrap();
        assert_eq!(line.from, 6);
        assert_eq!(line.text, "  子: 1");
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_byte_to_char() {
        let doc = Document::new("é: 1\nb");
        assert_eq!(doc.byte_to_char(0), 0);
        assert_eq!(doc.byte_to_char(1), 0);
        assert_eq!(doc.byte_to_char(2), 1);
        assert_eq!(doc.byte_to_char(6), 5);
        assert_eq!(doc.byte_to_char(100), doc.len());
    }
}
