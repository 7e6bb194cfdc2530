//! Document changes.

/// Replace the chars in `from..to` with `insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Start of the replaced range (char offset).
    pub from: usize,
    /// End of the replaced range (char offset, exclusive).
    pub to: usize,
    /// Inserted text.
    pub insert: String,
}

impl Change {
    /// A general replacement.
    pub fn replace(from: usize, to: usize, insert: impl Into<String>) -> Self {
        Self {
            from,
            to,
            insert: insert.into(),
        }
    }

    /// Insert text at an offset.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, at, text)
    }

    /// Delete a range.
    pub fn delete(from: usize, to: usize) -> Self {
        Self::replace(from, to, String::new())
    }

    /// Net change in document length (chars).
    pub fn delta(&self) -> isize {
        self.insert.chars().count() as isize - (self.to.saturating_sub(self.from)) as isize
    }
}
