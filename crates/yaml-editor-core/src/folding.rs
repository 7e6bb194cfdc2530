//! Code folding: the fold service extension point and the set of collapsed ranges.

use crate::change::Change;
use crate::document::Document;

/// A collapsible span of document text (char offsets, `from <= to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct FoldRange {
    /// Start of the hidden text.
    pub from: usize,
    /// End of the hidden text.
    pub to: usize,
}

impl FoldRange {
    /// Create a fold range. Reversed bounds are swapped.
    pub fn new(from: usize, to: usize) -> Self {
        if to < from {
            Self { from: to, to: from }
        } else {
            Self { from, to }
        }
    }

    /// Map this range through a change.
    ///
    /// Returns `None` when the change straddles a boundary of the range or removes its content.
    pub fn map(&self, change: &Change) -> Option<FoldRange> {
        let delta = change.delta();
        if change.to <= self.from {
            return Some(FoldRange {
                from: self.from.saturating_add_signed(delta),
                to: self.to.saturating_add_signed(delta),
            });
        }
        if change.from >= self.to {
            return Some(*self);
        }
        if change.from >= self.from && change.to <= self.to {
            let to = self.to.saturating_add_signed(delta);
            return (to > self.from).then_some(FoldRange {
                from: self.from,
                to,
            });
        }
        None
    }
}

/// Computes the foldable range that starts on a line.
///
/// The host calls this with the start and end offsets of one line and expects `None` when the
/// line does not start a foldable block. Implementations must be pure: the same document and
/// line always yield the same answer.
pub trait FoldService: Send + Sync {
    /// The fold starting at the line spanning `line_from..line_to`, if any.
    fn fold(&self, doc: &Document, line_from: usize, line_to: usize) -> Option<FoldRange>;
}

impl<F> FoldService for F
where
    F: Fn(&Document, usize, usize) -> Option<FoldRange> + Send + Sync,
{
    fn fold(&self, doc: &Document, line_from: usize, line_to: usize) -> Option<FoldRange> {
        self(doc, line_from, line_to)
    }
}

/// The collapsed folds of one view, kept sorted by start offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldSet {
    ranges: Vec<FoldRange>,
}

impl FoldSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse a range. Returns `false` if it is already collapsed or empty.
    pub fn fold(&mut self, range: FoldRange) -> bool {
        if range.from == range.to {
            return false;
        }
        match self.ranges.binary_search(&range) {
            Ok(_) => false,
            Err(pos) => {
                self.ranges.insert(pos, range);
                true
            }
        }
    }

    /// Expand every collapsed range that starts at `offset`. Returns `true` if any was removed.
    pub fn unfold_at(&mut self, offset: usize) -> bool {
        let before = self.ranges.len();
        self.ranges.retain(|r| r.from != offset);
        self.ranges.len() != before
    }

    /// Returns `true` if `offset` is hidden by a collapsed range.
    ///
    /// The start of a fold (the end of the line that owns it) stays visible.
    pub fn hides(&self, offset: usize) -> bool {
        self.ranges
            .iter()
            .any(|r| r.from < offset && offset <= r.to)
    }

    /// Map all ranges through a change, dropping those the change destroyed.
    pub fn map(&mut self, change: &Change) {
        let mut mapped: Vec<FoldRange> =
            self.ranges.iter().filter_map(|r| r.map(change)).collect();
        mapped.sort();
        mapped.dedup();
        self.ranges = mapped;
    }

    /// Expand everything.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Collapsed ranges in start order.
    pub fn iter(&self) -> impl Iterator<Item = &FoldRange> {
        self.ranges.iter()
    }

    /// Number of collapsed ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if nothing is collapsed.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        assert_eq!(FoldRange::new(9, 2), FoldRange { from: 2, to: 9 });
    }

    #[test]
    fn test_map_before_shifts() {
        let range = FoldRange::new(10, 20);
        assert_eq!(
            range.map(&Change::insert(0, "abc")),
            Some(FoldRange::new(13, 23))
        );
        assert_eq!(
            range.map(&Change::delete(2, 5)),
            Some(FoldRange::new(7, 17))
        );
        // Typing at the end of the owning line pushes the fold along.
        assert_eq!(
            range.map(&Change::insert(10, "x")),
            Some(FoldRange::new(11, 21))
        );
    }

    #[test]
    fn test_map_after_is_unchanged() {
        let range = FoldRange::new(10, 20);
        assert_eq!(range.map(&Change::insert(25, "x")), Some(range));
        assert_eq!(range.map(&Change::insert(20, "x")), Some(range));
    }

    #[test]
    fn test_map_inside_resizes() {
        let range = FoldRange::new(10, 20);
        assert_eq!(
            range.map(&Change::insert(15, "xyz")),
            Some(FoldRange::new(10, 23))
        );
        assert_eq!(range.map(&Change::delete(10, 20)), None);
    }

    #[test]
    fn test_map_across_boundary_drops() {
        let range = FoldRange::new(10, 20);
        assert_eq!(range.map(&Change::delete(8, 12)), None);
        assert_eq!(range.map(&Change::delete(18, 22)), None);
    }

    #[test]
    fn test_fold_set() {
        let mut set = FoldSet::new();
        assert!(set.fold(FoldRange::new(2, 9)));
        assert!(!set.fold(FoldRange::new(2, 9)));
        assert!(!set.fold(FoldRange::new(4, 4)));
        assert_eq!(set.len(), 1);

        assert!(!set.hides(2));
        assert!(set.hides(3));
        assert!(set.hides(9));
        assert!(!set.hides(10));

        assert!(set.unfold_at(2));
        assert!(set.is_empty());
    }

    #[test]
    fn test_closure_fold_service() {
        let service = |_: &Document, from: usize, to: usize| Some(FoldRange::new(from, to));
        let doc = Document::new("abc");
        assert_eq!(service.fold(&doc, 0, 3), Some(FoldRange::new(0, 3)));
    }
}
