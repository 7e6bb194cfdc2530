//! Indentation-based folding.
//!
//! YAML nests by indentation, so a line folds everything below it that is indented deeper,
//! up to the first line at the same or a shallower depth.

use yaml_editor_core::{Document, FoldRange, FoldService};

/// Char offset of the first non-whitespace character, or the line length if there is none.
///
/// Blank lines therefore have depth 0 and whitespace-only lines have the depth of their
/// whitespace.
pub fn indentation_depth(text: &str) -> usize {
    text.chars()
        .position(|c| !c.is_whitespace())
        .unwrap_or_else(|| text.chars().count())
}

/// The fold owned by the line containing `from`.
///
/// The fold starts at the end of that line, so the line itself stays visible, and extends
/// to the end of the last line of the deeper-indented run below it. Returns `None` when no
/// line directly below is indented deeper, including on the last line of the document.
pub fn fold_indented(doc: &Document, from: usize, to: usize) -> Option<FoldRange> {
    let line = doc.line_at(from);
    let indent = indentation_depth(&line.text);

    let mut fold_end = to;
    for number in line.number + 1..=doc.lines() {
        let Some(next) = doc.line(number) else {
            break;
        };
        if indentation_depth(&next.text) <= indent {
            break;
        }
        fold_end = next.to;
    }

    if doc.line_at(fold_end).number == line.number {
        return None;
    }
    Some(FoldRange::new(line.to, fold_end))
}

/// [`FoldService`] folding YAML blocks by indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentFold;

impl FoldService for IndentFold {
    fn fold(&self, doc: &Document, line_from: usize, line_to: usize) -> Option<FoldRange> {
        fold_indented(doc, line_from, line_to)
    }
}
