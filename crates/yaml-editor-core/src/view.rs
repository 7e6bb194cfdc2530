//! Editor view: a state attached to a host container.
//!
//! The view owns the mutable side of an editor: the current [`EditorState`], the cursor, the
//! collapsed folds and the derived data recomputed after every change (diagnostics and style
//! intervals). Rendering is left to the host, which reads this data back out.

use crate::change::Change;
use crate::diagnostics::{Diagnostic, Severity};
use crate::error::EditorError;
use crate::folding::FoldSet;
use crate::keymap::Command;
use crate::state::EditorState;
use crate::style::Interval;
use std::collections::BTreeMap;

/// An editor view mounted in a parent container `P`.
#[derive(Debug)]
pub struct EditorView<P> {
    state: EditorState,
    parent: P,
    cursor: usize,
    folded: FoldSet,
    diagnostics: Vec<Diagnostic>,
    highlights: Vec<Interval>,
}

impl<P> EditorView<P> {
    /// Attach `state` to `parent` and compute the initial derived data.
    pub fn new(state: EditorState, parent: P) -> Self {
        let mut view = Self {
            state,
            parent,
            cursor: 0,
            folded: FoldSet::new(),
            diagnostics: Vec::new(),
            highlights: Vec::new(),
        };
        view.refresh();
        view
    }

    /// The current state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The container this view is mounted in.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// Diagnostics for the current document.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Style intervals for the current document.
    pub fn highlights(&self) -> &[Interval] {
        &self.highlights
    }

    /// Collapsed folds.
    pub fn folded(&self) -> &FoldSet {
        &self.folded
    }

    /// Cursor position (char offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the document.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.state.doc().len());
    }

    /// Apply a change: update the state, carry folds and cursor across it and recompute the
    /// derived data.
    pub fn dispatch(&mut self, change: Change) -> Result<(), EditorError> {
        let next = self.state.update(&change)?;
        tracing::debug!(
            from = change.from,
            to = change.to,
            inserted = change.insert.len(),
            version = next.version(),
            "dispatch"
        );

        self.state = next;
        self.folded.map(&change);
        self.cursor = map_cursor(self.cursor, &change);
        self.refresh();
        Ok(())
    }

    /// Replace the whole state. Folds are dropped and the cursor moves to the start.
    pub fn set_state(&mut self, state: EditorState) {
        self.state = state;
        self.folded.clear();
        self.cursor = 0;
        self.refresh();
    }

    /// Collapse the block starting on a 1-based line. Returns `false` if nothing folds there.
    pub fn fold_line(&mut self, line_number: usize) -> Result<bool, EditorError> {
        let Some(range) = self.state.foldable(line_number)? else {
            return Ok(false);
        };
        let folded = self.folded.fold(range);
        if folded {
            tracing::debug!(line = line_number, from = range.from, to = range.to, "fold");
        }
        Ok(folded)
    }

    /// Expand the fold owned by a 1-based line.
    pub fn unfold_line(&mut self, line_number: usize) -> Result<bool, EditorError> {
        let line = self.state.doc().try_line(line_number)?;
        Ok(self.folded.unfold_at(line.to))
    }

    /// Collapse every foldable block. Returns the number of newly collapsed folds.
    pub fn fold_all(&mut self) -> usize {
        let mut folded = 0;
        for (_, range) in self.state.foldable_ranges() {
            if self.folded.fold(range) {
                folded += 1;
            }
        }
        folded
    }

    /// Expand everything. Returns `false` if nothing was folded.
    pub fn unfold_all(&mut self) -> bool {
        let had_folds = !self.folded.is_empty();
        self.folded.clear();
        had_folds
    }

    /// Returns `true` if a 1-based line is hidden inside a collapsed fold.
    pub fn is_line_hidden(&self, line_number: usize) -> bool {
        self.state
            .doc()
            .line(line_number)
            .is_some_and(|line| self.folded.hides(line.from))
    }

    /// The 1-based numbers of all lines that are not hidden.
    pub fn visible_lines(&self) -> Vec<usize> {
        (1..=self.state.doc().lines())
            .filter(|&number| !self.is_line_hidden(number))
            .collect()
    }

    /// The most severe diagnostic per 1-based line, for the lint gutter.
    pub fn lint_markers(&self) -> BTreeMap<usize, Severity> {
        let doc = self.state.doc();
        let mut markers: BTreeMap<usize, Severity> = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            let line = doc.line_at(diagnostic.from).number;
            markers
                .entry(line)
                .and_modify(|severity| *severity = (*severity).min(diagnostic.severity))
                .or_insert(diagnostic.severity);
        }
        markers
    }

    /// Run a command. Returns `false` for commands this layer leaves to the host.
    pub fn run_command(&mut self, command: Command) -> bool {
        let cursor_line = self.state.doc().line_at(self.cursor).number;
        match command {
            Command::FoldCode => self.fold_line(cursor_line).unwrap_or(false),
            Command::UnfoldCode => self.unfold_line(cursor_line).unwrap_or(false),
            Command::FoldAll => self.fold_all() > 0,
            Command::UnfoldAll => self.unfold_all(),
            other => {
                tracing::trace!(?other, "command left to host");
                false
            }
        }
    }

    /// Resolve a key through the installed keymaps and run the bound command.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.state
            .lookup_key(key)
            .is_some_and(|command| self.run_command(command))
    }

    /// Detach the view, handing the container back.
    pub fn destroy(self) -> P {
        self.parent
    }

    fn refresh(&mut self) {
        self.diagnostics = self.state.diagnostics();
        self.highlights = self.state.highlights();
    }
}

fn map_cursor(cursor: usize, change: &Change) -> usize {
    if cursor <= change.from {
        cursor
    } else if cursor >= change.to {
        cursor.saturating_add_signed(change.delta())
    } else {
        change.from + change.insert.chars().count()
    }
}
