#![warn(missing_docs)]
//! YAML Editor Core - headless editor state and view kernel
//!
//! # Overview
//!
//! `yaml-editor-core` models the host side of a code editor: immutable document snapshots,
//! an ordered list of behaviors ([`Extension`]), and a view that keeps the derived data a
//! renderer needs (diagnostics, style intervals, collapsed folds). It does not draw anything.
//!
//! Language-specific logic plugs in at three extension points:
//!
//! - [`FoldService`] - "which range folds at this line?"
//! - [`LintSource`] - "what is wrong with this document?"
//! - [`Highlighter`] - "how is this document styled?"
//!
//! All three are pure functions over a [`Document`] snapshot. The view calls them
//! synchronously after every change and keeps no incremental state between calls.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  EditorView (cursor, folds, derived data)   │  ← Host-facing API
//! ├─────────────────────────────────────────────┤
//! │  EditorState (document + extensions)        │  ← Immutable snapshots
//! ├─────────────────────────────────────────────┤
//! │  Extension points (fold / lint / highlight) │  ← Language plug-ins
//! ├─────────────────────────────────────────────┤
//! │  Document (Rope-based, char offsets)        │  ← Text storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use yaml_editor_core::{Change, Document, EditorState, EditorView, Extension, FoldRange};
//!
//! // Fold every line onto the next one.
//! let next_line = |doc: &Document, _from: usize, to: usize| {
//!     let line = doc.line_at(to);
//!     doc.line(line.number + 1).map(|next| FoldRange::new(line.to, next.to))
//! };
//!
//! let state = EditorState::create("a\nb\nc", vec![Extension::FoldService(Arc::new(next_line))]);
//! let mut view = EditorView::new(state, ());
//!
//! assert!(view.fold_line(1).unwrap());
//! assert!(view.is_line_hidden(2));
//!
//! view.dispatch(Change::insert(0, "x")).unwrap();
//! assert_eq!(view.state().doc().text(), "xa\nb\nc");
//! assert!(view.is_line_hidden(2));
//! ```

pub mod change;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod extension;
pub mod folding;
pub mod keymap;
pub mod lint;
pub mod state;
pub mod style;
pub mod theme;
mod text;
pub mod view;

pub use change::Change;
pub use diagnostics::{Diagnostic, Severity};
pub use document::{Document, Line};
pub use error::EditorError;
pub use extension::Extension;
pub use folding::{FoldRange, FoldService, FoldSet};
pub use keymap::{Command, KeyBinding, Keymap};
pub use lint::LintSource;
pub use state::{DEFAULT_INDENT_UNIT, EditorState};
pub use style::{Highlighter, Interval, StyleId};
pub use theme::{Color, TextStyle, Theme, ThemeData, ThemeError};
pub use view::EditorView;
pub use yaml_editor_lang::{CommentConfig, LanguageConfig};
