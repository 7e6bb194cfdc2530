//! Editor state: a document snapshot plus its configured behaviors.
//!
//! [`EditorState`] is immutable. Applying a [`Change`] produces a new state that shares the
//! extension list with the old one. Derived data (diagnostics, highlighting, fold ranges) is
//! always computed from the snapshot on demand; nothing is cached between versions.

use crate::change::Change;
use crate::diagnostics::Diagnostic;
use crate::document::Document;
use crate::error::EditorError;
use crate::extension::Extension;
use crate::folding::{FoldRange, FoldService};
use crate::keymap::{self, Command, Keymap};
use crate::lint::LintSource;
use crate::style::{Highlighter, Interval};
use crate::theme::Theme;
use std::sync::Arc;
use yaml_editor_lang::LanguageConfig;

/// Indentation used when neither an `IndentUnit` nor a language is configured.
pub const DEFAULT_INDENT_UNIT: &str = "  ";

/// An immutable editor state.
#[derive(Debug, Clone)]
pub struct EditorState {
    doc: Document,
    extensions: Arc<[Extension]>,
    version: u64,
}

impl EditorState {
    /// Create a state from a document and an ordered extension list.
    pub fn create(doc: impl Into<Document>, extensions: Vec<Extension>) -> Self {
        Self {
            doc: doc.into(),
            extensions: extensions.into(),
            version: 0,
        }
    }

    /// The document snapshot.
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    /// The configured extensions, in order.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Number of changes applied since [`EditorState::create`].
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a change, returning the next state.
    pub fn update(&self, change: &Change) -> Result<EditorState, EditorError> {
        let doc = self.doc.replace(change.from, change.to, &change.insert)?;
        Ok(Self {
            doc,
            extensions: Arc::clone(&self.extensions),
            version: self.version + 1,
        })
    }

    /// Returns `true` if a behavior is configured, directly or through `BasicSetup`.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| ext.name() == name)
            || (self.has_basic_setup()
                && Extension::basic_setup_bundle()
                    .iter()
                    .any(|bundled| *bundled == name))
    }

    /// The configured language (last one wins).
    pub fn language(&self) -> Option<&LanguageConfig> {
        self.extensions.iter().rev().find_map(|ext| match ext {
            Extension::Language(lang) => Some(lang),
            _ => None,
        })
    }

    /// Text for one indentation level.
    pub fn indent_unit(&self) -> &str {
        self.extensions
            .iter()
            .rev()
            .find_map(|ext| match ext {
                Extension::IndentUnit(unit) => Some(unit.as_str()),
                _ => None,
            })
            .or_else(|| self.language().map(|lang| lang.indent_unit.as_str()))
            .unwrap_or(DEFAULT_INDENT_UNIT)
    }

    /// Whether multiple selections are allowed. `BasicSetup` turns them on.
    pub fn allow_multiple_selections(&self) -> bool {
        self.extensions
            .iter()
            .rev()
            .find_map(|ext| match ext {
                Extension::AllowMultipleSelections(allow) => Some(*allow),
                _ => None,
            })
            .unwrap_or_else(|| self.has_basic_setup())
    }

    /// The active theme (last one wins).
    pub fn theme(&self) -> Option<&Theme> {
        self.extensions.iter().rev().find_map(|ext| match ext {
            Extension::Theme(theme) => Some(theme),
            _ => None,
        })
    }

    /// Returns `true` if the active theme is dark.
    pub fn is_dark(&self) -> bool {
        self.theme().is_some_and(|theme| theme.dark)
    }

    /// All installed keymaps, in precedence order.
    pub fn keymaps(&self) -> Vec<Keymap> {
        self.extensions
            .iter()
            .filter_map(|ext| match ext {
                Extension::Keymap(keymaps) => Some(keymaps.iter().copied()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Resolve a key through the installed keymaps.
    pub fn lookup_key(&self, key: &str) -> Option<Command> {
        keymap::lookup(&self.keymaps(), key)
    }

    /// The fold starting on a 1-based line, asking fold services in order.
    pub fn foldable(&self, line_number: usize) -> Result<Option<FoldRange>, EditorError> {
        let line = self.doc.try_line(line_number)?;
        Ok(self
            .fold_services()
            .find_map(|service| service.fold(&self.doc, line.from, line.to)))
    }

    /// Every line that starts a fold, with its range.
    pub fn foldable_ranges(&self) -> Vec<(usize, FoldRange)> {
        let services: Vec<&Arc<dyn FoldService>> = self.fold_services().collect();
        if services.is_empty() {
            return Vec::new();
        }

        (1..=self.doc.lines())
            .filter_map(|number| {
                let line = self.doc.line(number)?;
                services
                    .iter()
                    .find_map(|service| service.fold(&self.doc, line.from, line.to))
                    .map(|range| (number, range))
            })
            .collect()
    }

    /// Run every linter over the document.
    ///
    /// Diagnostics are clamped to the document and sorted by position.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let len = self.doc.len();
        let mut diagnostics: Vec<Diagnostic> = self
            .linters()
            .flat_map(|linter| linter.lint(&self.doc))
            .map(|d| d.clamp_to(len))
            .collect();
        diagnostics.sort_by_key(|d| (d.from, d.to));

        tracing::debug!(
            version = self.version,
            count = diagnostics.len(),
            "recomputed diagnostics"
        );
        diagnostics
    }

    /// Style intervals from the installed highlighters.
    ///
    /// Fallback highlighters only run when no primary highlighter is installed.
    pub fn highlights(&self) -> Vec<Interval> {
        let highlighters: Vec<(&Arc<dyn Highlighter>, bool)> = self
            .extensions
            .iter()
            .filter_map(|ext| match ext {
                Extension::SyntaxHighlighting {
                    highlighter,
                    fallback,
                } => Some((highlighter, *fallback)),
                _ => None,
            })
            .collect();

        let has_primary = highlighters.iter().any(|(_, fallback)| !fallback);
        highlighters
            .into_iter()
            .filter(|(_, fallback)| !(has_primary && *fallback))
            .flat_map(|(highlighter, _)| highlighter.highlight(&self.doc))
            .collect()
    }

    fn has_basic_setup(&self) -> bool {
        self.extensions
            .iter()
            .any(|ext| matches!(ext, Extension::BasicSetup))
    }

    fn fold_services(&self) -> impl Iterator<Item = &Arc<dyn FoldService>> {
        self.extensions.iter().filter_map(|ext| match ext {
            Extension::FoldService(service) => Some(service),
            _ => None,
        })
    }

    fn linters(&self) -> impl Iterator<Item = &Arc<dyn LintSource>> {
        self.extensions.iter().filter_map(|ext| match ext {
            Extension::Linter(linter) => Some(linter),
            _ => None,
        })
    }
}
