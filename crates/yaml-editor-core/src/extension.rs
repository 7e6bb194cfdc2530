//! Editor behaviors.
//!
//! An editor is configured with an ordered list of [`Extension`]s. Most variants only switch a
//! host-provided behavior on (line numbers, bracket matching, ...); the rest carry the data or
//! logic the host plugs in at its extension points (fold services, linters, highlighters,
//! keymaps, themes). Order matters: earlier keymaps shadow later ones and the last
//! `IndentUnit` / `Theme` wins.

use crate::folding::FoldService;
use crate::keymap::Keymap;
use crate::lint::LintSource;
use crate::style::Highlighter;
use crate::theme::Theme;
use std::fmt;
use std::sync::Arc;
use yaml_editor_lang::LanguageConfig;

/// One editor behavior.
#[derive(Clone)]
pub enum Extension {
    /// Line number gutter.
    LineNumbers,
    /// Highlight the gutter of the active line.
    HighlightActiveLineGutter,
    /// Render invisible/special characters as placeholders.
    HighlightSpecialChars,
    /// Undo/redo history.
    History,
    /// Fold markers in the gutter.
    FoldGutter,
    /// Custom selection drawing.
    DrawSelection,
    /// Text used for one level of indentation.
    IndentUnit(String),
    /// Whether multiple selections are allowed.
    AllowMultipleSelections(bool),
    /// Re-indent lines when language-specific input is typed.
    IndentOnInput,
    /// Highlight matching brackets.
    BracketMatching,
    /// Auto-close brackets and quotes.
    CloseBrackets,
    /// Completion popup.
    Autocompletion,
    /// Alt-drag rectangular selection.
    RectangularSelection,
    /// Crosshair cursor while Alt is held.
    CrosshairCursor,
    /// Highlight the active line.
    HighlightActiveLine,
    /// Highlight other occurrences of the selected text.
    HighlightSelectionMatches,
    /// Key bindings, in precedence order.
    Keymap(Vec<Keymap>),
    /// Syntax highlighting.
    SyntaxHighlighting {
        /// Computes style intervals.
        highlighter: Arc<dyn Highlighter>,
        /// Only used when no non-fallback highlighter is installed.
        fallback: bool,
    },
    /// The baseline behavior bundle (history, fold gutter, search, ...).
    BasicSetup,
    /// Language configuration.
    Language(LanguageConfig),
    /// Lint markers in the gutter.
    LintGutter,
    /// A linter.
    Linter(Arc<dyn LintSource>),
    /// A fold service.
    FoldService(Arc<dyn FoldService>),
    /// A color theme.
    Theme(Theme),
}

impl Extension {
    /// Stable name of the behavior.
    pub fn name(&self) -> &'static str {
        match self {
            Extension::LineNumbers => "lineNumbers",
            Extension::HighlightActiveLineGutter => "highlightActiveLineGutter",
            Extension::HighlightSpecialChars => "highlightSpecialChars",
            Extension::History => "history",
            Extension::FoldGutter => "foldGutter",
            Extension::DrawSelection => "drawSelection",
            Extension::IndentUnit(_) => "indentUnit",
            Extension::AllowMultipleSelections(_) => "allowMultipleSelections",
            Extension::IndentOnInput => "indentOnInput",
            Extension::BracketMatching => "bracketMatching",
            Extension::CloseBrackets => "closeBrackets",
            Extension::Autocompletion => "autocompletion",
            Extension::RectangularSelection => "rectangularSelection",
            Extension::CrosshairCursor => "crosshairCursor",
            Extension::HighlightActiveLine => "highlightActiveLine",
            Extension::HighlightSelectionMatches => "highlightSelectionMatches",
            Extension::Keymap(_) => "keymap",
            Extension::SyntaxHighlighting { .. } => "syntaxHighlighting",
            Extension::BasicSetup => "basicSetup",
            Extension::Language(_) => "language",
            Extension::LintGutter => "lintGutter",
            Extension::Linter(_) => "linter",
            Extension::FoldService(_) => "foldService",
            Extension::Theme(_) => "theme",
        }
    }

    /// Behaviors included by [`Extension::BasicSetup`].
    pub fn basic_setup_bundle() -> &'static [&'static str] {
        &[
            "lineNumbers",
            "highlightActiveLineGutter",
            "highlightSpecialChars",
            "history",
            "foldGutter",
            "drawSelection",
            "dropCursor",
            "allowMultipleSelections",
            "indentOnInput",
            "syntaxHighlighting",
            "bracketMatching",
            "closeBrackets",
            "autocompletion",
            "rectangularSelection",
            "crosshairCursor",
            "highlightActiveLine",
            "highlightSelectionMatches",
            "keymap",
        ]
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extension::IndentUnit(unit) => f.debug_tuple("IndentUnit").field(unit).finish(),
            Extension::AllowMultipleSelections(allow) => f
                .debug_tuple("AllowMultipleSelections")
                .field(allow)
                .finish(),
            Extension::Keymap(keymaps) => f.debug_tuple("Keymap").field(keymaps).finish(),
            Extension::SyntaxHighlighting { fallback, .. } => f
                .debug_struct("SyntaxHighlighting")
                .field("fallback", fallback)
                .finish_non_exhaustive(),
            Extension::Language(lang) => f.debug_tuple("Language").field(&lang.name).finish(),
            Extension::Linter(linter) => f.debug_tuple("Linter").field(&linter.source()).finish(),
            Extension::Theme(theme) => f.debug_tuple("Theme").field(&theme.name).finish(),
            other => f.write_str(other.name()),
        }
    }
}
