//! Editor assembly.
//!
//! Builds the extension list for a YAML editor and hands it to
//! [`EditorState::create`]. The only branch is the `one_dark` option.

use crate::fold::IndentFold;
use crate::lint::YamlLinter;
use crate::options::EditorOptions;
use std::sync::Arc;
use yaml_editor_core::{
    DEFAULT_INDENT_UNIT, EditorState, EditorView, Extension, Keymap, LanguageConfig, Theme,
};
use yaml_editor_highlight::{RegexHighlighter, YamlStyles, themes};

/// The ordered extension list for a YAML editor.
///
/// A theme that fails to load is skipped with a warning, as is the highlighter.
pub fn yaml_extensions(options: &EditorOptions) -> Vec<Extension> {
    let mut extensions = vec![
        Extension::LineNumbers,
        Extension::HighlightActiveLineGutter,
        Extension::HighlightSpecialChars,
        Extension::DrawSelection,
        Extension::IndentUnit(DEFAULT_INDENT_UNIT.to_string()),
        Extension::AllowMultipleSelections(true),
        Extension::IndentOnInput,
        Extension::BracketMatching,
        Extension::CloseBrackets,
        Extension::Autocompletion,
        Extension::RectangularSelection,
        Extension::CrosshairCursor,
        Extension::HighlightActiveLine,
        Extension::HighlightSelectionMatches,
        Extension::Keymap(vec![
            Keymap::IndentWithTab,
            Keymap::CloseBrackets,
            Keymap::Default,
            Keymap::History,
            Keymap::Fold,
            Keymap::Completion,
        ]),
    ];

    match RegexHighlighter::yaml_default(YamlStyles::default()) {
        Ok(highlighter) => extensions.push(Extension::SyntaxHighlighting {
            highlighter: Arc::new(highlighter),
            fallback: true,
        }),
        Err(err) => tracing::warn!("YAML highlighter unavailable: {}", err),
    }

    extensions.extend([
        Extension::BasicSetup,
        Extension::Language(LanguageConfig::yaml()),
        Extension::LintGutter,
        Extension::Linter(Arc::new(YamlLinter)),
        Extension::FoldService(Arc::new(IndentFold)),
    ]);

    if options.one_dark {
        match themes::one_dark() {
            Ok(theme) => extensions.push(Extension::Theme(theme)),
            Err(err) => tracing::warn!("Failed to load One Dark theme: {}", err),
        }
    }

    extensions
}

/// Create a YAML editor state holding `initial`.
pub fn create_editor_state(initial: &str, options: &EditorOptions) -> EditorState {
    let extensions = yaml_extensions(options);
    tracing::debug!(
        "Creating YAML editor state ({} chars, {} extensions, one_dark={})",
        initial.chars().count(),
        extensions.len(),
        options.one_dark
    );
    EditorState::create(initial, extensions)
}

/// Attach a view for `state` to the host container `parent`.
pub fn create_editor_view<P>(state: EditorState, parent: P) -> EditorView<P> {
    EditorView::new(state, parent)
}

/// The theme a renderer should use: the installed one, else the default light style.
pub fn resolved_theme(state: &EditorState) -> Option<Theme> {
    if let Some(theme) = state.theme() {
        return Some(theme.clone());
    }
    themes::default_highlight_style()
        .inspect_err(|err| tracing::warn!("Failed to load default highlight style: {}", err))
        .ok()
}
