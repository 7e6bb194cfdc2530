use pretty_assertions::assert_eq;
use std::sync::Arc;
use yaml_editor_core::{
    Change, Diagnostic, Document, EditorError, EditorState, Extension, FoldRange, Highlighter,
    Interval, Keymap, LanguageConfig, LintSource, Severity,
};

struct Fixed(Vec<Diagnostic>);

impl LintSource for Fixed {
    fn source(&self) -> &str {
        "fixed"
    }

    fn lint(&self, _doc: &Document) -> Vec<Diagnostic> {
        self.0.clone()
    }
}

struct WholeDocument(u32);

impl Highlighter for WholeDocument {
    fn highlight(&self, doc: &Document) -> Vec<Interval> {
        vec![Interval::new(0, doc.len(), self.0)]
    }
}

fn whole_document(style_id: u32, fallback: bool) -> Extension {
    Extension::SyntaxHighlighting {
        highlighter: Arc::new(WholeDocument(style_id)),
        fallback,
    }
}

#[test]
fn test_update_produces_new_snapshot() {
    let state = EditorState::create("hello", vec![Extension::LineNumbers]);
    let next = state.update(&Change::insert(5, " world")).unwrap();

    assert_eq!(state.doc().text(), "hello");
    assert_eq!(next.doc().text(), "hello world");
    assert_eq!(state.version(), 0);
    assert_eq!(next.version(), 1);
    assert_eq!(next.extensions().len(), 1);
}

#[test]
fn test_update_rejects_bad_range() {
    let state = EditorState::create("abc", Vec::new());
    assert_eq!(
        state.update(&Change::delete(2, 9)).unwrap_err(),
        EditorError::InvalidRange {
            from: 2,
            to: 9,
            len: 3
        }
    );
}

#[test]
fn test_configuration_lookups() {
    let bare = EditorState::create("", Vec::new());
    assert_eq!(bare.indent_unit(), "  ");
    assert!(!bare.allow_multiple_selections());
    assert!(!bare.is_enabled("history"));
    assert!(bare.language().is_none());

    let state = EditorState::create(
        "",
        vec![
            Extension::Language(LanguageConfig::yaml()),
            Extension::BasicSetup,
            Extension::IndentUnit("    ".to_string()),
            Extension::AllowMultipleSelections(false),
        ],
    );
    assert_eq!(state.indent_unit(), "    ");
    assert!(!state.allow_multiple_selections());
    assert!(state.is_enabled("history"));
    assert!(state.is_enabled("indentUnit"));
    assert!(!state.is_enabled("lintGutter"));
}

#[test]
fn test_keymaps_flatten_in_order() {
    let state = EditorState::create(
        "",
        vec![
            Extension::Keymap(vec![Keymap::Fold]),
            Extension::LineNumbers,
            Extension::Keymap(vec![Keymap::Default, Keymap::CloseBrackets]),
        ],
    );
    assert_eq!(
        state.keymaps(),
        vec![Keymap::Fold, Keymap::Default, Keymap::CloseBrackets]
    );
}

#[test]
fn test_diagnostics_are_clamped_and_sorted() {
    let state = EditorState::create(
        "abc",
        vec![
            Extension::Linter(Arc::new(Fixed(vec![Diagnostic::error(2, 40, "late")]))),
            Extension::Linter(Arc::new(Fixed(vec![Diagnostic::new(
                0,
                1,
                Severity::Warning,
                "early",
            )]))),
        ],
    );

    let diagnostics = state.diagnostics();
    let spans: Vec<(usize, usize, &str)> = diagnostics
        .iter()
        .map(|d| (d.from, d.to, d.message.as_str()))
        .collect();
    assert_eq!(spans, vec![(0, 1, "early"), (2, 3, "late")]);
}

#[test]
fn test_fallback_highlighter_yields_to_primary() {
    let fallback_only = EditorState::create("abc", vec![whole_document(1, true)]);
    assert_eq!(fallback_only.highlights(), vec![Interval::new(0, 3, 1)]);

    let both = EditorState::create(
        "abc",
        vec![whole_document(1, true), whole_document(2, false)],
    );
    assert_eq!(both.highlights(), vec![Interval::new(0, 3, 2)]);
}

#[test]
fn test_first_fold_service_wins() {
    let never = |_: &Document, _: usize, _: usize| -> Option<FoldRange> { None };
    let whole = |doc: &Document, _: usize, to: usize| Some(FoldRange::new(to, doc.len()));
    let other = |_: &Document, _: usize, _: usize| Some(FoldRange::new(0, 1));

    let state = EditorState::create(
        "a\nb",
        vec![
            Extension::FoldService(Arc::new(never)),
            Extension::FoldService(Arc::new(whole)),
            Extension::FoldService(Arc::new(other)),
        ],
    );
    assert_eq!(state.foldable(1).unwrap(), Some(FoldRange::new(1, 3)));
    assert_eq!(
        state.foldable(3).unwrap_err(),
        EditorError::LineOutOfRange {
            line: 3,
            line_count: 2
        }
    );
}
