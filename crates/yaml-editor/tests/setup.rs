use pretty_assertions::assert_eq;
use yaml_editor::{
    EditorOptions, create_editor_state, create_editor_view, resolved_theme, yaml_extensions,
};
use yaml_editor_core::{Change, Command, Extension, FoldRange, Keymap, StyleId};
use yaml_editor_highlight::{YAML_STYLE_COMMENT, YAML_STYLE_KEY};

const SAMPLE: &str = "a:\n  b: 1\n  c: 2\nd: 3";

#[test]
fn test_extension_order() {
    let names: Vec<&str> = yaml_extensions(&EditorOptions::default())
        .iter()
        .map(Extension::name)
        .collect();

    assert_eq!(
        names,
        vec![
            "lineNumbers",
            "highlightActiveLineGutter",
            "highlightSpecialChars",
            "drawSelection",
            "indentUnit",
            "allowMultipleSelections",
            "indentOnInput",
            "bracketMatching",
            "closeBrackets",
            "autocompletion",
            "rectangularSelection",
            "crosshairCursor",
            "highlightActiveLine",
            "highlightSelectionMatches",
            "keymap",
            "syntaxHighlighting",
            "basicSetup",
            "language",
            "lintGutter",
            "linter",
            "foldService",
        ]
    );
}

#[test]
fn test_state_configuration() {
    let state = create_editor_state(SAMPLE, &EditorOptions::default());

    assert_eq!(state.doc().text(), SAMPLE);
    assert_eq!(state.version(), 0);
    assert_eq!(state.indent_unit(), "  ");
    assert!(state.allow_multiple_selections());
    assert_eq!(state.language().map(|lang| lang.name.as_str()), Some("yaml"));
    assert!(state.is_enabled("history"));
    assert!(state.is_enabled("foldGutter"));
    assert!(!state.is_dark());
    assert!(state.theme().is_none());
    assert_eq!(
        state.keymaps(),
        vec![
            Keymap::IndentWithTab,
            Keymap::CloseBrackets,
            Keymap::Default,
            Keymap::History,
            Keymap::Fold,
            Keymap::Completion,
        ]
    );
}

#[test]
fn test_one_dark_option() {
    let options = EditorOptions::from_json_str(r#"{"oneDark": true}"#).unwrap();
    let state = create_editor_state(SAMPLE, &options);

    assert!(state.is_dark());
    assert_eq!(state.theme().map(|theme| theme.name.as_str()), Some("One Dark"));
    assert!(resolved_theme(&state).unwrap().dark);

    let light = create_editor_state(SAMPLE, &EditorOptions::default());
    assert!(!resolved_theme(&light).unwrap().dark);
}

#[test]
fn test_key_resolution_order() {
    let state = create_editor_state("", &EditorOptions::default());
    // The bracket keymap is installed before the default one.
    assert_eq!(state.lookup_key("Backspace"), Some(Command::DeleteBracketPair));
    assert_eq!(state.lookup_key("Tab"), Some(Command::IndentMore));
    assert_eq!(state.lookup_key("Mod-z"), Some(Command::Undo));
    assert_eq!(state.lookup_key("F13"), None);
}

#[test]
fn test_highlighting() {
    let state = create_editor_state("name: app # main", &EditorOptions::default());
    let view = create_editor_view(state, ());
    let doc = view.state().doc();

    let styled = |style_id: StyleId| -> Vec<String> {
        view.highlights()
            .iter()
            .filter(|interval| interval.style_id == style_id)
            .map(|interval| doc.slice(interval.start, interval.end))
            .collect()
    };
    assert_eq!(styled(YAML_STYLE_KEY), vec!["name"]);
    assert_eq!(styled(YAML_STYLE_COMMENT), vec!["# main"]);
}

#[test]
fn test_fold_keys() {
    let state = create_editor_state(SAMPLE, &EditorOptions::default());
    let mut view = create_editor_view(state, ());

    view.set_cursor(1);
    assert!(view.handle_key("Ctrl-Shift-["));
    assert_eq!(view.visible_lines(), vec![1, 4]);

    assert!(view.handle_key("Ctrl-Shift-]"));
    assert_eq!(view.visible_lines(), vec![1, 2, 3, 4]);

    assert!(view.handle_key("Ctrl-Alt-["));
    assert!(view.is_line_hidden(2));
    assert!(view.handle_key("Ctrl-Alt-]"));
    assert!(!view.handle_key("Ctrl-Alt-]"));

    // Left to the host.
    assert!(!view.handle_key("Mod-z"));
}

#[test]
fn test_folds_follow_edits() {
    let state = create_editor_state(SAMPLE, &EditorOptions::default());
    let mut view = create_editor_view(state, ());
    assert!(view.fold_line(1).unwrap());

    view.dispatch(Change::insert(0, "top: 0\n")).unwrap();
    let folds: Vec<FoldRange> = view.folded().iter().copied().collect();
    assert_eq!(folds, vec![FoldRange::new(9, 23)]);
    assert_eq!(view.visible_lines(), vec![1, 2, 5]);

    // Deleting the whole block drops the fold.
    view.dispatch(Change::delete(9, 23)).unwrap();
    assert!(view.folded().is_empty());
    assert_eq!(view.state().doc().text(), "top: 0\na:\nd: 3");
}

#[test]
fn test_destroy_returns_parent() {
    let state = create_editor_state(SAMPLE, &EditorOptions::default());
    let view = create_editor_view(state, String::from("#editor"));
    assert_eq!(view.destroy(), "#editor");
}
