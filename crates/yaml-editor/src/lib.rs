//! `yaml-editor` - a ready-made YAML editor on top of `yaml-editor-core`.
//!
//! Two pieces of YAML-specific logic plug into the core's extension points:
//!
//! - [`IndentFold`]: a line folds the deeper-indented block below it.
//! - [`YamlLinter`]: the document is parsed after every change and a syntax error becomes
//!   one error diagnostic at the parser's reported position.
//!
//! [`create_editor_state`] assembles them with highlighting, keymaps and the baseline
//! behaviors. [`create_editor_view`] attaches a view to a host container.
//!
//! ```rust
//! use yaml_editor::{EditorOptions, create_editor_state, create_editor_view};
//!
//! let options = EditorOptions::from_json_str(r#"{"oneDark": true}"#).unwrap();
//! let state = create_editor_state("a:\n  b: 1\n  c: 2\nd: 3", &options);
//! let mut view = create_editor_view(state, "editor-pane");
//!
//! assert!(view.diagnostics().is_empty());
//! assert!(view.fold_line(1).unwrap());
//! assert_eq!(view.visible_lines(), vec![1, 4]);
//! ```

pub mod fold;
pub mod lint;
pub mod options;
pub mod setup;

pub use fold::{IndentFold, fold_indented, indentation_depth};
pub use lint::{
    Mark, PARSER_FAILURE_MESSAGE, ParseError, YAML_LINT_SOURCE, YamlLinter, diagnostic_for,
    lint_with, lint_yaml, parse_yaml,
};
pub use options::{EditorOptions, OptionsError};
pub use setup::{create_editor_state, create_editor_view, resolved_theme, yaml_extensions};
