//! Key bindings.
//!
//! Keymaps are static tables grouped the way they are installed: indentation on Tab, bracket
//! handling, the default editing keys, history, folding and completion. A key is resolved by
//! walking the installed keymaps in order, so an earlier keymap shadows a later one.

/// Editor commands that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Indent the selected lines one unit.
    IndentMore,
    /// Dedent the selected lines one unit.
    IndentLess,
    /// Delete an auto-inserted bracket pair around the cursor.
    DeleteBracketPair,
    /// Insert a newline and indent the new line.
    InsertNewlineAndIndent,
    /// Delete the character before the cursor.
    DeleteCharBackward,
    /// Delete the character after the cursor.
    DeleteCharForward,
    /// Move the cursor one line up.
    CursorLineUp,
    /// Move the cursor one line down.
    CursorLineDown,
    /// Select the whole document.
    SelectAll,
    /// Toggle line comments on the selected lines.
    ToggleComment,
    /// Undo the last change.
    Undo,
    /// Redo the last undone change.
    Redo,
    /// Undo the last selection change.
    UndoSelection,
    /// Fold the block starting on the cursor line.
    FoldCode,
    /// Unfold the block starting on the cursor line.
    UnfoldCode,
    /// Fold every foldable block.
    FoldAll,
    /// Unfold everything.
    UnfoldAll,
    /// Open the completion popup.
    StartCompletion,
    /// Close the completion popup.
    CloseCompletion,
}

/// One key binding. Keys use `Mod-` for the platform command key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key description, e.g. `"Mod-z"` or `"Ctrl-Shift-["`.
    pub key: &'static str,
    /// Bound command.
    pub command: Command,
}

const fn bind(key: &'static str, command: Command) -> KeyBinding {
    KeyBinding { key, command }
}

const INDENT_WITH_TAB: &[KeyBinding] = &[
    bind("Tab", Command::IndentMore),
    bind("Shift-Tab", Command::IndentLess),
];

const CLOSE_BRACKETS: &[KeyBinding] = &[bind("Backspace", Command::DeleteBracketPair)];

const DEFAULT: &[KeyBinding] = &[
    bind("Enter", Command::InsertNewlineAndIndent),
    bind("Backspace", Command::DeleteCharBackward),
    bind("Delete", Command::DeleteCharForward),
    bind("ArrowUp", Command::CursorLineUp),
    bind("ArrowDown", Command::CursorLineDown),
    bind("Mod-a", Command::SelectAll),
    bind("Mod-/", Command::ToggleComment),
    bind("Mod-]", Command::IndentMore),
    bind("Mod-[", Command::IndentLess),
];

const HISTORY: &[KeyBinding] = &[
    bind("Mod-z", Command::Undo),
    bind("Mod-y", Command::Redo),
    bind("Mod-Shift-z", Command::Redo),
    bind("Mod-u", Command::UndoSelection),
];

const FOLD: &[KeyBinding] = &[
    bind("Ctrl-Shift-[", Command::FoldCode),
    bind("Ctrl-Shift-]", Command::UnfoldCode),
    bind("Ctrl-Alt-[", Command::FoldAll),
    bind("Ctrl-Alt-]", Command::UnfoldAll),
];

const COMPLETION: &[KeyBinding] = &[
    bind("Ctrl-Space", Command::StartCompletion),
    bind("Escape", Command::CloseCompletion),
];

/// A named group of key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keymap {
    /// Tab / Shift-Tab indent and dedent.
    IndentWithTab,
    /// Bracket-pair deletion.
    CloseBrackets,
    /// Basic editing and movement.
    Default,
    /// Undo / redo.
    History,
    /// Fold / unfold.
    Fold,
    /// Completion popup control.
    Completion,
}

impl Keymap {
    /// The bindings in this keymap.
    pub fn bindings(self) -> &'static [KeyBinding] {
        match self {
            Keymap::IndentWithTab => INDENT_WITH_TAB,
            Keymap::CloseBrackets => CLOSE_BRACKETS,
            Keymap::Default => DEFAULT,
            Keymap::History => HISTORY,
            Keymap::Fold => FOLD,
            Keymap::Completion => COMPLETION,
        }
    }
}

/// Resolve `key` through `keymaps`, first match wins.
pub fn lookup(keymaps: &[Keymap], key: &str) -> Option<Command> {
    keymaps
        .iter()
        .flat_map(|keymap| keymap.bindings())
        .find(|binding| binding.key == key)
        .map(|binding| binding.command)
}
