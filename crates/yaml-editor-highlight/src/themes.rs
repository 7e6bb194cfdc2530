//! Built-in themes.
//!
//! Theme files are embedded at compile time and resolved against the YAML style ids from
//! [`style_id_for_name`](crate::style_id_for_name).

use crate::style_id_for_name;
use yaml_editor_core::{Theme, ThemeError};

pub const ONE_DARK_YAML: &str = include_str!("../themes/one-dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");

/// A built-in theme entry.
pub struct BuiltinTheme {
    /// Stable identifier (e.g. `"one-dark"`).
    pub id: &'static str,
    /// Embedded YAML content.
    pub yaml: &'static str,
}

/// Registry of all built-in themes.
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "one-dark",
        yaml: ONE_DARK_YAML,
    },
];

/// Parse a theme written against the YAML style names.
pub fn parse_theme(yaml: &str) -> Result<Theme, ThemeError> {
    Theme::from_yaml_str(yaml, style_id_for_name)
}

/// Load a built-in theme by id.
pub fn builtin_theme(id: &str) -> Option<Result<Theme, ThemeError>> {
    BUILTIN_THEMES
        .iter()
        .find(|theme| theme.id == id)
        .map(|theme| {
            tracing::debug!("Loading builtin theme: {}", id);
            parse_theme(theme.yaml)
        })
}

/// The dark One Dark theme.
pub fn one_dark() -> Result<Theme, ThemeError> {
    parse_theme(ONE_DARK_YAML)
}

/// The light highlight style used when no theme is installed.
pub fn default_highlight_style() -> Result<Theme, ThemeError> {
    parse_theme(DEFAULT_LIGHT_YAML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{YAML_STYLE_COMMENT, YAML_STYLE_KEY};
    use yaml_editor_core::Color;

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = parse_theme(builtin.yaml)
                .unwrap_or_else(|e| panic!("theme {} failed to parse: {e}", builtin.id));
            assert_eq!(theme.styles.len(), 8, "theme {}", builtin.id);
        }
    }

    #[test]
    fn test_one_dark() {
        let theme = one_dark().unwrap();
        assert!(theme.dark);
        assert_eq!(theme.background, Color::rgb(0x28, 0x2c, 0x34));
        assert!(theme.style(YAML_STYLE_COMMENT).unwrap().italic);
        assert_eq!(
            theme.style(YAML_STYLE_KEY).unwrap().color,
            Color::rgb(0xe0, 0x6c, 0x75)
        );
    }

    #[test]
    fn test_default_highlight_style_is_light() {
        assert!(!default_highlight_style().unwrap().dark);
    }

    #[test]
    fn test_builtin_theme_lookup() {
        assert!(builtin_theme("one-dark").unwrap().unwrap().dark);
        assert!(builtin_theme("solarized").is_none());
    }
}
