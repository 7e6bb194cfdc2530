//! Color themes.
//!
//! Themes are described in YAML ([`ThemeData`]) with colors as hex strings and highlight
//! styles keyed by name. [`Theme::from_data`] resolves the names to [`StyleId`]s through a
//! caller-supplied lookup, so the same format works for any highlighter.

use crate::style::StyleId;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading a theme.
pub enum ThemeError {
    #[error("YAML parse error: {0}")]
    /// The theme file was not valid YAML or did not match the theme schema.
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid color '{0}'")]
    /// A color string was not `#RRGGBB` or `#RRGGBBAA`.
    InvalidColor(String),

    #[error("unknown style '{0}'")]
    /// A style name had no matching style id.
    UnknownStyle(String),
}

/// RGBA color (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ThemeError> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ThemeError::InvalidColor(s.to_string()))
        };
        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => Err(ThemeError::InvalidColor(s.to_string())),
        }
    }
}

/// How one highlight style is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    /// Foreground color.
    pub color: Color,
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
}

/// Raw theme data as parsed from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    /// Display name.
    pub name: String,
    /// Whether this is a dark theme.
    #[serde(default)]
    pub dark: bool,
    /// Editor background color.
    pub background: String,
    /// Default text color.
    pub foreground: String,
    /// Highlight styles keyed by style name.
    #[serde(default)]
    pub styles: BTreeMap<String, TextStyleData>,
}

/// Raw highlight style (color as a hex string).
#[derive(Debug, Clone, Deserialize)]
pub struct TextStyleData {
    /// Foreground color.
    pub color: String,
    /// Bold text.
    #[serde(default)]
    pub bold: bool,
    /// Italic text.
    #[serde(default)]
    pub italic: bool,
}

/// A resolved color theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Display name.
    pub name: String,
    /// Whether this is a dark theme.
    pub dark: bool,
    /// Editor background color.
    pub background: Color,
    /// Default text color.
    pub foreground: Color,
    /// Highlight styles by id.
    pub styles: BTreeMap<StyleId, TextStyle>,
}

impl Theme {
    /// Resolve raw theme data. `resolve` maps style names to ids.
    pub fn from_data<F>(data: ThemeData, resolve: F) -> Result<Self, ThemeError>
    where
        F: Fn(&str) -> Option<StyleId>,
    {
        let mut styles = BTreeMap::new();
        for (name, style) in data.styles {
            let id = resolve(&name).ok_or_else(|| ThemeError::UnknownStyle(name.clone()))?;
            styles.insert(
                id,
                TextStyle {
                    color: Color::from_hex(&style.color)?,
                    bold: style.bold,
                    italic: style.italic,
                },
            );
        }

        Ok(Self {
            name: data.name,
            dark: data.dark,
            background: Color::from_hex(&data.background)?,
            foreground: Color::from_hex(&data.foreground)?,
            styles,
        })
    }

    /// Parse and resolve a theme from YAML text.
    pub fn from_yaml_str<F>(yaml: &str, resolve: F) -> Result<Self, ThemeError>
    where
        F: Fn(&str) -> Option<StyleId>,
    {
        let data: ThemeData = serde_yaml::from_str(yaml)?;
        Self::from_data(data, resolve)
    }

    /// The style for an id, if the theme defines one.
    pub fn style(&self, id: StyleId) -> Option<&TextStyle> {
        self.styles.get(&id)
    }
}
