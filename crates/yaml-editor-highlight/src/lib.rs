//! `yaml-editor-highlight` - regex-based YAML highlighting for `yaml-editor`.
//!
//! YAML is line-oriented enough that a handful of per-line regex rules give useful coloring
//! (keys, scalars, comments, anchors, tags) without a full parser. Diagnostics come from a real
//! parser elsewhere; this crate only produces style intervals.
//!
//! Style ids are plain numbers. The built-in themes in [`themes`] map them to colors.

pub mod themes;

use regex::Regex;
use std::ops::Range;
use yaml_editor_core::{CommentConfig, Document, Highlighter, Interval, LanguageConfig, StyleId};

/// A single regex highlighting rule.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    style_id: StyleId,
    capture_group: Option<usize>,
}

impl RegexRule {
    /// A rule styling every match of `pattern`.
    pub fn new(pattern: &str, style_id: StyleId) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            style_id,
            capture_group: None,
        })
    }

    /// Style only capture group `group` of each match, so context around a token can be
    /// matched without being colored.
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    /// Non-empty byte spans this rule styles in `text`.
    fn spans<'t>(&'t self, text: &'t str) -> impl Iterator<Item = Range<usize>> + 't {
        let group = self.capture_group.unwrap_or(0);
        self.regex
            .captures_iter(text)
            .filter_map(move |caps| caps.get(group))
            .map(|m| m.range())
            .filter(|span| !span.is_empty())
    }
}

/// A simple regex-based syntax highlighter.
///
/// Rules run independently on each line, so constructs spanning lines (block scalars,
/// multi-line flow collections) are only colored line by line.
#[derive(Debug, Clone)]
pub struct RegexHighlighter {
    rules: Vec<RegexRule>,
}

impl RegexHighlighter {
    /// A highlighter running `rules` in order.
    pub fn new(rules: Vec<RegexRule>) -> Self {
        Self { rules }
    }

    /// Style intervals for the whole document, in char offsets.
    pub fn highlight_document(&self, doc: &Document) -> Vec<Interval> {
        let mut intervals = Vec::new();
        for number in 1..=doc.lines() {
            let Some(line) = doc.line(number) else {
                continue;
            };
            let char_offset = |byte: usize| line.from + line.text[..byte].chars().count();
            for rule in &self.rules {
                intervals.extend(rule.spans(&line.text).map(|span| {
                    Interval::new(char_offset(span.start), char_offset(span.end), rule.style_id)
                }));
            }
        }
        intervals
    }

    /// The YAML grammar: comments, keys, quoted strings, numbers, booleans/null, anchors and
    /// aliases, tags, document markers and directives.
    pub fn yaml_default(styles: YamlStyles) -> Result<Self, regex::Error> {
        let mut rules = vec![
            // Mapping key, optionally after sequence dashes.
            RegexRule::new(
                r#"^\s*(?:-\s+)*("(?:\\.|[^"\\])*"|'(?:''|[^'])*'|[^\s#'"\[\]{},:-][^#]*?)\s*:(?:\s|$)"#,
                styles.key,
            )?
            .with_capture_group(1),
            // Quoted scalars (single-line).
            RegexRule::new(r#""(?:\\.|[^"\\])*"|'(?:''|[^'])*'"#, styles.string)?,
            // Numbers not glued to a word.
            RegexRule::new(
                r#"(?:^|[^\w.])(-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b"#,
                styles.number,
            )?
            .with_capture_group(1),
            // Booleans and null.
            RegexRule::new(r#"(?i)\b(?:true|false|yes|no|on|off|null)\b"#, styles.atom)?,
            RegexRule::new(r#"(?:^|\s)(~)(?:\s|$)"#, styles.atom)?.with_capture_group(1),
            // Anchors and aliases.
            RegexRule::new(r#"[&*][^\s,\[\]{}]+"#, styles.anchor)?,
            // Tags.
            RegexRule::new(r#"!{1,2}[^\s,\[\]{}]*"#, styles.tag)?,
            // Document markers and directives.
            RegexRule::new(r#"^(---|\.\.\.|%.*)(?:\s|$)"#, styles.meta)?.with_capture_group(1),
        ];

        if let Some(rule) = comment_rule(&LanguageConfig::yaml().comment, styles.comment)? {
            rules.push(rule);
        }
        Ok(Self::new(rules))
    }
}

impl Highlighter for RegexHighlighter {
    fn highlight(&self, doc: &Document) -> Vec<Interval> {
        self.highlight_document(doc)
    }
}

/// A rule coloring a line comment from its token to the end of the line.
///
/// The token must start the line or follow whitespace.
fn comment_rule(
    comment: &CommentConfig,
    style_id: StyleId,
) -> Result<Option<RegexRule>, regex::Error> {
    let Some(token) = comment.line.as_deref().filter(|_| comment.has_line()) else {
        return Ok(None);
    };
    let pattern = format!(r"(?:^|\s)({}.*)$", regex::escape(token));
    Ok(Some(RegexRule::new(&pattern, style_id)?.with_capture_group(1)))
}

/// Style ids used by [`RegexHighlighter::yaml_default`].
#[derive(Debug, Clone, Copy)]
pub struct YamlStyles {
    pub comment: StyleId,
    pub key: StyleId,
    pub string: StyleId,
    pub number: StyleId,
    pub atom: StyleId,
    pub anchor: StyleId,
    pub tag: StyleId,
    pub meta: StyleId,
}

impl Default for YamlStyles {
    fn default() -> Self {
        Self {
            comment: YAML_STYLE_COMMENT,
            key: YAML_STYLE_KEY,
            string: YAML_STYLE_STRING,
            number: YAML_STYLE_NUMBER,
            atom: YAML_STYLE_ATOM,
            anchor: YAML_STYLE_ANCHOR,
            tag: YAML_STYLE_TAG,
            meta: YAML_STYLE_META,
        }
    }
}

/// Default `StyleId` constants for the YAML grammar.
///
/// These are only identifiers. Themes map them to actual colors.
pub const YAML_STYLE_COMMENT: StyleId = 0x0200_0020;
pub const YAML_STYLE_KEY: StyleId = 0x0200_0021;
pub const YAML_STYLE_STRING: StyleId = 0x0200_0022;
pub const YAML_STYLE_NUMBER: StyleId = 0x0200_0023;
pub const YAML_STYLE_ATOM: StyleId = 0x0200_0024;
pub const YAML_STYLE_ANCHOR: StyleId = 0x0200_0025;
pub const YAML_STYLE_TAG: StyleId = 0x0200_0026;
pub const YAML_STYLE_META: StyleId = 0x0200_0027;

/// Map a theme style name to its default style id.
pub fn style_id_for_name(name: &str) -> Option<StyleId> {
    match name {
        "comment" => Some(YAML_STYLE_COMMENT),
        "key" => Some(YAML_STYLE_KEY),
        "string" => Some(YAML_STYLE_STRING),
        "number" => Some(YAML_STYLE_NUMBER),
        "atom" => Some(YAML_STYLE_ATOM),
        "anchor" => Some(YAML_STYLE_ANCHOR),
        "tag" => Some(YAML_STYLE_TAG),
        "meta" => Some(YAML_STYLE_META),
        _ => None,
    }
}
