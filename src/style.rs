//! Named style presets for the Markdown renderer.
//!
//! Each preset is a plain immutable record choosing the decorator glyphs
//! used per block type and the font style applied to `**bold**` spans.
//! Presets are selected by name from a closed registry; there is no way
//! to construct ad-hoc configs through the public API, which keeps output
//! reproducible across callers.

use crate::error::{Error, Result};
use crate::font::FontStyle;

/// Decoration applied to a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Heading text rendered as-is.
    Plain,
    /// Text wrapped in a bracket pair, e.g. `【Title】`.
    Wrap(&'static str, &'static str),
    /// A glyph prefix, e.g. `✸ Title`.
    Prefix(&'static str),
}

impl Heading {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Heading::Plain => text.to_string(),
            Heading::Wrap(open, close) => format!("{open}{text}{close}"),
            Heading::Prefix(prefix) => format!("{prefix}{text}"),
        }
    }
}

/// One rendering preset: the decorator glyphs per block type plus the
/// bold font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    pub name: &'static str,
    /// Prefix for list items (a space is inserted after it).
    pub list_marker: &'static str,
    /// Literal replacement for a thematic break.
    pub hr: &'static str,
    pub h1: Heading,
    pub h2: Heading,
    /// Prefix for blockquote lines; abuts the text directly (any desired
    /// spacing is part of the marker itself).
    pub blockquote_marker: &'static str,
    /// Font style substituted into `**bold**` spans.
    pub bold_font_style: FontStyle,
}

/// Unobtrusive output: plain headings, bullet lists, em-dash rules.
pub static MINIMAL: StyleConfig = StyleConfig {
    name: "minimal",
    list_marker: "\u{2022}",
    hr: "\u{2014}\u{2014}\u{2014}",
    h1: Heading::Plain,
    h2: Heading::Plain,
    blockquote_marker: "> ",
    bold_font_style: FontStyle::SansSerifBold,
};

/// Document-like output: lenticular-bracket titles, heavy box-drawing
/// rules and quote bars.
pub static STRUCTURED: StyleConfig = StyleConfig {
    name: "structured",
    list_marker: "-",
    hr: "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}",
    h1: Heading::Wrap("\u{3010}", "\u{3011}"),
    h2: Heading::Prefix("\u{258d}"),
    blockquote_marker: "\u{2503}",
    bold_font_style: FontStyle::SansSerifBold,
};

/// Feed-friendly output: star headings, arrow lists, dotted rules.
pub static SOCIAL: StyleConfig = StyleConfig {
    name: "social",
    list_marker: "\u{2192}",
    hr: "\u{00b7} \u{00b7} \u{00b7}",
    h1: Heading::Prefix("\u{2738} "),
    h2: Heading::Prefix("\u{2726} "),
    blockquote_marker: "\u{275d} ",
    bold_font_style: FontStyle::SansSerifBold,
};

/// The preset names accepted by [`style_config`], in presentation order.
pub const PRESET_NAMES: [&str; 3] = ["minimal", "structured", "social"];

/// Look up a preset by name.
///
/// # Errors
///
/// Returns [`Error::UnknownPreset`] for names outside the registry; an
/// unrecognized preset name is a caller bug, not user data.
pub fn style_config(name: &str) -> Result<&'static StyleConfig> {
    match name {
        "minimal" => Ok(&MINIMAL),
        "structured" => Ok(&STRUCTURED),
        "social" => Ok(&SOCIAL),
        _ => Err(Error::UnknownPreset(name.to_string())),
    }
}
