//! Unicode styled-text engine.
//!
//! Converts ASCII letters and digits into decorative Unicode look-alikes
//! (mathematical alphanumerics, enclosed letters, combining overlays, and
//! glyph flips). CJK ideographs and any character outside a style's
//! alphabet pass through unchanged, so mixed-script text survives intact.
//!
//! Conversion is total: every character of every style has a defined
//! fallback (identity), so [`convert_to_unicode`] never fails. Unknown
//! style *tags* are rejected earlier, when parsing a [`FontStyle`] from a
//! string.

mod config;
mod tables;

use crate::error::Error;
use config::FontConfig;

/// A styled alphabet selectable by tag.
///
/// Four behavioral families:
/// - offset-based (Bold through SansSerifBoldItalic): code-point arithmetic
///   into a Mathematical Alphanumeric Symbols block, with per-style
///   exception tables;
/// - lookup-based (Circled, Squared, Parenthesized, SmallCaps): direct
///   character tables, case-folded where the target alphabet is
///   single-case;
/// - combining-based (Strikethrough, Underline): a combining mark appended
///   after every non-space character;
/// - transform-based (Fullwidth, UpsideDown): fixed numeric shift, or a
///   glyph-flip table followed by whole-string reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Bold,
    Italic,
    BoldItalic,
    BoldScript,
    Script,
    Fraktur,
    DoubleStruck,
    Monospace,
    SansSerifBold,
    SansSerifItalic,
    SansSerifBoldItalic,
    Circled,
    Squared,
    Parenthesized,
    SmallCaps,
    Strikethrough,
    Underline,
    Fullwidth,
    UpsideDown,
}

impl FontStyle {
    /// All 19 styles, in presentation order.
    pub const ALL: [FontStyle; 19] = [
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::BoldItalic,
        FontStyle::BoldScript,
        FontStyle::Script,
        FontStyle::Fraktur,
        FontStyle::DoubleStruck,
        FontStyle::Monospace,
        FontStyle::SansSerifBold,
        FontStyle::SansSerifItalic,
        FontStyle::SansSerifBoldItalic,
        FontStyle::Circled,
        FontStyle::Squared,
        FontStyle::Parenthesized,
        FontStyle::SmallCaps,
        FontStyle::Strikethrough,
        FontStyle::Underline,
        FontStyle::Fullwidth,
        FontStyle::UpsideDown,
    ];

    /// The camelCase wire tag for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::BoldItalic => "boldItalic",
            FontStyle::BoldScript => "boldScript",
            FontStyle::Script => "script",
            FontStyle::Fraktur => "fraktur",
            FontStyle::DoubleStruck => "doubleStruck",
            FontStyle::Monospace => "monospace",
            FontStyle::SansSerifBold => "sansSerifBold",
            FontStyle::SansSerifItalic => "sansSerifItalic",
            FontStyle::SansSerifBoldItalic => "sansSerifBoldItalic",
            FontStyle::Circled => "circled",
            FontStyle::Squared => "squared",
            FontStyle::Parenthesized => "parenthesized",
            FontStyle::SmallCaps => "smallCaps",
            FontStyle::Strikethrough => "strikethrough",
            FontStyle::Underline => "underline",
            FontStyle::Fullwidth => "fullwidth",
            FontStyle::UpsideDown => "upsideDown",
        }
    }

    /// The offset config for offset-based styles, `None` otherwise.
    fn offset_config(self) -> Option<&'static FontConfig> {
        match self {
            FontStyle::Bold => Some(&config::BOLD),
            FontStyle::Italic => Some(&config::ITALIC),
            FontStyle::BoldItalic => Some(&config::BOLD_ITALIC),
            FontStyle::BoldScript => Some(&config::BOLD_SCRIPT),
            FontStyle::Script => Some(&config::SCRIPT),
            FontStyle::Fraktur => Some(&config::FRAKTUR),
            FontStyle::DoubleStruck => Some(&config::DOUBLE_STRUCK),
            FontStyle::Monospace => Some(&config::MONOSPACE),
            FontStyle::SansSerifBold => Some(&config::SANS_SERIF_BOLD),
            FontStyle::SansSerifItalic => Some(&config::SANS_SERIF_ITALIC),
            FontStyle::SansSerifBoldItalic => Some(&config::SANS_SERIF_BOLD_ITALIC),
            _ => None,
        }
    }
}

impl std::str::FromStr for FontStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-character conversion result for visual differentiation in a UI.
///
/// For combining styles `char` holds the base character plus its mark as
/// one unit; `converted` then means "received a mark" (i.e. not a space).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(feature = "cli", feature = "wasm"), derive(serde::Serialize))]
pub struct RichChar {
    pub char: String,
    pub converted: bool,
}

/// Check whether a character is a CJK ideograph
/// (U+4E00–U+9FFF or U+3400–U+4DBF).
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}')
}

/// Convert one character through an offset config. Exceptions win;
/// CJK and anything outside A-Z/a-z/0-9 passes through.
fn convert_char_offset(c: char, config: &FontConfig) -> char {
    if let Some(&(_, target)) = config.exceptions.iter().find(|&&(source, _)| source == c) {
        return char::from_u32(target).unwrap_or(c);
    }
    if is_cjk(c) {
        return c;
    }
    let start = match c {
        'A'..='Z' => Some((config.uppercase_start, 'A')),
        'a'..='z' => Some((config.lowercase_start, 'a')),
        '0'..='9' => config.digit_start.map(|d| (d, '0')),
        _ => None,
    };
    match start {
        Some((start, base)) => char::from_u32(start + (c as u32 - base as u32)).unwrap_or(c),
        None => c,
    }
}

/// Single-character substitution for every non-combining style.
fn convert_char(c: char, style: FontStyle) -> char {
    match style {
        FontStyle::Circled => tables::circled(c),
        FontStyle::Squared => tables::squared(c),
        FontStyle::Parenthesized => tables::parenthesized(c),
        FontStyle::SmallCaps => tables::small_caps(c),
        FontStyle::Fullwidth => tables::fullwidth(c),
        FontStyle::UpsideDown => tables::upside_down(c),
        FontStyle::Strikethrough | FontStyle::Underline => c,
        offset => match offset.offset_config() {
            Some(config) => convert_char_offset(c, config),
            None => c,
        },
    }
}

fn combining_mark(style: FontStyle) -> Option<char> {
    match style {
        FontStyle::Strikethrough => Some(tables::COMBINING_STRIKETHROUGH),
        FontStyle::Underline => Some(tables::COMBINING_UNDERLINE),
        _ => None,
    }
}

/// Convert text to Unicode styled characters for the given font style.
///
/// ASCII letters and digits are converted; CJK characters, punctuation,
/// and everything outside the style's alphabet pass through unchanged
/// (except strikethrough/underline/fullwidth, which apply to all
/// characters or append marks regardless of script).
///
/// # Examples
///
/// ```
/// use unimark::{FontStyle, convert_to_unicode};
///
/// assert_eq!(convert_to_unicode("abc", FontStyle::Monospace), "𝚊𝚋𝚌");
/// assert_eq!(convert_to_unicode("中文", FontStyle::Bold), "中文");
/// ```
pub fn convert_to_unicode(text: &str, style: FontStyle) -> String {
    if let Some(mark) = combining_mark(style) {
        // Spaces are left bare so whitespace runs keep their visual width.
        let mut result = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            result.push(c);
            if c != ' ' {
                result.push(mark);
            }
        }
        return result;
    }

    if style == FontStyle::UpsideDown {
        return text
            .chars()
            .map(|c| convert_char(c, style))
            .rev()
            .collect();
    }

    text.chars().map(|c| convert_char(c, style)).collect()
}

/// Convert text and return per-character info about whether each character
/// was actually transformed. Used by preview UIs to dim passthrough
/// characters.
///
/// Concatenating the `char` fields reproduces [`convert_to_unicode`]
/// exactly, including the whole-sequence reversal for
/// [`FontStyle::UpsideDown`].
pub fn convert_to_unicode_rich(text: &str, style: FontStyle) -> Vec<RichChar> {
    if let Some(mark) = combining_mark(style) {
        return text
            .chars()
            .map(|c| {
                if c == ' ' {
                    RichChar {
                        char: c.to_string(),
                        converted: false,
                    }
                } else {
                    let mut unit = String::with_capacity(c.len_utf8() + mark.len_utf8());
                    unit.push(c);
                    unit.push(mark);
                    RichChar {
                        char: unit,
                        converted: true,
                    }
                }
            })
            .collect();
    }

    let mut chars: Vec<RichChar> = text
        .chars()
        .map(|c| {
            let result = convert_char(c, style);
            RichChar {
                char: result.to_string(),
                converted: result != c,
            }
        })
        .collect();

    if style == FontStyle::UpsideDown {
        chars.reverse();
    }

    chars
}
