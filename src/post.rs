//! Post-processing passes applied to rendered output.
//!
//! Two independent string rewrites:
//!
//! - [`insert_zwsp`] keeps deliberate blank lines from being collapsed by
//!   paste targets, by making each one structurally non-empty with an
//!   invisible zero-width space;
//! - [`pangu_spacing`] inserts a thin buffer of ASCII spaces at CJK/Latin
//!   boundaries, a mixed-script typography convention.
//!
//! [`post_process`] composes them in a fixed order (pangu first, then
//! ZWSP). The passes touch disjoint character classes, so the order is
//! not externally observable; fixing it keeps the pipeline deterministic
//! and documentable.

use crate::font::is_cjk;

/// ZERO WIDTH SPACE, U+200B.
const ZWSP: char = '\u{200b}';

/// Insert a zero-width space into every interior blank line.
///
/// A blank line is an empty line between two newlines; N consecutive
/// blank lines receive N markers, one each, preserving total line count.
/// Leading/trailing emptiness is left alone.
///
/// # Examples
///
/// ```
/// use unimark::insert_zwsp;
///
/// assert_eq!(insert_zwsp("a\n\nb"), "a\n\u{200b}\nb");
/// assert_eq!(insert_zwsp("a\n\n\nb"), "a\n\u{200b}\n\u{200b}\nb");
/// assert_eq!(insert_zwsp("a\nb"), "a\nb");
/// ```
pub fn insert_zwsp(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        // A newline directly followed by another newline marks a blank line.
        if c == '\n' && chars.peek() == Some(&'\n') {
            result.push(ZWSP);
        }
    }

    result
}

/// `[A-Za-z0-9_]`, the class spaced away from CJK ideographs.
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Insert a single ASCII space at every CJK/word-character boundary, in
/// both directions. Idempotent: boundaries that already carry a space are
/// untouched.
///
/// # Examples
///
/// ```
/// use unimark::pangu_spacing;
///
/// assert_eq!(pangu_spacing("我用Mac寫文"), "我用 Mac 寫文");
/// assert_eq!(pangu_spacing("hello world"), "hello world");
/// ```
pub fn pangu_spacing(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if let Some(p) = previous
            && ((is_cjk(p) && is_word(c)) || (is_word(p) && is_cjk(c)))
        {
            result.push(' ');
        }
        result.push(c);
        previous = Some(c);
    }

    result
}

/// Full post-processing: pangu spacing (when enabled), then ZWSP
/// paragraph preservation.
pub fn post_process(text: &str, pangu_enabled: bool) -> String {
    if pangu_enabled {
        insert_zwsp(&pangu_spacing(text))
    } else {
        insert_zwsp(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zwsp_count_matches_blank_lines() {
        let text = "a\n\nb\n\n\nc";
        let out = insert_zwsp(text);
        assert_eq!(out.chars().filter(|&c| c == ZWSP).count(), 3);
    }

    #[test]
    fn test_zwsp_only_newlines() {
        assert_eq!(insert_zwsp("\n\n"), "\n\u{200b}\n");
    }

    #[test]
    fn test_zwsp_no_blank_lines_unchanged() {
        assert_eq!(insert_zwsp("a\nb\nc"), "a\nb\nc");
        assert_eq!(insert_zwsp(""), "");
    }

    #[test]
    fn test_pangu_both_directions() {
        assert_eq!(pangu_spacing("hello你好"), "hello 你好");
        assert_eq!(pangu_spacing("你好hello"), "你好 hello");
    }

    #[test]
    fn test_pangu_idempotent() {
        let once = pangu_spacing("我用Mac寫文");
        assert_eq!(pangu_spacing(&once), once);
    }

    #[test]
    fn test_pangu_digits_and_underscore() {
        assert_eq!(pangu_spacing("第3章"), "第 3 章");
        assert_eq!(pangu_spacing("中_test"), "中 _test");
    }

    #[test]
    fn test_pangu_extension_a_range() {
        assert_eq!(pangu_spacing("\u{3400}abc\u{4dbf}"), "\u{3400} abc \u{4dbf}");
    }

    #[test]
    fn test_post_process_order_fixed() {
        assert_eq!(post_process("我用Mac\n\n第2行", true), "我用 Mac\n\u{200b}\n第 2 行");
        assert_eq!(post_process("我用Mac\n\n第2行", false), "我用Mac\n\u{200b}\n第2行");
    }
}
