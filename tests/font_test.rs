//! Font engine tests: one per style family, plus property checks.

use std::str::FromStr;

use proptest::prelude::*;

use unimark::{FontStyle, convert_to_unicode, convert_to_unicode_rich, is_cjk};

// ============================================================================
// Offset-based family
// ============================================================================

#[test]
fn test_sans_serif_bold_styles_letters() {
    let out = convert_to_unicode("bold English", FontStyle::SansSerifBold);
    assert!(out.contains('\u{1d5ef}')); // styled 'b'
    assert!(!out.contains("bold English"));
}

#[test]
fn test_bold_full_alphabet() {
    let out = convert_to_unicode("AZaz09", FontStyle::Bold);
    assert_eq!(out, "\u{1d400}\u{1d419}\u{1d41a}\u{1d433}\u{1d7ce}\u{1d7d7}");
}

#[test]
fn test_monospace_digits() {
    assert_eq!(convert_to_unicode("42", FontStyle::Monospace), "\u{1d7fa}\u{1d7f8}");
}

#[test]
fn test_styles_without_digit_blocks_pass_digits_through() {
    for style in [
        FontStyle::Italic,
        FontStyle::BoldItalic,
        FontStyle::BoldScript,
        FontStyle::Script,
        FontStyle::Fraktur,
        FontStyle::SansSerifItalic,
        FontStyle::SansSerifBoldItalic,
    ] {
        assert_eq!(convert_to_unicode("123", style), "123", "style {style}");
    }
}

#[test]
fn test_letterlike_exceptions() {
    assert_eq!(convert_to_unicode("h", FontStyle::Italic), "\u{210e}");
    assert_eq!(convert_to_unicode("h", FontStyle::SansSerifItalic), "\u{210e}");
    assert_eq!(
        convert_to_unicode("CHNPQRZ", FontStyle::DoubleStruck),
        "\u{2102}\u{210d}\u{2115}\u{2119}\u{211a}\u{211d}\u{2124}"
    );
    assert_eq!(
        convert_to_unicode("CHIRZ", FontStyle::Fraktur),
        "\u{212d}\u{210c}\u{2111}\u{211c}\u{2128}"
    );
    assert_eq!(
        convert_to_unicode("ego", FontStyle::Script),
        "\u{212f}\u{210a}\u{2134}"
    );
}

// ============================================================================
// Lookup-based family
// ============================================================================

#[test]
fn test_circled() {
    assert_eq!(convert_to_unicode("Ab1", FontStyle::Circled), "\u{24b6}\u{24d1}\u{2460}");
    assert_eq!(convert_to_unicode("0", FontStyle::Circled), "\u{24ea}");
}

#[test]
fn test_squared_folds_lowercase() {
    assert_eq!(convert_to_unicode("Hi", FontStyle::Squared), "\u{1f177}\u{1f178}");
}

#[test]
fn test_parenthesized_folds_uppercase() {
    assert_eq!(convert_to_unicode("Ab9", FontStyle::Parenthesized), "\u{249c}\u{249d}\u{247c}");
    // no parenthesized zero
    assert_eq!(convert_to_unicode("0", FontStyle::Parenthesized), "0");
}

#[test]
fn test_small_caps_gaps_pass_through() {
    assert_eq!(convert_to_unicode("quix", FontStyle::SmallCaps), "q\u{1d1c}\u{026a}x");
}

// ============================================================================
// Combining-based family
// ============================================================================

#[test]
fn test_strikethrough_one_mark_per_non_space() {
    let text = "ab cd";
    let out = convert_to_unicode(text, FontStyle::Strikethrough);
    assert_eq!(out, "a\u{336}b\u{336} c\u{336}d\u{336}");
    let marks = out.chars().filter(|&c| c == '\u{336}').count();
    let non_spaces = text.chars().filter(|&c| c != ' ').count();
    assert_eq!(marks, non_spaces);
}

#[test]
fn test_underline_preserves_space_runs() {
    let out = convert_to_unicode("a  b", FontStyle::Underline);
    assert_eq!(out, "a\u{332}  b\u{332}");
}

// ============================================================================
// Transform-based family
// ============================================================================

#[test]
fn test_fullwidth_shifts_printable_ascii() {
    assert_eq!(convert_to_unicode("Go!", FontStyle::Fullwidth), "\u{ff27}\u{ff4f}\u{ff01}");
    assert_eq!(convert_to_unicode(" ", FontStyle::Fullwidth), "\u{3000}");
}

#[test]
fn test_upside_down_flips_and_reverses() {
    assert_eq!(convert_to_unicode("hello", FontStyle::UpsideDown), "oll\u{1dd}\u{265}");
    // mirrored punctuation swaps partners, so parens still face inward
    // after the reversal
    assert_eq!(convert_to_unicode("(a)", FontStyle::UpsideDown), "(\u{250})");
}

#[test]
fn test_upside_down_rich_reverses_as_a_whole() {
    let rich = convert_to_unicode_rich("ab", FontStyle::UpsideDown);
    assert_eq!(rich[0].char, "q");
    assert_eq!(rich[1].char, "\u{250}");
}

// ============================================================================
// Style tags
// ============================================================================

#[test]
fn test_nineteen_distinct_styles() {
    assert_eq!(FontStyle::ALL.len(), 19);
}

#[test]
fn test_unknown_tag_is_rejected() {
    assert!(FontStyle::from_str("wingdings").is_err());
}

// ============================================================================
// Properties
// ============================================================================

fn any_style() -> impl Strategy<Value = FontStyle> {
    prop::sample::select(FontStyle::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_conversion_is_deterministic(text in ".*", style in any_style()) {
        prop_assert_eq!(
            convert_to_unicode(&text, style),
            convert_to_unicode(&text, style)
        );
    }

    #[test]
    fn prop_rich_concatenates_to_plain(text in ".*", style in any_style()) {
        let plain = convert_to_unicode(&text, style);
        let rich: String = convert_to_unicode_rich(&text, style)
            .into_iter()
            .map(|rc| rc.char)
            .collect();
        prop_assert_eq!(plain, rich);
    }

    #[test]
    fn prop_cjk_survives_offset_and_lookup_styles(
        text in prop::collection::vec(prop::char::range('\u{4e00}', '\u{9fff}'), 0..20),
        style in any_style(),
    ) {
        prop_assume!(!matches!(
            style,
            FontStyle::Strikethrough | FontStyle::Underline
        ));
        let text: String = text.into_iter().collect();
        let out = convert_to_unicode(&text, style);
        for c in text.chars() {
            prop_assert!(is_cjk(c));
            prop_assert!(out.contains(c));
        }
    }

    #[test]
    fn prop_combining_adds_one_scalar_per_non_space(text in ".*") {
        let out = convert_to_unicode(&text, FontStyle::Strikethrough);
        let non_spaces = text.chars().filter(|&c| c != ' ').count();
        prop_assert_eq!(
            out.chars().count(),
            text.chars().count() + non_spaces
        );
    }

    #[test]
    fn prop_rich_length_matches_scalar_count(text in ".*", style in any_style()) {
        prop_assert_eq!(
            convert_to_unicode_rich(&text, style).len(),
            text.chars().count()
        );
    }
}
