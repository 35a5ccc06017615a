//! Lookup-, combining-, and transform-based character tables.
//!
//! The circled, squared, and parenthesized alphabets are contiguous Unicode
//! runs and are computed arithmetically; small caps and the upside-down
//! glyphs are scattered across phonetic and letterlike blocks and need
//! explicit tables.

/// U+0336 COMBINING LONG STROKE OVERLAY
pub const COMBINING_STRIKETHROUGH: char = '\u{0336}';

/// U+0332 COMBINING LOW LINE
pub const COMBINING_UNDERLINE: char = '\u{0332}';

/// Circled letters and digits (Enclosed Alphanumerics block).
///
/// A-Z → U+24B6.., a-z → U+24D0.., 0 → U+24EA, 1-9 → U+2460..
pub fn circled(c: char) -> char {
    match c {
        'A'..='Z' => from_offset(0x24b6, c, 'A'),
        'a'..='z' => from_offset(0x24d0, c, 'a'),
        '0' => '\u{24ea}',
        '1'..='9' => from_offset(0x2460, c, '1'),
        _ => c,
    }
}

/// Negative squared capitals (U+1F170..). Lowercase is folded first; there
/// is no lowercase squared alphabet.
pub fn squared(c: char) -> char {
    match c.to_ascii_uppercase() {
        upper @ 'A'..='Z' => from_offset(0x1f170, upper, 'A'),
        _ => c,
    }
}

/// Parenthesized small letters (U+249C..) and digits 1-9 (U+2474..).
/// Uppercase is folded first; parenthesized `0` does not exist.
pub fn parenthesized(c: char) -> char {
    match c.to_ascii_lowercase() {
        lower @ 'a'..='z' => from_offset(0x249c, lower, 'a'),
        _ => match c {
            '1'..='9' => from_offset(0x2474, c, '1'),
            _ => c,
        },
    }
}

/// Small-cap letters from the IPA and Phonetic Extensions blocks.
/// `q` and `x` have no small-cap variant and pass through. Uppercase is
/// folded to lowercase before lookup.
pub fn small_caps(c: char) -> char {
    let lower = c.to_ascii_lowercase();
    match lower {
        'a' => '\u{1d00}',
        'b' => '\u{0299}',
        'c' => '\u{1d04}',
        'd' => '\u{1d05}',
        'e' => '\u{1d07}',
        'f' => '\u{a730}',
        'g' => '\u{0262}',
        'h' => '\u{029c}',
        'i' => '\u{026a}',
        'j' => '\u{1d0a}',
        'k' => '\u{1d0b}',
        'l' => '\u{029f}',
        'm' => '\u{1d0d}',
        'n' => '\u{0274}',
        'o' => '\u{1d0f}',
        'p' => '\u{1d18}',
        'r' => '\u{0280}',
        's' => '\u{a731}',
        't' => '\u{1d1b}',
        'u' => '\u{1d1c}',
        'v' => '\u{1d20}',
        'w' => '\u{1d21}',
        'y' => '\u{028f}',
        'z' => '\u{1d22}',
        _ => c,
    }
}

/// Fullwidth forms: space → IDEOGRAPHIC SPACE, printable ASCII shifts into
/// the Halfwidth and Fullwidth Forms block by +0xFEE0.
pub fn fullwidth(c: char) -> char {
    match c {
        ' ' => '\u{3000}',
        '\u{21}'..='\u{7e}' => {
            // Always a valid scalar: 0x21 + 0xFEE0 .. 0x7E + 0xFEE0
            char::from_u32(c as u32 + 0xfee0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Upside-down glyph substitution. Letters, digits, and mirrored
/// punctuation pairs; callers reverse the whole string afterwards.
pub fn upside_down(c: char) -> char {
    match c {
        'a' => '\u{0250}',
        'b' => 'q',
        'c' => '\u{0254}',
        'd' => 'p',
        'e' => '\u{01dd}',
        'f' => '\u{025f}',
        'g' => '\u{0183}',
        'h' => '\u{0265}',
        'i' => '\u{0131}',
        'j' => '\u{027e}',
        'k' => '\u{029e}',
        'l' => 'l',
        'm' => '\u{026f}',
        'n' => 'u',
        'o' => 'o',
        'p' => 'd',
        'q' => 'b',
        'r' => '\u{0279}',
        's' => 's',
        't' => '\u{0287}',
        'u' => 'n',
        'v' => '\u{028c}',
        'w' => '\u{028d}',
        'x' => 'x',
        'y' => '\u{028e}',
        'z' => 'z',
        'A' => '\u{2200}',
        'B' => '\u{15fa}',
        'C' => '\u{0186}',
        'D' => '\u{15e1}',
        'E' => '\u{018e}',
        'F' => '\u{2132}',
        'G' => '\u{2141}',
        'H' => 'H',
        'I' => 'I',
        'J' => '\u{017f}',
        'K' => '\u{22ca}',
        'L' => '\u{02e5}',
        'M' => 'W',
        'N' => 'N',
        'O' => 'O',
        'P' => '\u{0500}',
        'Q' => '\u{038c}',
        'R' => '\u{a780}',
        'S' => 'S',
        'T' => '\u{22a5}',
        'U' => '\u{2229}',
        'V' => '\u{039b}',
        'W' => 'M',
        'X' => 'X',
        'Y' => '\u{2144}',
        'Z' => 'Z',
        '0' => '0',
        '1' => '\u{0196}',
        '2' => '\u{1105}',
        '3' => '\u{0190}',
        '4' => '\u{3123}',
        '5' => '\u{03db}',
        '6' => '9',
        '7' => '\u{3125}',
        '8' => '8',
        '9' => '6',
        '.' => '\u{02d9}',
        ',' => '\u{02bb}',
        '?' => '\u{00bf}',
        '!' => '\u{00a1}',
        '\'' => ',',
        '"' => '\u{201e}',
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '&' => '\u{214b}',
        '_' => '\u{203e}',
        _ => c,
    }
}

fn from_offset(start: u32, c: char, base: char) -> char {
    char::from_u32(start + (c as u32 - base as u32)).unwrap_or(c)
}
