//! Offset-based font configurations.
//!
//! Each config maps ASCII letters (and optionally digits) into a Unicode
//! Mathematical Alphanumeric Symbols block by fixed code-point offset.
//! Exception entries cover the handful of letters that Unicode placed in
//! the Letterlike Symbols block long before the math alphabets existed
//! (e.g. ℎ PLANCK CONSTANT instead of a 𝑕 in the italic block).

/// Configuration for one offset-based font style.
///
/// `uppercase_start` is the code point of the styled `A`, `lowercase_start`
/// the styled `a`, and `digit_start` (when the target block has digits) the
/// styled `0`. `exceptions` always win over offset arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct FontConfig {
    pub uppercase_start: u32,
    pub lowercase_start: u32,
    pub digit_start: Option<u32>,
    pub exceptions: &'static [(char, u32)],
}

pub const BOLD: FontConfig = FontConfig {
    uppercase_start: 0x1d400,
    lowercase_start: 0x1d41a,
    digit_start: Some(0x1d7ce),
    exceptions: &[],
};

pub const ITALIC: FontConfig = FontConfig {
    uppercase_start: 0x1d434,
    lowercase_start: 0x1d44e,
    digit_start: None,
    exceptions: &[('h', 0x210e)],
};

pub const BOLD_ITALIC: FontConfig = FontConfig {
    uppercase_start: 0x1d468,
    lowercase_start: 0x1d482,
    digit_start: None,
    exceptions: &[],
};

pub const BOLD_SCRIPT: FontConfig = FontConfig {
    uppercase_start: 0x1d4d0,
    lowercase_start: 0x1d4ea,
    digit_start: None,
    exceptions: &[],
};

pub const SCRIPT: FontConfig = FontConfig {
    uppercase_start: 0x1d49c,
    lowercase_start: 0x1d4b6,
    digit_start: None,
    exceptions: &[
        ('B', 0x212c),
        ('E', 0x2130),
        ('F', 0x2131),
        ('G', 0x1d4a2),
        ('H', 0x210b),
        ('I', 0x2110),
        ('L', 0x2112),
        ('M', 0x2133),
        ('R', 0x211b),
        ('e', 0x212f),
        ('g', 0x210a),
        ('o', 0x2134),
    ],
};

pub const FRAKTUR: FontConfig = FontConfig {
    uppercase_start: 0x1d504,
    lowercase_start: 0x1d51e,
    digit_start: None,
    exceptions: &[
        ('C', 0x212d),
        ('H', 0x210c),
        ('I', 0x2111),
        ('R', 0x211c),
        ('Z', 0x2128),
    ],
};

pub const DOUBLE_STRUCK: FontConfig = FontConfig {
    uppercase_start: 0x1d538,
    lowercase_start: 0x1d552,
    digit_start: Some(0x1d7d8),
    exceptions: &[
        ('C', 0x2102),
        ('H', 0x210d),
        ('N', 0x2115),
        ('P', 0x2119),
        ('Q', 0x211a),
        ('R', 0x211d),
        ('Z', 0x2124),
    ],
};

pub const MONOSPACE: FontConfig = FontConfig {
    uppercase_start: 0x1d670,
    lowercase_start: 0x1d68a,
    digit_start: Some(0x1d7f6),
    exceptions: &[],
};

pub const SANS_SERIF_BOLD: FontConfig = FontConfig {
    uppercase_start: 0x1d5d4,
    lowercase_start: 0x1d5ee,
    digit_start: Some(0x1d7ec),
    exceptions: &[],
};

pub const SANS_SERIF_ITALIC: FontConfig = FontConfig {
    uppercase_start: 0x1d608,
    lowercase_start: 0x1d622,
    digit_start: None,
    exceptions: &[('h', 0x210e)],
};

pub const SANS_SERIF_BOLD_ITALIC: FontConfig = FontConfig {
    uppercase_start: 0x1d63c,
    lowercase_start: 0x1d656,
    digit_start: None,
    exceptions: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Exception entries must never shadow a code point the offset
    /// arithmetic would produce for a *different* source character.
    #[test]
    fn test_exceptions_do_not_collide_with_offset_ranges() {
        let configs = [
            BOLD,
            ITALIC,
            BOLD_ITALIC,
            BOLD_SCRIPT,
            SCRIPT,
            FRAKTUR,
            DOUBLE_STRUCK,
            MONOSPACE,
            SANS_SERIF_BOLD,
            SANS_SERIF_ITALIC,
            SANS_SERIF_BOLD_ITALIC,
        ];
        for config in configs {
            for &(source, target) in config.exceptions {
                // The slot the offset arithmetic assigns to the source
                // itself is fair game: Unicode placed script G inside the
                // math block, so SCRIPT's ('G', 0x1D4A2) lands exactly on
                // uppercase_start + 6.
                let own_slot = match source {
                    'A'..='Z' => Some(config.uppercase_start + (source as u32 - 'A' as u32)),
                    'a'..='z' => Some(config.lowercase_start + (source as u32 - 'a' as u32)),
                    '0'..='9' => config.digit_start.map(|d| d + (source as u32 - '0' as u32)),
                    _ => None,
                };
                if own_slot == Some(target) {
                    continue;
                }
                let in_upper =
                    (config.uppercase_start..=config.uppercase_start + 25).contains(&target);
                let in_lower =
                    (config.lowercase_start..=config.lowercase_start + 25).contains(&target);
                let in_digit = config
                    .digit_start
                    .is_some_and(|d| (d..=d + 9).contains(&target));
                assert!(
                    !in_upper && !in_lower && !in_digit,
                    "exception {source:?} -> U+{target:04X} shadows another character's slot"
                );
            }
        }
    }

    #[test]
    fn test_script_g_exception_matches_its_own_offset_slot() {
        let target = SCRIPT
            .exceptions
            .iter()
            .find(|&&(source, _)| source == 'G')
            .map(|&(_, target)| target)
            .unwrap();
        assert_eq!(target, SCRIPT.uppercase_start + ('G' as u32 - 'A' as u32));
    }

    #[test]
    fn test_all_exception_targets_are_valid_scalars() {
        for &(_, target) in SCRIPT
            .exceptions
            .iter()
            .chain(FRAKTUR.exceptions)
            .chain(DOUBLE_STRUCK.exceptions)
            .chain(ITALIC.exceptions)
            .chain(SANS_SERIF_ITALIC.exceptions)
        {
            assert!(char::from_u32(target).is_some());
        }
    }
}
