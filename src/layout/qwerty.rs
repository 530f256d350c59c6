// SPDX-License-Identifier: GPL-3.0-only

//! The built-in US QWERTY layout table and shift substitution map.
//!
//! Five physical rows. Widths are multiples of the standard key size; the
//! wide function keys (Backspace, Tab, Caps, Enter, Shift, Space) carry
//! explicit widths so the rows line up the way a hardware board does.

use crate::layout::types::KeyDef;

const ROW_1: [KeyDef; 14] = [
    KeyDef::character("`"),
    KeyDef::character("1"),
    KeyDef::character("2"),
    KeyDef::character("3"),
    KeyDef::character("4"),
    KeyDef::character("5"),
    KeyDef::character("6"),
    KeyDef::character("7"),
    KeyDef::character("8"),
    KeyDef::character("9"),
    KeyDef::character("0"),
    KeyDef::character("-"),
    KeyDef::character("="),
    KeyDef::function("Backspace", 1.8),
];

const ROW_2: [KeyDef; 14] = [
    KeyDef::function("Tab", 1.4),
    KeyDef::character("q"),
    KeyDef::character("w"),
    KeyDef::character("e"),
    KeyDef::character("r"),
    KeyDef::character("t"),
    KeyDef::character("y"),
    KeyDef::character("u"),
    KeyDef::character("i"),
    KeyDef::character("o"),
    KeyDef::character("p"),
    KeyDef::character("["),
    KeyDef::character("]"),
    KeyDef::character("\\"),
];

const ROW_3: [KeyDef; 13] = [
    KeyDef::function("Caps", 2.0),
    KeyDef::character("a"),
    KeyDef::character("s"),
    KeyDef::character("d"),
    KeyDef::character("f"),
    KeyDef::character("g"),
    KeyDef::character("h"),
    KeyDef::character("j"),
    KeyDef::character("k"),
    KeyDef::character("l"),
    KeyDef::character(";"),
    KeyDef::character("'"),
    KeyDef::function("Enter", 1.6),
];

const ROW_4: [KeyDef; 11] = [
    KeyDef::function("Shift", 2.6),
    KeyDef::character("z"),
    KeyDef::character("x"),
    KeyDef::character("c"),
    KeyDef::character("v"),
    KeyDef::character("b"),
    KeyDef::character("n"),
    KeyDef::character("m"),
    KeyDef::character(","),
    KeyDef::character("."),
    KeyDef::character("/"),
];

const ROW_5: [KeyDef; 1] = [KeyDef::function("Space", 12.0)];

/// The US QWERTY layout, top row first.
pub const LAYOUT: [&[KeyDef]; 5] = [&ROW_1, &ROW_2, &ROW_3, &ROW_4, &ROW_5];

/// Shift substitutions for the punctuation keys.
///
/// Keys absent from this table uppercase under shift when they are letters
/// and are unaffected otherwise.
pub const SHIFT_MAP: [(char, char); 21] = [
    ('`', '~'),
    ('1', '!'),
    ('2', '@'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '^'),
    ('7', '&'),
    ('8', '*'),
    ('9', '('),
    ('0', ')'),
    ('-', '_'),
    ('=', '+'),
    ('[', '{'),
    (']', '}'),
    ('\\', '|'),
    (';', ':'),
    ('\'', '"'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
];

/// Looks up the shifted symbol for a base character.
///
/// Returns `None` when the character has no entry in [`SHIFT_MAP`].
#[must_use]
pub fn shifted_symbol(base: char) -> Option<char> {
    SHIFT_MAP
        .iter()
        .find(|(from, _)| *from == base)
        .map(|(_, to)| *to)
}

/// Returns the width of the widest row in base units.
///
/// Used by hosts that want to size an enclosing surface before the panel
/// itself resolves pixel dimensions.
#[must_use]
pub fn max_row_width_units() -> f32 {
    LAYOUT
        .iter()
        .map(|row| row.iter().map(|key| key.width_units).sum::<f32>())
        .fold(0.0_f32, f32::max)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_five_rows() {
        assert_eq!(LAYOUT.len(), 5);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for row in LAYOUT {
            for key in *row {
                assert!(
                    seen.insert(key.label),
                    "duplicate key label '{}' in layout",
                    key.label
                );
            }
        }
    }

    #[test]
    fn test_function_keys_flagged() {
        for row in LAYOUT {
            for key in *row {
                let expected = matches!(
                    key.label,
                    "Backspace" | "Tab" | "Caps" | "Enter" | "Shift" | "Space"
                );
                assert_eq!(
                    key.function_key, expected,
                    "function flag for '{}'",
                    key.label
                );
            }
        }
    }

    #[test]
    fn test_shifted_symbol_lookup() {
        assert_eq!(shifted_symbol('1'), Some('!'));
        assert_eq!(shifted_symbol('`'), Some('~'));
        assert_eq!(shifted_symbol('/'), Some('?'));
        assert_eq!(shifted_symbol('a'), None);
        assert_eq!(shifted_symbol(' '), None);
    }

    #[test]
    fn test_every_punctuation_key_has_shift_mapping() {
        // Every non-letter character key on the board has a shift symbol.
        for row in LAYOUT {
            for key in row.iter().filter(|k| !k.function_key) {
                let c = key.label.chars().next().unwrap();
                if !c.is_ascii_lowercase() {
                    assert!(
                        shifted_symbol(c).is_some(),
                        "punctuation key '{}' missing from SHIFT_MAP",
                        key.label
                    );
                }
            }
        }
    }

    #[test]
    fn test_max_row_width_units() {
        // Row 1: 13 unit keys + 1.8 Backspace.
        let widest = max_row_width_units();
        assert!(widest >= 14.8 - f32::EPSILON);
    }
}
