// SPDX-License-Identifier: GPL-3.0-only

//! Label resolution under the current modifier state.
//!
//! Resolution is a pure function of `(base label, modifier state)` so the
//! same table drives both the displayed key caps and the dispatched text:
//!
//! - Caps uppercases letters.
//! - Shift substitutes punctuation through the shift map, and uppercases
//!   letters that have no substitution.
//! - When both are active, a shift substitution wins; otherwise caps's
//!   uppercase still applies.
//!
//! Function keys never pass through here; their labels are fixed.

use crate::input::modifier::{Modifier, ModifierState};
use crate::layout::shifted_symbol;

/// Resolves a base label to the label currently displayed and dispatched.
///
/// `base` is a single-character label from the layout table. Multi-character
/// labels (function keys) are returned unchanged as a defensive measure;
/// callers are expected to filter function keys before resolution.
#[must_use]
pub fn resolved_label(base: &str, modifiers: &ModifierState) -> String {
    let mut chars = base.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return base.to_string();
    };

    let mut output = c;

    if modifiers.is_active(Modifier::CapsLock) && c.is_ascii_lowercase() {
        output = c.to_ascii_uppercase();
    }

    if modifiers.is_active(Modifier::Shift) {
        if let Some(symbol) = shifted_symbol(c) {
            output = symbol;
        } else if c.is_ascii_lowercase() {
            output = c.to_ascii_uppercase();
        }
    }

    output.to_string()
}

// ============================================================================
// Tests
// ============================================================================
