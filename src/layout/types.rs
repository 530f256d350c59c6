// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for keyboard layout tables.
//!
//! A layout is a static table of rows of [`KeyDef`] descriptors. Each
//! descriptor carries the key's base label (which doubles as its stable
//! identifier for dispatch), whether it is a function key, and its width in
//! base units.

use std::fmt;

/// What pressing a key does.
///
/// Function keys map to a fixed action by label; every other key produces
/// its currently resolved label as a character sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Toggle the one-shot shift modifier.
    ToggleShift,
    /// Toggle the caps-lock modifier.
    ToggleCaps,
    /// Delete one unit to the left of the cursor.
    Backspace,
    /// Insert a newline.
    Enter,
    /// Insert a tab.
    Tab,
    /// Insert a literal space.
    Space,
    /// Dispatch the key's resolved label.
    Character,
}

/// A single key in the layout table.
///
/// The base label is the key's identity: it is what the delegated dispatch
/// handler receives, and what modifier resolution transforms into the
/// displayed/emitted label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDef {
    /// Base label shown on the key when no modifier is active.
    pub label: &'static str,

    /// Whether this is a function key (Backspace, Tab, Enter, Shift, Caps, Space).
    ///
    /// Function keys bypass label resolution and keep their base label.
    pub function_key: bool,

    /// Width as a multiple of the standard key size.
    pub width_units: f32,
}

impl KeyDef {
    /// Creates a standard character key of unit width.
    #[must_use]
    pub const fn character(label: &'static str) -> Self {
        Self {
            label,
            function_key: false,
            width_units: 1.0,
        }
    }

    /// Creates a function key with an explicit width.
    #[must_use]
    pub const fn function(label: &'static str, width_units: f32) -> Self {
        Self {
            label,
            function_key: true,
            width_units,
        }
    }

    /// Returns the action this key performs when pressed.
    #[must_use]
    pub fn action(&self) -> KeyAction {
        if !self.function_key {
            return KeyAction::Character;
        }

        match self.label {
            "Shift" => KeyAction::ToggleShift,
            "Caps" => KeyAction::ToggleCaps,
            "Backspace" => KeyAction::Backspace,
            "Enter" => KeyAction::Enter,
            "Tab" => KeyAction::Tab,
            "Space" => KeyAction::Space,
            // A function key with an unknown label still emits nothing on
            // its own; treat it as a character key so dispatch stays total.
            _ => KeyAction::Character,
        }
    }
}

impl fmt::Display for KeyDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.function_key {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "'{}'", self.label)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
