// SPDX-License-Identifier: GPL-3.0-only

//! Input handling for the on-screen keyboard.
//!
//! This module tracks modifier state and resolves key labels under it:
//!
//! - **Modifier state**: Shift (one-shot) and Caps (toggle), tracked by
//!   [`ModifierState`].
//! - **Label resolution**: [`resolved_label`], a pure function mapping a
//!   base label and the modifier state to the displayed/dispatched label.
//!
//! # Example
//!
//! ```rust,ignore
//! use softpad::input::{Modifier, ModifierState, resolved_label};
//!
//! let mut state = ModifierState::new();
//! state.activate(Modifier::Shift, true);
//!
//! assert_eq!(resolved_label("1", &state), "!");
//!
//! // After a resolved dispatch, one-shot shift releases.
//! state.clear_one_shot();
//! assert_eq!(resolved_label("1", &state), "1");
//! ```

pub mod modifier;
pub mod resolve;

pub use modifier::{Modifier, ModifierState};
pub use resolve::resolved_label;

// ============================================================================
// Module Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// One-shot shift affects exactly one resolution pass.
    #[test]
    fn test_shift_is_one_shot_across_resolution() {
        let mut state = ModifierState::new();
        state.activate(Modifier::Shift, true);

        assert_eq!(resolved_label("9", &state), "(");

        state.clear_one_shot();

        assert_eq!(resolved_label("9", &state), "9");
        assert!(!state.is_active(Modifier::Shift));
    }

    /// Caps survives any number of clear_one_shot calls.
    #[test]
    fn test_caps_survives_dispatch() {
        let mut state = ModifierState::new();
        state.activate(Modifier::CapsLock, false);

        for _ in 0..3 {
            assert_eq!(resolved_label("k", &state), "K");
            state.clear_one_shot();
        }

        assert!(state.is_active(Modifier::CapsLock));
    }

    /// The full shift map round-trips through resolution.
    #[test]
    fn test_shift_map_through_resolution() {
        let mut state = ModifierState::new();
        state.activate(Modifier::Shift, false);

        for (base, shifted) in crate::layout::SHIFT_MAP {
            assert_eq!(
                resolved_label(&base.to_string(), &state),
                shifted.to_string(),
                "shift mapping for '{base}'"
            );
        }
    }
}
