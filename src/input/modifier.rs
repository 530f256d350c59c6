// SPDX-License-Identifier: GPL-3.0-only

//! Modifier state management for the on-screen keyboard.
//!
//! Two modifier behaviors exist on this board:
//!
//! - **One-shot**: the modifier is cleared after the next resolved key
//!   dispatch (Shift).
//! - **Toggle**: the modifier stays active until toggled off (Caps).
//!
//! The state machine itself is policy-free: callers choose the behavior at
//! activation time, and the keyboard fixes Shift as one-shot and Caps as
//! toggle.

use std::collections::HashSet;

/// Modifier keys tracked by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// One-shot shift.
    Shift,
    /// Sticky caps lock.
    CapsLock,
}

/// Tracks which modifiers are active and which clear after the next dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierState {
    /// Set of currently active modifiers.
    active: HashSet<Modifier>,

    /// Subset of `active` that clears after the next resolved dispatch.
    one_shot: HashSet<Modifier>,
}

impl ModifierState {
    /// Creates a state with no active modifiers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
            one_shot: HashSet::new(),
        }
    }

    /// Activates a modifier.
    ///
    /// With `one_shot` set, the modifier is cleared by the next call to
    /// [`clear_one_shot`](Self::clear_one_shot); otherwise it stays active
    /// until explicitly deactivated or toggled off.
    pub fn activate(&mut self, modifier: Modifier, one_shot: bool) {
        self.active.insert(modifier);

        if one_shot {
            self.one_shot.insert(modifier);
        } else {
            self.one_shot.remove(&modifier);
        }
    }

    /// Deactivates a modifier, whatever its mode.
    pub fn deactivate(&mut self, modifier: Modifier) {
        self.active.remove(&modifier);
        self.one_shot.remove(&modifier);
    }

    /// Toggles a modifier.
    ///
    /// Returns `true` if the modifier is active after the toggle.
    pub fn toggle(&mut self, modifier: Modifier, one_shot: bool) -> bool {
        if self.active.contains(&modifier) {
            self.deactivate(modifier);
            false
        } else {
            self.activate(modifier, one_shot);
            true
        }
    }

    /// Returns `true` if the modifier is currently active.
    #[must_use]
    pub fn is_active(&self, modifier: Modifier) -> bool {
        self.active.contains(&modifier)
    }

    /// Returns `true` if the modifier is active in one-shot mode.
    #[must_use]
    pub fn is_one_shot(&self, modifier: Modifier) -> bool {
        self.one_shot.contains(&modifier)
    }

    /// Clears all one-shot modifiers.
    ///
    /// Called after a resolved key dispatch: a tapped Shift releases, while
    /// toggled Caps stays put.
    pub fn clear_one_shot(&mut self) {
        for modifier in self.one_shot.drain() {
            self.active.remove(&modifier);
        }
    }

    /// Clears everything, one-shot or not.
    pub fn clear_all(&mut self) {
        self.active.clear();
        self.one_shot.clear();
    }

    /// Returns `true` if any modifier is active.
    #[must_use]
    pub fn has_active_modifiers(&self) -> bool {
        !self.active.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Basic activation and deactivation.
    #[test]
    fn test_activate_deactivate() {
        let mut state = ModifierState::new();

        state.activate(Modifier::Shift, true);
        assert!(state.is_active(Modifier::Shift));

        state.deactivate(Modifier::Shift);
        assert!(!state.is_active(Modifier::Shift));
    }

    /// Toggle flips active state and reports the new state.
    #[test]
    fn test_toggle() {
        let mut state = ModifierState::new();

        assert!(state.toggle(Modifier::CapsLock, false));
        assert!(state.is_active(Modifier::CapsLock));

        assert!(!state.toggle(Modifier::CapsLock, false));
        assert!(!state.is_active(Modifier::CapsLock));
    }

    /// One-shot modifiers clear on clear_one_shot; toggled ones survive.
    #[test]
    fn test_clear_one_shot_spares_toggled_modifiers() {
        let mut state = ModifierState::new();

        state.activate(Modifier::Shift, true);
        state.activate(Modifier::CapsLock, false);

        state.clear_one_shot();

        assert!(!state.is_active(Modifier::Shift), "one-shot shift released");
        assert!(state.is_active(Modifier::CapsLock), "toggled caps sticks");
    }

    /// Re-activating in a different mode updates the one-shot set.
    #[test]
    fn test_mode_switch_on_reactivation() {
        let mut state = ModifierState::new();

        state.activate(Modifier::Shift, true);
        assert!(state.is_one_shot(Modifier::Shift));

        state.activate(Modifier::Shift, false);
        assert!(!state.is_one_shot(Modifier::Shift));

        state.clear_one_shot();
        assert!(state.is_active(Modifier::Shift), "no longer one-shot");
    }

    #[test]
    fn test_clear_all() {
        let mut state = ModifierState::new();

        state.activate(Modifier::Shift, true);
        state.activate(Modifier::CapsLock, false);
        assert!(state.has_active_modifiers());

        state.clear_all();
        assert!(!state.has_active_modifiers());
    }

    #[test]
    fn test_default() {
        let state = ModifierState::default();
        assert!(!state.has_active_modifiers());
    }
}
