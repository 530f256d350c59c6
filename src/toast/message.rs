// SPDX-License-Identifier: GPL-3.0-only

//! Message types emitted by the toast stack.

use crate::toast::state::ToastId;

/// Messages emitted by the rendered toast stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastMessage {
    /// A toast was clicked; starts its exit animation.
    Pressed(ToastId),

    /// Periodic timer tick for phase transitions and auto-dismiss.
    ///
    /// Hosts emit this from a subscription at
    /// [`TOAST_TIMER_INTERVAL_MS`](crate::app_settings::TOAST_TIMER_INTERVAL_MS)
    /// while any toast is active.
    Tick,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_variants_match() {
        let pressed = ToastMessage::Pressed(ToastId::for_tests(7));
        assert!(matches!(pressed, ToastMessage::Pressed(_)));
        assert_eq!(ToastMessage::Tick, ToastMessage::Tick);
        assert_ne!(pressed, ToastMessage::Tick);
    }
}
