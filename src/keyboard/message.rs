// SPDX-License-Identifier: GPL-3.0-only

//! Message types emitted by the keyboard panel.
//!
//! All key interaction funnels through [`KeyboardMessage::KeyPressed`] with
//! the key's stable identifier (its base label); the panel never allocates
//! per-key closures. Drag messages follow the global-cursor pattern: the
//! header emits `DragStart`, while the host forwards cursor movement and
//! button release from its event subscription.

use cosmic::iced::Point;

/// Messages emitted by the keyboard panel and its chrome.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyboardMessage {
    /// A key was pressed. Contains the key's base label identifier.
    KeyPressed(String),

    /// The close button was pressed; hides the panel without dropping state.
    Close,

    /// Multiply the panel scale by the zoom factor.
    ZoomIn,

    /// Divide the panel scale by the zoom factor.
    ZoomOut,

    /// The header drag handle was pressed.
    DragStart,

    /// The cursor moved. Forwarded by the host from its event subscription;
    /// repositions the panel while a drag is active.
    CursorMoved(Point),

    /// The primary button was released, ending any active drag.
    DragEnd,
}

// ============================================================================
// Tests
// ============================================================================
