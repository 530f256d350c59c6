// SPDX-License-Identifier: GPL-3.0-only

//! The editor-handle capability consumed by the keyboard.
//!
//! The keyboard never touches a text buffer itself; it drives whatever the
//! host attached through [`VirtualKeyboard::open`](crate::keyboard::VirtualKeyboard::open).
//! A handle needs exactly three operations: insert literal text at the
//! cursor, delete one unit to the left, and request focus. Any host editor
//! exposing that surface is compatible.
//!
//! # Example
//!
//! ```rust,ignore
//! use softpad::editor::{EditCommand, EditorHandle};
//!
//! struct BufferEditor {
//!     buffer: String,
//! }
//!
//! impl EditorHandle for BufferEditor {
//!     fn insert_text(&mut self, text: &str) {
//!         self.buffer.push_str(text);
//!     }
//!
//!     fn delete_left(&mut self) {
//!         self.buffer.pop();
//!     }
//!
//!     fn focus(&mut self) {}
//! }
//! ```

/// An edit operation the keyboard asks the host editor to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert literal text at the cursor, replacing no selection implicitly.
    Insert(String),
    /// Delete one unit to the left of the cursor.
    DeleteLeft,
    /// Move input focus to the editor.
    Focus,
}

/// Capability trait for a host text editor.
///
/// Implementations are free to be direct (mutating a buffer in place) or
/// indirect (forwarding [`EditCommand`]s over a channel to an editor that
/// lives elsewhere in the host application).
pub trait EditorHandle {
    /// Inserts literal text at the cursor.
    fn insert_text(&mut self, text: &str);

    /// Deletes one unit to the left of the cursor.
    fn delete_left(&mut self);

    /// Requests input focus for the editor.
    fn focus(&mut self);

    /// Applies an [`EditCommand`], dispatching to the three primitives.
    fn apply(&mut self, command: &EditCommand) {
        match command {
            EditCommand::Insert(text) => self.insert_text(text),
            EditCommand::DeleteLeft => self.delete_left(),
            EditCommand::Focus => self.focus(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
