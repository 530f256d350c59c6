// SPDX-License-Identifier: GPL-3.0-only

//! Softpad - on-screen keyboard and toast widgets for COSMIC editor apps
//!
//! This crate provides two independent, embeddable widgets for
//! libcosmic/iced applications that host a text editor:
//!
//! 1. **Virtual keyboard** (`keyboard`): a floating QWERTY panel that
//!    forwards resolved keystrokes to the host editor through the
//!    [`editor::EditorHandle`] capability. Shift is one-shot, Caps is
//!    sticky, and the panel offers drag, zoom, and close chrome.
//!
//! 2. **Toast notifier** (`toast`): an edge-anchored stack of
//!    auto-dismissing message panels with per-toast deadlines and
//!    click-to-dismiss.
//!
//! Both widgets are explicit instances owned by the host application model;
//! nothing in this crate is a global. The `softpad-demo` binary shows the
//! full wiring around a scratch buffer.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants (geometry, zoom, timings)
//! - `editor`: The `EditorHandle` capability consumed by the keyboard
//! - `i18n`: Localization support using fluent translations
//! - `input`: Modifier state and label resolution
//! - `keyboard`: Keyboard panel state, messages, and rendering
//! - `layout`: Key descriptors and the built-in US QWERTY table
//! - `theme`: COSMIC theme color helpers shared by both widgets
//! - `toast`: Toast stack state, messages, and rendering

pub mod app_settings;
pub mod editor;
pub mod i18n;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod theme;
pub mod toast;

// Re-export the fl! macro for localization
pub use crate::i18n::LANGUAGE_LOADER;

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use crate::editor::{EditCommand, EditorHandle};
    use crate::keyboard::{KeyboardMessage, VirtualKeyboard};
    use crate::toast::{Category, ToastMessage, ToastOptions, Toaster};
    use futures::channel::mpsc;
    use futures::SinkExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Editor handle that forwards commands over a channel, the shape a
    /// host uses when the editor lives elsewhere in the application.
    struct ChannelEditor {
        tx: mpsc::Sender<EditCommand>,
    }

    impl EditorHandle for ChannelEditor {
        fn insert_text(&mut self, text: &str) {
            let _ = self.tx.try_send(EditCommand::Insert(text.to_string()));
        }

        fn delete_left(&mut self) {
            let _ = self.tx.try_send(EditCommand::DeleteLeft);
        }

        fn focus(&mut self) {
            let _ = self.tx.try_send(EditCommand::Focus);
        }
    }

    /// Editor handle editing a shared in-memory buffer directly.
    struct BufferEditor {
        buffer: Rc<RefCell<String>>,
    }

    impl EditorHandle for BufferEditor {
        fn insert_text(&mut self, text: &str) {
            self.buffer.borrow_mut().push_str(text);
        }

        fn delete_left(&mut self) {
            self.buffer.borrow_mut().pop();
        }

        fn focus(&mut self) {}
    }

    /// Integration Test 1: Keyboard dispatch through a channel-backed editor
    ///
    /// Verifies the full path from key press through the delegated handler
    /// to an editor handle that forwards commands over a channel.
    #[tokio::test]
    async fn test_keyboard_channel_editor_flow() {
        let (tx, mut rx) = mpsc::channel::<EditCommand>(16);

        let mut keyboard = VirtualKeyboard::new();
        keyboard.open(Box::new(ChannelEditor { tx: tx.clone() }));

        keyboard.handle_key("Shift");
        keyboard.handle_key("h");
        keyboard.handle_key("Backspace");

        // Close the sending side so the stream ends.
        let mut tx = tx;
        tx.close().await.unwrap();
        drop(keyboard);

        use futures::StreamExt;
        let mut received = Vec::new();
        while let Some(cmd) = rx.next().await {
            received.push(cmd);
        }

        assert_eq!(
            received,
            vec![
                EditCommand::Insert("H".to_string()),
                EditCommand::Focus,
                EditCommand::DeleteLeft,
            ],
            "shifted insert, focus request, then delete should flow through"
        );
    }

    /// Integration Test 2: A full typing session against a buffer editor
    ///
    /// Exercises shift one-shot, caps stickiness, the shift map, and the
    /// control keys in one session.
    #[test]
    fn test_full_typing_session() {
        let buffer = Rc::new(RefCell::new(String::new()));
        let mut keyboard = VirtualKeyboard::new();
        keyboard.open(Box::new(BufferEditor {
            buffer: Rc::clone(&buffer),
        }));

        // "Hi!" then newline, then caps-locked "OK", then a stray key
        // deleted again.
        for label in ["Shift", "h", "i", "Shift", "1", "Enter"] {
            keyboard.handle_key(label);
        }
        keyboard.handle_key("Caps");
        keyboard.handle_key("o");
        keyboard.handle_key("k");
        keyboard.handle_key("Caps");
        keyboard.handle_key("q");
        keyboard.handle_key("Backspace");

        assert_eq!(*buffer.borrow(), "Hi!\nOK");
    }

    /// Integration Test 3: Rebinding editors mid-session
    ///
    /// The keyboard follows the most recent `open`, and the panel model is
    /// shared across both bindings.
    #[test]
    fn test_editor_rebinding_session() {
        let first = Rc::new(RefCell::new(String::new()));
        let second = Rc::new(RefCell::new(String::new()));

        let mut keyboard = VirtualKeyboard::new();

        keyboard.open(Box::new(BufferEditor {
            buffer: Rc::clone(&first),
        }));
        keyboard.handle_key("a");

        keyboard.open(Box::new(BufferEditor {
            buffer: Rc::clone(&second),
        }));
        keyboard.handle_key("b");

        assert_eq!(*first.borrow(), "a");
        assert_eq!(*second.borrow(), "b");
    }

    /// Integration Test 4: Toast lifecycle end to end
    ///
    /// Queues toasts from both convenience and plain entry points, clicks
    /// one away, and drives the rest through their deadlines until the
    /// stack tears down.
    #[test]
    fn test_toast_lifecycle_end_to_end() {
        let mut toaster = Toaster::new();

        let kept = toaster.notify("saved", ToastOptions::default());
        toaster.error("compile failed", ToastOptions::default().with_duration_ms(0));
        assert_eq!(toaster.active_count(), 2);

        // Click the sticky error away via the message path.
        let error_id = toaster
            .stack()
            .unwrap()
            .entries()
            .iter()
            .find(|entry| entry.category() == Category::Error)
            .unwrap()
            .id();
        toaster.update(ToastMessage::Pressed(error_id));

        // Dismiss the other one explicitly; both race nothing.
        toaster.dismiss(&kept);
        toaster.dismiss(&kept);

        // Drive ticks until everything has animated out.
        for _ in 0..100 {
            toaster.update(ToastMessage::Tick);
            if !toaster.is_active() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        assert!(!toaster.is_active(), "stack torn down after all removals");

        // The next notify rebuilds a fresh stack.
        toaster.info("back again", ToastOptions::default());
        assert_eq!(toaster.active_count(), 1);
    }

    /// Integration Test 5: The two widgets do not interact
    ///
    /// Keyboard activity never touches toast state and vice versa.
    #[test]
    fn test_widgets_are_independent() {
        let buffer = Rc::new(RefCell::new(String::new()));
        let mut keyboard = VirtualKeyboard::new();
        let mut toaster = Toaster::new();

        keyboard.open(Box::new(BufferEditor {
            buffer: Rc::clone(&buffer),
        }));

        toaster.warning("low disk space", ToastOptions::default());
        keyboard.handle_key("Caps");
        keyboard.handle_key("x");
        keyboard.update(KeyboardMessage::Close);

        assert_eq!(toaster.active_count(), 1);
        assert_eq!(*buffer.borrow(), "X");
        assert!(keyboard.caps_active());
    }
}
