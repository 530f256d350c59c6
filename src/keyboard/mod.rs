// SPDX-License-Identifier: GPL-3.0-only

//! The on-screen keyboard widget.
//!
//! The keyboard is an explicit instance owned by the host application: no
//! module-level singletons. A host embeds it in three steps:
//!
//! 1. Keep a [`VirtualKeyboard`] value in the application model and call
//!    [`VirtualKeyboard::open`] with an editor handle to show it.
//! 2. Render [`render_positioned`] (or [`render_panel`]) in `view`, mapping
//!    [`KeyboardMessage`] into the host message type.
//! 3. Forward host-level mouse events (`CursorMoved`, left-button release)
//!    as [`KeyboardMessage::CursorMoved`] / [`KeyboardMessage::DragEnd`] so
//!    header dragging works, and route every panel message to
//!    [`VirtualKeyboard::update`].
//!
//! # Example
//!
//! ```rust,ignore
//! use softpad::keyboard::{render_positioned, KeyboardMessage, VirtualKeyboard};
//!
//! struct App {
//!     keyboard: VirtualKeyboard,
//! }
//!
//! // In update():
//! //   Message::Keyboard(msg) => self.keyboard.update(msg),
//! // In view():
//! //   render_positioned(&self.keyboard, &theme).map(Message::Keyboard)
//! ```
//!
//! Key dispatch reaches the host editor through the
//! [`EditorHandle`](crate::editor::EditorHandle) attached by `open`;
//! resolved characters, backspace, tab, and newline arrive as the three
//! edit primitives described in [`crate::editor`].

pub mod key;
pub mod message;
pub mod panel;
pub mod state;

pub use key::{function_icon_name, render_key, render_label};
pub use message::KeyboardMessage;
pub use panel::{render_panel, render_positioned};
pub use state::{PanelModel, VirtualKeyboard, BACKSPACE};
