// SPDX-License-Identifier: GPL-3.0-only

//! Key rendering for the keyboard panel.
//!
//! Keys are rendered as buttons with dimensions derived from the layout
//! table's width units, the base key size, and the panel's current scale
//! factor, so visual size and hit target always match.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, icon};
use cosmic::Element;

use crate::app_settings::{KEY_BASE_SIZE, KEY_HEIGHT};
use crate::keyboard::message::KeyboardMessage;
use crate::keyboard::state::VirtualKeyboard;
use crate::layout::KeyDef;

/// Renders a single key as a button element.
///
/// The key dispatches [`KeyboardMessage::KeyPressed`] with its stable
/// identifier; an active Shift or Caps key is highlighted with the
/// suggested style.
///
/// # Arguments
///
/// * `key` - The key definition from the layout table
/// * `keyboard` - The keyboard state (for resolved labels, scale, modifiers)
///
/// # Returns
///
/// An Element containing the rendered key button.
pub fn render_key<'a>(key: &KeyDef, keyboard: &VirtualKeyboard) -> Element<'a, KeyboardMessage> {
    let scale = keyboard.scale();
    let width = key.width_units * KEY_BASE_SIZE * scale;
    let height = KEY_HEIGHT * scale;

    let highlighted = (key.label == "Shift" && keyboard.shift_active())
        || (key.label == "Caps" && keyboard.caps_active());

    let button_class = if highlighted {
        cosmic::style::Button::Suggested
    } else {
        cosmic::style::Button::Standard
    };

    let label = render_label(key, keyboard.display_label(key));

    button::custom(
        container(label)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    )
    .on_press(KeyboardMessage::KeyPressed(key.label.to_string()))
    .class(button_class)
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .into()
}

/// Renders a key cap as an icon (function keys) or text (character keys).
///
/// `resolved` is the label the key currently displays under the modifier
/// state; function keys ignore it and render a fixed symbolic icon.
pub fn render_label<'a>(key: &KeyDef, resolved: String) -> Element<'a, KeyboardMessage> {
    if let Some(icon_name) = function_icon_name(key) {
        icon::from_name(icon_name).size(16).symbolic(true).into()
    } else {
        widget::text::body(resolved).into()
    }
}

/// Maps a function key to its symbolic icon name.
///
/// Returns `None` for character keys, which render their resolved label as
/// text.
#[must_use]
pub fn function_icon_name(key: &KeyDef) -> Option<&'static str> {
    if !key.function_key {
        return None;
    }

    match key.label {
        "Backspace" => Some("edit-delete-symbolic"),
        "Enter" => Some("keyboard-enter-symbolic"),
        "Shift" => Some("keyboard-shift-symbolic"),
        "Tab" => Some("format-indent-more-symbolic"),
        "Caps" => Some("keyboard-caps-symbolic"),
        "Space" => Some("keyboard-spacebar-symbolic"),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
