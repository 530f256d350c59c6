// SPDX-License-Identifier: GPL-3.0-only

//! Panel rendering for the on-screen keyboard.
//!
//! The panel is a floating surface with a draggable header bar (title,
//! zoom-in/zoom-out, close) above the key grid. The header emits
//! [`KeyboardMessage::DragStart`] through a `mouse_area`; cursor movement
//! and release arrive from the host's event subscription.

use cosmic::iced::border::Radius;
use cosmic::iced::{mouse, Alignment, Border, Color, Length, Padding, Shadow};
use cosmic::widget::{self, button, container, icon, mouse_area, Space};
use cosmic::Element;
use cosmic::Theme;

use crate::app_settings::{HEADER_HEIGHT, KEY_SPACING, PANEL_PADDING};
use crate::fl;
use crate::keyboard::key::render_key;
use crate::keyboard::message::KeyboardMessage;
use crate::keyboard::state::VirtualKeyboard;
use crate::theme::{header_background_color, panel_background_color};

/// Corner radius of the panel surface.
const PANEL_RADIUS: f32 = 8.0;

/// Renders the keyboard panel, or an empty element while hidden.
///
/// # Arguments
///
/// * `keyboard` - The keyboard state
/// * `theme` - Reference to the current COSMIC theme
///
/// # Returns
///
/// An Element containing the full panel (header plus key grid).
pub fn render_panel<'a>(
    keyboard: &VirtualKeyboard,
    theme: &Theme,
) -> Element<'a, KeyboardMessage> {
    let Some(panel) = keyboard.panel().filter(|_| keyboard.is_visible()) else {
        return Space::new(Length::Shrink, Length::Shrink).into();
    };

    let scale = keyboard.scale();
    let spacing = KEY_SPACING * scale;

    let mut grid = widget::column::column().spacing(spacing);
    for row in panel.rows() {
        let mut row_widget = widget::row::row().spacing(spacing);
        for key in row {
            row_widget = row_widget.push(render_key(key, keyboard));
        }
        grid = grid.push(row_widget);
    }

    let surface_bg = panel_background_color(theme);

    container(
        widget::column::column()
            .push(render_header(theme))
            .push(container(grid).padding(PANEL_PADDING * scale)),
    )
    .width(Length::Shrink)
    .class(cosmic::style::Container::custom(move |_theme| {
        container::Style {
            background: Some(cosmic::iced::Background::Color(surface_bg)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: PANEL_RADIUS.into(),
            },
            icon_color: None,
            text_color: None,
            shadow: Shadow::default(),
        }
    }))
    .into()
}

/// Renders the panel at its current origin inside a host overlay region.
///
/// The panel origin is applied as top/left padding of a fill container, so
/// dragging moves the panel within whatever region the host dedicates to
/// the overlay.
pub fn render_positioned<'a>(
    keyboard: &VirtualKeyboard,
    theme: &Theme,
) -> Element<'a, KeyboardMessage> {
    let position = keyboard.position();

    container(render_panel(keyboard, theme))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(
            Padding::new(0.0)
                .top(position.y.max(0.0))
                .left(position.x.max(0.0)),
        )
        .into()
}

/// Renders the draggable header bar with the chrome buttons.
fn render_header<'a>(theme: &Theme) -> Element<'a, KeyboardMessage> {
    let title = widget::row::row()
        .spacing(8.0)
        .align_y(Alignment::Center)
        .push(
            icon::from_name("input-keyboard-symbolic")
                .size(16)
                .symbolic(true),
        )
        .push(widget::text::heading(fl!("keyboard-title")));

    let controls = widget::row::row()
        .spacing(4.0)
        .align_y(Alignment::Center)
        .push(header_button("zoom-in-symbolic", KeyboardMessage::ZoomIn))
        .push(header_button("zoom-out-symbolic", KeyboardMessage::ZoomOut))
        .push(
            button::custom(icon::from_name("window-close-symbolic").size(16).symbolic(true))
                .on_press(KeyboardMessage::Close)
                .class(cosmic::style::Button::Destructive),
        );

    let header_bg = header_background_color(theme);

    let bar = container(
        widget::row::row()
            .align_y(Alignment::Center)
            .push(title)
            .push(Space::new(Length::Fill, Length::Shrink))
            .push(controls),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding(Padding::new(4.0).left(10.0).right(6.0))
    .class(cosmic::style::Container::custom(move |_theme| {
        container::Style {
            background: Some(cosmic::iced::Background::Color(header_bg)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: Radius {
                    top_left: PANEL_RADIUS,
                    top_right: PANEL_RADIUS,
                    bottom_right: 0.0,
                    bottom_left: 0.0,
                },
            },
            icon_color: None,
            text_color: None,
            shadow: Shadow::default(),
        }
    }));

    mouse_area(bar)
        .on_press(KeyboardMessage::DragStart)
        .interaction(mouse::Interaction::Grab)
        .into()
}

/// A small standard-styled icon button for the header.
fn header_button<'a>(
    icon_name: &'static str,
    message: KeyboardMessage,
) -> Element<'a, KeyboardMessage> {
    button::custom(icon::from_name(icon_name).size(16).symbolic(true))
        .on_press(message)
        .class(cosmic::style::Button::Standard)
        .into()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorHandle;

    struct NullEditor;

    impl EditorHandle for NullEditor {
        fn insert_text(&mut self, _text: &str) {}
        fn delete_left(&mut self) {}
        fn focus(&mut self) {}
    }

    /// Hidden keyboards render an empty element without panicking.
    #[test]
    fn test_render_hidden_panel() {
        let keyboard = VirtualKeyboard::new();
        let theme = Theme::dark();
        let _element = render_panel(&keyboard, &theme);
    }

    /// An opened keyboard renders the full panel without panicking.
    #[test]
    fn test_render_open_panel() {
        let mut keyboard = VirtualKeyboard::new();
        keyboard.open(Box::new(NullEditor));

        let theme = Theme::dark();
        let _element = render_panel(&keyboard, &theme);
        let _positioned = render_positioned(&keyboard, &theme);
    }

    /// Rendering with active modifiers and zoom applied does not panic.
    #[test]
    fn test_render_modified_panel() {
        let mut keyboard = VirtualKeyboard::new();
        keyboard.open(Box::new(NullEditor));
        keyboard.handle_key("Shift");
        keyboard.handle_key("Caps");
        keyboard.zoom_in();

        let theme = Theme::dark();
        let _element = render_panel(&keyboard, &theme);
    }
}
