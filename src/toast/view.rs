// SPDX-License-Identifier: GPL-3.0-only

//! Toast stack rendering.
//!
//! The stack renders as an edge-anchored column of toast panels, centered
//! horizontally. Each toast is a clickable surface (click starts its exit)
//! with a category icon bubble and the message text; entrance and exit are
//! a fade plus a small drift derived from the entry's eased animation
//! progress.

use std::time::Instant;

use cosmic::iced::{alignment, Alignment, Border, Color, Length, Padding, Shadow};
use cosmic::widget::{self, container, icon, mouse_area};
use cosmic::Element;
use cosmic::Theme;

use crate::app_settings::{TOAST_EDGE_MARGIN, TOAST_GAP, TOAST_WIDTH};
use crate::theme::{toast_accent_color, toast_background_color, toast_text_color};
use crate::toast::message::ToastMessage;
use crate::toast::state::{Position, ToastEntry, Toaster};

/// Corner radius of a toast panel.
const TOAST_RADIUS: f32 = 12.0;

/// Vertical drift distance of the entrance/exit animation in pixels.
const SLIDE_PX: f32 = 16.0;

/// Diameter of the category icon bubble.
const ICON_BUBBLE: f32 = 24.0;

/// Renders the whole toast stack, or `None` when no toast is live.
///
/// # Arguments
///
/// * `toaster` - The notifier state
/// * `theme` - Reference to the current COSMIC theme
///
/// # Returns
///
/// An optional Element anchored to the stack's configured edge.
pub fn render_stack<'a>(toaster: &Toaster, theme: &Theme) -> Option<Element<'a, ToastMessage>> {
    let stack = toaster.stack()?;
    let now = Instant::now();
    let position = stack.position();

    let mut column = widget::column::column()
        .spacing(TOAST_GAP)
        .align_x(Alignment::Center);

    // Bottom stacks grow toward the top of the screen, newest nearest the
    // edge, mirroring a column-reverse flow.
    match position {
        Position::Top => {
            for entry in stack.entries() {
                column = column.push(render_toast(
                    entry,
                    position,
                    entry.animation_progress(now),
                    theme,
                ));
            }
        }
        Position::Bottom => {
            for entry in stack.entries().iter().rev() {
                column = column.push(render_toast(
                    entry,
                    position,
                    entry.animation_progress(now),
                    theme,
                ));
            }
        }
    }

    let align_y = match position {
        Position::Top => alignment::Vertical::Top,
        Position::Bottom => alignment::Vertical::Bottom,
    };

    Some(
        container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(align_y)
            .padding(TOAST_EDGE_MARGIN)
            .into(),
    )
}

/// Renders a single toast panel.
///
/// `progress` is the entry's eased animation progress: it scales the
/// surface opacity and the drift away from the resting position.
pub fn render_toast<'a>(
    entry: &ToastEntry,
    position: Position,
    progress: f32,
    theme: &Theme,
) -> Element<'a, ToastMessage> {
    let progress = progress.clamp(0.0, 1.0);
    let category = entry.category();

    let background = toast_background_color(theme, category).scale_alpha(progress);
    let accent = toast_accent_color(theme, category).scale_alpha(progress);
    let text_color = toast_text_color(theme);

    let bubble = container(
        icon::from_name(category.icon_name())
            .size(16)
            .symbolic(true),
    )
    .width(Length::Fixed(ICON_BUBBLE))
    .height(Length::Fixed(ICON_BUBBLE))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .class(cosmic::style::Container::custom(move |_theme| {
        container::Style {
            background: Some(cosmic::iced::Background::Color(accent)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: (ICON_BUBBLE / 2.0).into(),
            },
            icon_color: None,
            text_color: None,
            shadow: Shadow::default(),
        }
    }));

    let body = widget::row::row()
        .spacing(12.0)
        .align_y(Alignment::Center)
        .push(bubble)
        .push(widget::text::body(entry.message().to_string()));

    let surface = container(body)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(Padding::new(12.0).left(16.0).right(16.0))
        .class(cosmic::style::Container::custom(move |_theme| {
            container::Style {
                background: Some(cosmic::iced::Background::Color(background)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: TOAST_RADIUS.into(),
                },
                icon_color: None,
                text_color: Some(text_color),
                shadow: Shadow::default(),
            }
        }));

    // Drift toward the resting position as the toast fades in: leading
    // padding on the edge side shrinks with progress.
    let drift = (1.0 - progress) * SLIDE_PX;
    let drift_padding = match position {
        Position::Top => Padding::new(0.0).top(drift),
        Position::Bottom => Padding::new(0.0).bottom(drift),
    };

    mouse_area(container(surface).padding(drift_padding))
        .on_press(ToastMessage::Pressed(entry.id()))
        .into()
}

// ============================================================================
// Tests
// ============================================================================
