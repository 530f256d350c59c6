// SPDX-License-Identifier: GPL-3.0-only

//! COSMIC theme integration for the keyboard panel and toast stack.
//!
//! Each function takes a reference to the COSMIC theme and returns the
//! color for one visual element, so both widgets follow the user's desktop
//! theme instead of hard-coding palettes. Key buttons themselves use the
//! standard/suggested button classes; only the chrome and the toasts need
//! explicit colors.

use cosmic::iced::Color;
use cosmic::Theme;

use crate::toast::Category;

/// Returns the panel surface background color.
pub fn panel_background_color(theme: &Theme) -> Color {
    let cosmic = theme.cosmic();
    Color::from(cosmic.bg_color())
}

/// Returns the header bar background color.
///
/// The header doubles as the drag handle, so it uses the component shade to
/// stand apart from the key grid surface.
pub fn header_background_color(theme: &Theme) -> Color {
    let cosmic = theme.cosmic();
    Color::from(cosmic.bg_component_color())
}

/// Returns the background color for a toast of the given category.
///
/// A semi-transparent component background tinted toward the category's
/// accent, so stacked toasts float over content without obscuring it.
pub fn toast_background_color(theme: &Theme, category: Category) -> Color {
    let cosmic = theme.cosmic();
    let base = Color::from(cosmic.bg_component_color()).scale_alpha(0.95);

    let accent = toast_accent_color(theme, category);

    // Blend a little of the accent into the component background.
    Color {
        r: base.r * 0.85 + accent.r * 0.15,
        g: base.g * 0.85 + accent.g * 0.15,
        b: base.b * 0.85 + accent.b * 0.15,
        a: base.a,
    }
}

/// Returns the accent color for a toast category.
///
/// - Info: the theme accent
/// - Success: the success color
/// - Error: the destructive color
/// - Warning: the warning color
pub fn toast_accent_color(theme: &Theme, category: Category) -> Color {
    let cosmic = theme.cosmic();

    match category {
        Category::Info => Color::from(cosmic.accent_color()),
        Category::Success => Color::from(cosmic.success_color()),
        Category::Error => Color::from(cosmic.destructive_color()),
        Category::Warning => Color::from(cosmic.warning_color()),
    }
}

/// Returns the message text color for toasts.
pub fn toast_text_color(theme: &Theme) -> Color {
    let cosmic = theme.cosmic();
    Color::from(cosmic.on_bg_component_color())
}

// ============================================================================
// Tests
// ============================================================================
