// SPDX-License-Identifier: GPL-3.0-only

//! Centralized widget settings and constants.

/// Application ID in RDNN (reverse domain name notation) format, used by the demo binary.
pub const APP_ID: &str = "io.github.softpad.Softpad";

/// Base width of a standard key in logical pixels.
pub const KEY_BASE_SIZE: f32 = 50.0;

/// Height of a key row in logical pixels.
pub const KEY_HEIGHT: f32 = 42.0;

/// Spacing between keys and between rows in logical pixels.
pub const KEY_SPACING: f32 = 6.0;

/// Padding around the key grid inside the panel.
pub const PANEL_PADDING: f32 = 10.0;

/// Height of the panel header bar in logical pixels.
pub const HEADER_HEIGHT: f32 = 32.0;

/// Multiplier applied to the scale factor on each zoom step.
pub const ZOOM_FACTOR: f32 = 1.2;

/// Lower bound for the panel scale factor.
pub const MIN_SCALE: f32 = 0.5;

/// Upper bound for the panel scale factor.
pub const MAX_SCALE: f32 = 3.0;

/// Default auto-dismiss duration for toast notifications in milliseconds.
pub const TOAST_DURATION_MS: u64 = 3000;

/// Duration of the toast entrance and exit animations in milliseconds.
pub const TOAST_ANIMATION_MS: u64 = 300;

/// Timer tick interval for toast phase and timeout checking in milliseconds.
///
/// Hosts drive [`crate::toast::Toaster::handle_tick`] from a subscription at
/// this interval while any toast is active.
pub const TOAST_TIMER_INTERVAL_MS: u64 = 100;

/// Width of a toast panel in logical pixels.
pub const TOAST_WIDTH: f32 = 400.0;

/// Margin between the toast stack and the host edge in logical pixels.
pub const TOAST_EDGE_MARGIN: f32 = 24.0;

/// Gap between stacked toasts in logical pixels.
pub const TOAST_GAP: f32 = 12.0;
