// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout tables.
//!
//! This module defines the key descriptor types and the built-in US QWERTY
//! layout consumed by the keyboard panel. The layout is static data: rows
//! of [`KeyDef`] entries whose labels double as stable identifiers for
//! delegated dispatch.

pub mod qwerty;
pub mod types;

pub use qwerty::{max_row_width_units, shifted_symbol, LAYOUT, SHIFT_MAP};
pub use types::{KeyAction, KeyDef};
