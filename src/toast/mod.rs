// SPDX-License-Identifier: GPL-3.0-only

//! The toast notification widget.
//!
//! [`Toaster`] is an explicit instance owned by the host application. A
//! host embeds it in three steps:
//!
//! 1. Keep a `Toaster` in the application model and call
//!    [`Toaster::notify`] (or the `info`/`success`/`error`/`warning`
//!    variants) to queue messages. The returned [`ToastHandle`] allows
//!    early removal through [`Toaster::dismiss`].
//! 2. Render [`render_stack`] in `view` over the main content, mapping
//!    [`ToastMessage`] into the host message type.
//! 3. While [`Toaster::is_active`], run a timer subscription at
//!    [`TOAST_TIMER_INTERVAL_MS`](crate::app_settings::TOAST_TIMER_INTERVAL_MS)
//!    emitting [`ToastMessage::Tick`], and route every stack message to
//!    [`Toaster::update`].
//!
//! The stack container exists only while at least one toast is live; when
//! the last one leaves, it is torn down and a later `notify` builds a
//! fresh one. When concurrent toasts request different edges, the whole
//! stack follows the last-specified position.

pub mod message;
pub mod state;
pub mod view;

pub use message::ToastMessage;
pub use state::{
    Category, Position, ToastEntry, ToastHandle, ToastId, ToastOptions, ToastPhase, ToastStack,
    Toaster,
};
pub use view::{render_stack, render_toast};
