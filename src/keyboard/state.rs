// SPDX-License-Identifier: GPL-3.0-only

//! Session state for the on-screen keyboard panel.
//!
//! [`VirtualKeyboard`] is a plain value owned by the host application; it
//! replaces the module-level singletons of a DOM-style keyboard with an
//! explicit instance the host creates and drops. It holds:
//!
//! - the lazily-built panel model (rows plus a label-keyed lookup table,
//!   built exactly once across any number of [`open`](VirtualKeyboard::open)
//!   calls),
//! - modifier state (one-shot Shift, toggled Caps),
//! - view state (visibility, scale factor, position, drag bookkeeping),
//! - the attached [`EditorHandle`], rebound on every `open`.

use std::collections::HashMap;

use cosmic::iced::{Point, Vector};

use crate::app_settings::{MAX_SCALE, MIN_SCALE, ZOOM_FACTOR};
use crate::editor::EditorHandle;
use crate::input::{resolved_label, Modifier, ModifierState};
use crate::keyboard::message::KeyboardMessage;
use crate::layout::{KeyAction, KeyDef, LAYOUT};

/// Control code dispatched for the Backspace key.
pub const BACKSPACE: char = '\u{8}';

/// The built panel model: layout rows plus the dispatch lookup table.
///
/// Built once, on the first `open`, and reused for the lifetime of the
/// keyboard value. Rebuilding it would reset nothing but waste allocations,
/// so `open` never does.
#[derive(Debug, Clone)]
pub struct PanelModel {
    rows: Vec<Vec<KeyDef>>,
    index: HashMap<&'static str, KeyDef>,
}

impl PanelModel {
    fn build() -> Self {
        let rows: Vec<Vec<KeyDef>> = LAYOUT.iter().map(|row| row.to_vec()).collect();

        let index = rows
            .iter()
            .flatten()
            .map(|key| (key.label, *key))
            .collect();

        Self { rows, index }
    }

    /// Returns the layout rows, top row first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeyDef>] {
        &self.rows
    }

    /// Looks up a key by its stable identifier (base label).
    #[must_use]
    pub fn key(&self, label: &str) -> Option<&KeyDef> {
        self.index.get(label)
    }
}

/// Header-drag bookkeeping.
///
/// The offset between the cursor and the panel origin is captured when the
/// drag starts, so the panel tracks the cursor without jumping.
#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    dragging: bool,
    grab_offset: Vector,
}

/// The on-screen keyboard panel state.
pub struct VirtualKeyboard {
    /// Panel model, built lazily on first `open`.
    panel: Option<PanelModel>,

    /// How many times the panel model has been built. Stays at one.
    builds: u32,

    /// Shift/Caps state.
    modifiers: ModifierState,

    /// Visual scale factor applied to key dimensions.
    scale: f32,

    /// Whether the panel is currently shown.
    visible: bool,

    /// Panel origin within the host's overlay region.
    position: Point,

    drag: DragState,

    /// Last cursor position seen, dragged or not. Needed to compute the
    /// grab offset when a drag starts.
    last_cursor: Option<Point>,

    /// The editor currently receiving dispatched keys.
    editor: Option<Box<dyn EditorHandle>>,
}

impl Default for VirtualKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualKeyboard {
    /// Creates a hidden keyboard with no editor attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            panel: None,
            builds: 0,
            modifiers: ModifierState::new(),
            scale: 1.0,
            visible: false,
            position: Point::new(24.0, 24.0),
            drag: DragState::default(),
            last_cursor: None,
            editor: None,
        }
    }

    /// Attaches an editor and shows the panel.
    ///
    /// Idempotent: the panel model is built on the first call only; later
    /// calls rebind the editor handle and re-show the panel, leaving
    /// modifier state, scale, and position untouched.
    pub fn open(&mut self, editor: Box<dyn EditorHandle>) {
        self.ensure_panel();
        self.editor = Some(editor);
        self.visible = true;
        tracing::debug!("keyboard opened, editor rebound");
    }

    /// Hides the panel. Session state and the attached editor survive.
    pub fn close(&mut self) {
        self.visible = false;
        tracing::debug!("keyboard hidden");
    }

    /// Returns `true` while the panel is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the built panel model, if any `open` has happened yet.
    #[must_use]
    pub fn panel(&self) -> Option<&PanelModel> {
        self.panel.as_ref()
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current panel origin within the host's overlay region.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns `true` if shift is active.
    #[must_use]
    pub fn shift_active(&self) -> bool {
        self.modifiers.is_active(Modifier::Shift)
    }

    /// Returns `true` if caps lock is active.
    #[must_use]
    pub fn caps_active(&self) -> bool {
        self.modifiers.is_active(Modifier::CapsLock)
    }

    /// Returns the label a key currently displays (and would dispatch).
    ///
    /// Function keys keep their base label; character keys resolve through
    /// the modifier state.
    #[must_use]
    pub fn display_label(&self, key: &KeyDef) -> String {
        if key.function_key {
            key.label.to_string()
        } else {
            resolved_label(key.label, &self.modifiers)
        }
    }

    /// Forwards a resolved character or control code to the attached editor.
    ///
    /// `'\u{8}'` deletes one unit to the left; `'\t'` and `'\n'` insert the
    /// literal control character; everything else inserts the character and
    /// requests focus. Silent no-op when no editor is attached.
    pub fn dispatch_key_press(&mut self, ch: char) {
        let Some(editor) = self.editor.as_mut() else {
            tracing::debug!("key dispatch with no editor attached, dropping");
            return;
        };

        match ch {
            BACKSPACE => editor.delete_left(),
            '\t' => editor.insert_text("\t"),
            '\n' => editor.insert_text("\n"),
            other => {
                editor.insert_text(&other.to_string());
                editor.focus();
            }
        }
    }

    /// Handles a press on the key with the given stable identifier.
    ///
    /// Single delegated handler: the identifier is looked up in the panel's
    /// table, and the key's action decides between modifier toggles,
    /// control-code dispatch, and resolved-character dispatch. A one-shot
    /// shift releases after a resolved dispatch; caps only changes through
    /// its own toggle.
    pub fn handle_key(&mut self, label: &str) {
        self.ensure_panel();

        let Some(key) = self.panel.as_ref().and_then(|p| p.key(label)).copied() else {
            tracing::warn!(label, "press for unknown key identifier, ignoring");
            return;
        };

        match key.action() {
            KeyAction::ToggleShift => {
                let active = self.modifiers.toggle(Modifier::Shift, true);
                tracing::debug!(active, "shift toggled");
            }
            KeyAction::ToggleCaps => {
                let active = self.modifiers.toggle(Modifier::CapsLock, false);
                tracing::debug!(active, "caps toggled");
            }
            KeyAction::Backspace => self.dispatch_key_press(BACKSPACE),
            KeyAction::Enter => self.dispatch_key_press('\n'),
            KeyAction::Tab => self.dispatch_key_press('\t'),
            KeyAction::Space => self.dispatch_key_press(' '),
            KeyAction::Character => {
                let resolved = self.display_label(&key);
                if let Some(ch) = resolved.chars().next() {
                    self.dispatch_key_press(ch);
                }

                // One-shot shift releases after a resolved dispatch; the
                // next view pass re-resolves every key cap.
                if self.shift_active() {
                    self.modifiers.clear_one_shot();
                }
            }
        }
    }

    /// Multiplies the scale factor by the zoom ratio.
    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * ZOOM_FACTOR).clamp(MIN_SCALE, MAX_SCALE);
        tracing::debug!(scale = self.scale, "zoomed in");
    }

    /// Divides the scale factor by the zoom ratio.
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / ZOOM_FACTOR).clamp(MIN_SCALE, MAX_SCALE);
        tracing::debug!(scale = self.scale, "zoomed out");
    }

    /// Starts a header drag at the last known cursor position.
    pub fn begin_drag(&mut self) {
        let Some(cursor) = self.last_cursor else {
            return;
        };

        self.drag.dragging = true;
        self.drag.grab_offset = cursor - self.position;
        tracing::debug!("drag started");
    }

    /// Tracks cursor movement; repositions the panel while dragging.
    pub fn cursor_moved(&mut self, cursor: Point) {
        self.last_cursor = Some(cursor);

        if self.drag.dragging {
            self.position = cursor - self.drag.grab_offset;
        }
    }

    /// Ends an active drag, keeping the panel where it landed.
    pub fn end_drag(&mut self) {
        if self.drag.dragging {
            self.drag.dragging = false;
            tracing::debug!(x = self.position.x, y = self.position.y, "drag ended");
        }
    }

    /// Returns `true` while a header drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Handles a panel message.
    pub fn update(&mut self, message: KeyboardMessage) {
        match message {
            KeyboardMessage::KeyPressed(label) => self.handle_key(&label),
            KeyboardMessage::Close => self.close(),
            KeyboardMessage::ZoomIn => self.zoom_in(),
            KeyboardMessage::ZoomOut => self.zoom_out(),
            KeyboardMessage::DragStart => self.begin_drag(),
            KeyboardMessage::CursorMoved(point) => self.cursor_moved(point),
            KeyboardMessage::DragEnd => self.end_drag(),
        }
    }

    fn ensure_panel(&mut self) {
        if self.panel.is_none() {
            self.panel = Some(PanelModel::build());
            self.builds += 1;
            tracing::debug!(builds = self.builds, "keyboard panel model built");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
