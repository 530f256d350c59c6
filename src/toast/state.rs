// SPDX-License-Identifier: GPL-3.0-only

//! Toast stack state and lifecycle.
//!
//! [`Toaster`] is an explicit instance owned by the host application; it
//! replaces module-level container/queue globals with a value the host
//! creates and drops. The stack container exists only while at least one
//! toast is live: it is torn down when the last entry finishes its exit
//! animation and rebuilt, with a fresh identity, on the next
//! [`notify`](Toaster::notify).
//!
//! Each entry moves through a three-phase machine,
//! `Entering -> Shown -> Leaving`, driven by `Instant` deadlines checked
//! from the host's periodic tick. Removal is triggered by an explicit
//! dismiss, a click, or the auto-dismiss deadline; the first trigger wins
//! and the rest are no-ops.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::app_settings::{TOAST_ANIMATION_MS, TOAST_DURATION_MS};
use crate::toast::message::ToastMessage;

/// Visual category of a toast, selecting its accent color and icon.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Neutral informational message. Unknown category names parse here
    /// through [`FromStr`].
    #[default]
    Info,
    /// A completed action.
    Success,
    /// A failure the user should notice.
    Error,
    /// A caution that something may need attention.
    Warning,
}

impl Category {
    /// Symbolic icon name for this category.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            Category::Info => "dialog-information-symbolic",
            Category::Success => "emblem-ok-symbolic",
            Category::Error => "dialog-error-symbolic",
            Category::Warning => "dialog-warning-symbolic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    /// Parses a category name; unknown names fall back to [`Category::Info`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            "warning" => Category::Warning,
            _ => Category::Info,
        })
    }
}

/// Which host edge the stack anchors to.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Stack grows downward from the top edge.
    #[default]
    Top,
    /// Stack grows upward from the bottom edge.
    Bottom,
}

/// Options accepted by [`Toaster::notify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastOptions {
    /// Auto-dismiss delay in milliseconds. Zero or negative disables
    /// auto-dismiss; the toast stays until clicked or dismissed.
    pub duration_ms: i64,

    /// Edge the stack anchors to. The last-specified position wins for the
    /// whole stack.
    pub position: Position,

    /// Visual category.
    pub category: Category,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration_ms: TOAST_DURATION_MS as i64,
            position: Position::default(),
            category: Category::default(),
        }
    }
}

impl ToastOptions {
    /// Sets the auto-dismiss delay; zero or negative disables it.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the stack edge.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the visual category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Returns the auto-dismiss delay, or `None` when disabled.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        if self.duration_ms > 0 {
            Some(Duration::from_millis(self.duration_ms as u64))
        } else {
            None
        }
    }
}

/// Opaque identifier of a live toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    #[cfg(test)]
    pub(crate) fn for_tests(raw: u64) -> Self {
        Self(raw)
    }
}

/// Handle returned by [`Toaster::notify`] for early removal.
///
/// Removal goes through [`Toaster::dismiss`]: the toaster is an explicit
/// instance, so the handle names the toast, not the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHandle {
    id: ToastId,
}

impl ToastHandle {
    /// The identifier this handle refers to.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }
}

/// Animation phase of a toast entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Animating in since the given instant.
    Entering(Instant),
    /// Fully visible.
    Shown,
    /// Animating out since the given instant; removed when the exit
    /// animation completes.
    Leaving(Instant),
}

/// A live toast in the stack.
#[derive(Debug, Clone)]
pub struct ToastEntry {
    id: ToastId,
    message: String,
    category: Category,
    deadline: Option<Instant>,
    phase: ToastPhase,
}

impl ToastEntry {
    /// The entry's identifier.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The visual category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The current animation phase.
    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Eased animation progress at `now`: 0.0 fully off-screen, 1.0 fully
    /// visible. Rises through `Entering`, holds at 1.0 while `Shown`, and
    /// falls back through `Leaving`.
    #[must_use]
    pub fn animation_progress(&self, now: Instant) -> f32 {
        match self.phase {
            ToastPhase::Entering(since) => eased(linear_progress(since, now)),
            ToastPhase::Shown => 1.0,
            ToastPhase::Leaving(since) => 1.0 - eased(linear_progress(since, now)),
        }
    }
}

fn linear_progress(since: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(since).as_millis() as f32;
    (elapsed / TOAST_ANIMATION_MS as f32).min(1.0)
}

/// Ease-out-cubic, for a natural deceleration.
fn eased(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

/// The stack container. Exists only while at least one toast is live.
#[derive(Debug, Clone)]
pub struct ToastStack {
    serial: u64,
    position: Position,
    entries: Vec<ToastEntry>,
}

impl ToastStack {
    /// Identity of this container incarnation.
    ///
    /// A fresh container gets a fresh serial, so hosts and tests can
    /// observe that the stack was rebuilt after it emptied.
    #[must_use]
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// The edge the stack currently anchors to.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Live entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

/// The toast notifier instance owned by the host.
#[derive(Debug, Default)]
pub struct Toaster {
    stack: Option<ToastStack>,
    next_id: u64,
    next_serial: u64,
}

impl Toaster {
    /// Creates a notifier with no active toasts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while any toast is live.
    ///
    /// Hosts gate their tick subscription on this.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.stack.is_some()
    }

    /// Number of live toasts.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.stack.as_ref().map_or(0, |s| s.entries.len())
    }

    /// The current stack container, if any toast is live.
    #[must_use]
    pub fn stack(&self) -> Option<&ToastStack> {
        self.stack.as_ref()
    }

    /// Queues a toast and returns a handle for early removal.
    ///
    /// Creates the stack container if none is live; otherwise reuses it,
    /// re-anchoring to `options.position` if that differs (last-specified
    /// position wins for the whole stack).
    pub fn notify(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.notify_at(Instant::now(), message.into(), options)
    }

    /// Queues an info toast.
    pub fn info(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.notify(message, options.with_category(Category::Info))
    }

    /// Queues a success toast.
    pub fn success(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.notify(message, options.with_category(Category::Success))
    }

    /// Queues an error toast.
    pub fn error(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.notify(message, options.with_category(Category::Error))
    }

    /// Queues a warning toast.
    pub fn warning(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.notify(message, options.with_category(Category::Warning))
    }

    /// Starts the exit animation for the toast behind `handle`.
    ///
    /// No-op if the toast is already leaving or gone, so an early dismiss
    /// races harmlessly against the auto-dismiss deadline.
    pub fn dismiss(&mut self, handle: &ToastHandle) {
        self.begin_leave(handle.id, Instant::now());
    }

    /// Handles a stack message.
    pub fn update(&mut self, message: ToastMessage) {
        match message {
            ToastMessage::Pressed(id) => self.begin_leave(id, Instant::now()),
            ToastMessage::Tick => {
                self.tick_at(Instant::now());
            }
        }
    }

    /// Advances phases and deadlines. Returns `true` if anything changed.
    ///
    /// Drives entrance completion, auto-dismiss deadlines, exit completion
    /// (removing the entry), and container teardown once the stack empties.
    pub fn handle_tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn notify_at(
        &mut self,
        now: Instant,
        message: String,
        options: ToastOptions,
    ) -> ToastHandle {
        match &mut self.stack {
            None => {
                self.next_serial += 1;
                self.stack = Some(ToastStack {
                    serial: self.next_serial,
                    position: options.position,
                    entries: Vec::new(),
                });
                tracing::debug!(serial = self.next_serial, "toast stack created");
            }
            Some(stack) if stack.position != options.position => {
                stack.position = options.position;
                tracing::debug!(position = ?options.position, "toast stack re-anchored");
            }
            Some(_) => {}
        }

        self.next_id += 1;
        let id = ToastId(self.next_id);

        let entry = ToastEntry {
            id,
            message,
            category: options.category,
            deadline: options.auto_dismiss().map(|delay| now + delay),
            phase: ToastPhase::Entering(now),
        };

        tracing::debug!(?id, category = %options.category, "toast queued");

        // Invariant: stack is Some here.
        if let Some(stack) = &mut self.stack {
            stack.entries.push(entry);
        }

        ToastHandle { id }
    }

    fn begin_leave(&mut self, id: ToastId, now: Instant) {
        let Some(stack) = &mut self.stack else {
            return;
        };

        let Some(entry) = stack.entries.iter_mut().find(|entry| entry.id == id) else {
            return;
        };

        if matches!(entry.phase, ToastPhase::Leaving(_)) {
            return;
        }

        entry.phase = ToastPhase::Leaving(now);
        tracing::debug!(?id, "toast leaving");
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        let Some(stack) = &mut self.stack else {
            return false;
        };

        let animation = Duration::from_millis(TOAST_ANIMATION_MS);
        let mut changed = false;

        for entry in &mut stack.entries {
            if let ToastPhase::Entering(since) = entry.phase {
                if now.saturating_duration_since(since) >= animation {
                    entry.phase = ToastPhase::Shown;
                    changed = true;
                }
            }

            let due = entry.deadline.is_some_and(|deadline| now >= deadline);
            if due && !matches!(entry.phase, ToastPhase::Leaving(_)) {
                entry.phase = ToastPhase::Leaving(now);
                changed = true;
                tracing::debug!(id = ?entry.id, "toast deadline elapsed");
            }
        }

        let before = stack.entries.len();
        stack.entries.retain(|entry| match entry.phase {
            ToastPhase::Leaving(since) => now.saturating_duration_since(since) < animation,
            _ => true,
        });
        changed |= stack.entries.len() != before;

        if stack.entries.is_empty() {
            self.stack = None;
            changed = true;
            tracing::debug!("toast stack empty, torn down");
        }

        changed
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ANIM: Duration = Duration::from_millis(TOAST_ANIMATION_MS);

    fn past_default_deadline() -> Duration {
        Duration::from_millis(TOAST_DURATION_MS + 1)
    }

    #[test]
    fn test_option_defaults() {
        let options = ToastOptions::default();
        assert_eq!(options.duration_ms, 3000);
        assert_eq!(options.position, Position::Top);
        assert_eq!(options.category, Category::Info);
        assert_eq!(options.auto_dismiss(), Some(Duration::from_millis(3000)));
    }

    #[test]
    fn test_non_positive_duration_disables_auto_dismiss() {
        assert_eq!(ToastOptions::default().with_duration_ms(0).auto_dismiss(), None);
        assert_eq!(
            ToastOptions::default().with_duration_ms(-5).auto_dismiss(),
            None
        );
    }

    /// Unknown category names fall back to info.
    #[test]
    fn test_category_parse_fallback() {
        assert_eq!("success".parse::<Category>().unwrap(), Category::Success);
        assert_eq!("WARNING".parse::<Category>().unwrap(), Category::Warning);
        assert_eq!("bogus".parse::<Category>().unwrap(), Category::Info);
        assert_eq!("".parse::<Category>().unwrap(), Category::Info);
    }

    /// Options deserialize from an empty object to the defaults.
    #[test]
    fn test_options_serde_defaults() {
        let options: ToastOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ToastOptions::default());

        let options: ToastOptions =
            serde_json::from_str(r#"{"duration_ms": 0, "position": "bottom", "category": "error"}"#)
                .unwrap();
        assert_eq!(options.duration_ms, 0);
        assert_eq!(options.position, Position::Bottom);
        assert_eq!(options.category, Category::Error);
    }

    /// The container exists only while toasts are live, and a rebuilt
    /// container has a fresh identity.
    #[test]
    fn test_container_lifecycle_and_identity() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        assert!(!toaster.is_active());

        let handle = toaster.notify_at(now, "first".into(), ToastOptions::default());
        let first_serial = toaster.stack().unwrap().serial();

        toaster.begin_leave(handle.id(), now);
        toaster.tick_at(now + ANIM);
        assert!(!toaster.is_active(), "container torn down when empty");

        toaster.notify_at(now + ANIM, "second".into(), ToastOptions::default());
        let second_serial = toaster.stack().unwrap().serial();
        assert_ne!(first_serial, second_serial, "rebuilt container is fresh");
    }

    /// Toasts auto-dismiss after their deadline: deadline starts the exit,
    /// the exit animation ends in removal.
    #[test]
    fn test_auto_dismiss_after_deadline() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        toaster.notify_at(now, "going".into(), ToastOptions::default());

        // Before the deadline: entrance completes, entry stays.
        assert!(toaster.tick_at(now + ANIM));
        assert_eq!(toaster.active_count(), 1);
        assert!(matches!(
            toaster.stack().unwrap().entries()[0].phase(),
            ToastPhase::Shown
        ));

        // Deadline elapses: exit starts.
        let after_deadline = now + past_default_deadline();
        assert!(toaster.tick_at(after_deadline));
        assert!(matches!(
            toaster.stack().unwrap().entries()[0].phase(),
            ToastPhase::Leaving(_)
        ));

        // Exit animation completes: entry removed, container gone.
        assert!(toaster.tick_at(after_deadline + ANIM));
        assert_eq!(toaster.active_count(), 0);
        assert!(!toaster.is_active());
    }

    /// Zero duration never auto-dismisses; only a click or dismiss ends it.
    #[test]
    fn test_sticky_toast_persists() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let handle = toaster.notify_at(
            now,
            "sticky".into(),
            ToastOptions::default().with_duration_ms(0),
        );

        toaster.tick_at(now + Duration::from_secs(3600));
        assert_eq!(toaster.active_count(), 1, "no deadline, still live");

        toaster.begin_leave(handle.id(), now + Duration::from_secs(3600));
        toaster.tick_at(now + Duration::from_secs(3600) + ANIM);
        assert!(!toaster.is_active());
    }

    /// A click and a later deadline do not both remove: the deadline
    /// trigger is a no-op on an already-leaving toast.
    #[test]
    fn test_click_then_deadline_single_removal() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let handle = toaster.notify_at(now, "raced".into(), ToastOptions::default());

        // Click just before the deadline.
        let click_at = now + Duration::from_millis(TOAST_DURATION_MS - 50);
        toaster.begin_leave(handle.id(), click_at);
        let ToastPhase::Leaving(leave_since) = toaster.stack().unwrap().entries()[0].phase()
        else {
            panic!("toast should be leaving after click");
        };
        assert_eq!(leave_since, click_at);

        // Deadline elapses mid-exit: must not restart the exit.
        toaster.tick_at(now + past_default_deadline());
        if let Some(stack) = toaster.stack() {
            if let Some(entry) = stack.entries().first() {
                let ToastPhase::Leaving(since) = entry.phase() else {
                    panic!("toast should still be leaving");
                };
                assert_eq!(since, click_at, "deadline must not restart the exit");
            }
        }

        // And the dismiss handle is a no-op once the toast is gone.
        toaster.tick_at(click_at + ANIM);
        assert!(!toaster.is_active());
        toaster.dismiss(&handle);
        assert!(!toaster.is_active());
    }

    /// The last-specified position wins for the whole stack.
    #[test]
    fn test_last_position_wins() {
        let now = Instant::now();
        let mut toaster = Toaster::new();

        toaster.notify_at(now, "top".into(), ToastOptions::default());
        assert_eq!(toaster.stack().unwrap().position(), Position::Top);

        toaster.notify_at(
            now,
            "bottom".into(),
            ToastOptions::default().with_position(Position::Bottom),
        );
        assert_eq!(
            toaster.stack().unwrap().position(),
            Position::Bottom,
            "stack re-anchors to the last requested edge"
        );
        assert_eq!(toaster.active_count(), 2);
    }

    /// Convenience variants bind the category and forward other options.
    #[test]
    fn test_convenience_variants() {
        let mut toaster = Toaster::new();

        toaster.success("s", ToastOptions::default());
        toaster.error("e", ToastOptions::default().with_duration_ms(0));
        toaster.warning("w", ToastOptions::default());
        toaster.info("i", ToastOptions::default());

        let categories: Vec<Category> = toaster
            .stack()
            .unwrap()
            .entries()
            .iter()
            .map(|entry| entry.category())
            .collect();
        assert_eq!(
            categories,
            vec![
                Category::Success,
                Category::Error,
                Category::Warning,
                Category::Info
            ]
        );
    }

    /// Entries keep insertion order.
    #[test]
    fn test_stack_preserves_order() {
        let now = Instant::now();
        let mut toaster = Toaster::new();

        for n in 1..=4 {
            toaster.notify_at(now, format!("toast {n}"), ToastOptions::default());
        }

        let messages: Vec<&str> = toaster
            .stack()
            .unwrap()
            .entries()
            .iter()
            .map(ToastEntry::message)
            .collect();
        assert_eq!(messages, vec!["toast 1", "toast 2", "toast 3", "toast 4"]);
    }

    /// Animation progress rises while entering, holds, then falls.
    #[test]
    fn test_animation_progress_shape() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let handle = toaster.notify_at(now, "animated".into(), ToastOptions::default());

        let entry = toaster.stack().unwrap().entries()[0].clone();
        assert_eq!(entry.animation_progress(now), 0.0);
        let mid = entry.animation_progress(now + ANIM / 2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(entry.animation_progress(now + ANIM), 1.0);

        toaster.begin_leave(handle.id(), now + ANIM);
        let leaving = toaster.stack().unwrap().entries()[0].clone();
        let falling = leaving.animation_progress(now + ANIM + ANIM / 2);
        assert!(falling < 1.0);
        assert_eq!(leaving.animation_progress(now + ANIM + ANIM), 0.0);
    }

    /// Ticking an inactive toaster reports no change.
    #[test]
    fn test_tick_without_toasts() {
        let mut toaster = Toaster::new();
        assert!(!toaster.handle_tick());
    }
}
