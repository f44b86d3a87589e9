// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active notifications of one delivery surface and
//! their timers. Each notification moves `Visible -> Leaving -> removed`:
//!
//! - `push` arms an expiry timer when the duration is non-zero
//! - expiry or `dismiss` enters `Leaving` and arms the removal timer
//! - the removal timer drops the entry and notifies the dismiss observer
//!
//! Timers are plain data fired by [`Manager::advance`], the single scheduler
//! entry point. An entry owns at most one live timer at any time.

use super::clock::{Clock, SystemClock};
use super::notification::{Notification, NotificationId, Position};
use crate::config::{DEFAULT_TOAST_DURATION_MS, TOAST_ENTER_DURATION_MS, TOAST_LEAVE_DURATION_MS};
use std::fmt;
use std::time::{Duration, Instant};

/// Length of the leave transition.
pub const LEAVE_DURATION: Duration = Duration::from_millis(TOAST_LEAVE_DURATION_MS);

/// Length of the enter fade.
pub const ENTER_DURATION: Duration = Duration::from_millis(TOAST_ENTER_DURATION_MS);

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Fire due timers.
    Tick,
    /// The action button of a notification was pressed.
    Action { id: NotificationId, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Expire,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    kind: TimerKind,
    due: Instant,
}

/// A notification on screen, with its lifecycle state.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    id: NotificationId,
    notification: Notification,
    position: Position,
    phase: Phase,
    shown_at: Instant,
    leaving_since: Option<Instant>,
    timer: Option<Timer>,
}

impl ActiveNotification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Anchor the notification is rendered at.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Visibility factor in `0.0..=1.0` for fade transitions.
    #[must_use]
    pub fn presence(&self, now: Instant) -> f32 {
        match (self.phase, self.leaving_since) {
            (Phase::Leaving, Some(since)) => {
                1.0 - progress(now.saturating_duration_since(since), LEAVE_DURATION)
            }
            (Phase::Leaving, None) => 0.0,
            (Phase::Visible, _) => {
                progress(now.saturating_duration_since(self.shown_at), ENTER_DURATION)
            }
        }
    }

    /// Arms a timer unless one of the same kind is already live.
    ///
    /// Arming a different kind replaces the current timer.
    fn arm(&mut self, kind: TimerKind, due: Instant) -> bool {
        if matches!(self.timer, Some(timer) if timer.kind == kind) {
            tracing::debug!(id = %self.id, ?kind, "timer already armed, ignoring");
            return false;
        }
        self.timer = Some(Timer { kind, due });
        true
    }

    fn begin_leaving(&mut self, at: Instant) {
        self.phase = Phase::Leaving;
        self.leaving_since = Some(at);
        self.arm(TimerKind::Remove, at + LEAVE_DURATION);
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

type DismissObserver = Box<dyn FnMut(&NotificationId)>;

/// Manages the notifications of one delivery surface.
pub struct Manager {
    /// Active notifications in insertion order.
    active: Vec<ActiveNotification>,
    clock: Box<dyn Clock>,
    position: Position,
    default_duration: Duration,
    on_dismiss: Option<DismissObserver>,
    mounted: bool,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("active", &self.active)
            .field("position", &self.position)
            .field("default_duration", &self.default_duration)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager driven by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty manager driven by `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            active: Vec::new(),
            clock: Box::new(clock),
            position: Position::default(),
            default_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            on_dismiss: None,
            mounted: true,
        }
    }

    /// Sets the anchor used by notifications that don't override it.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the duration used by notifications that don't set one.
    #[must_use]
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Registers the observer called with each id when it is removed.
    ///
    /// The observer runs while the manager is borrowed and must not call
    /// back into the same surface.
    pub fn set_on_dismiss(&mut self, observer: impl FnMut(&NotificationId) + 'static) {
        self.on_dismiss = Some(Box::new(observer));
    }

    #[must_use]
    pub fn surface_position(&self) -> Position {
        self.position
    }

    pub fn set_surface_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Current time according to the injected clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Enqueues a notification and returns its fresh id.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        if !self.mounted {
            tracing::debug!("toast surface re-mounted");
            self.mounted = true;
        }

        let now = self.clock.now();
        let id = NotificationId::next();
        let duration = notification
            .requested_duration()
            .unwrap_or(self.default_duration);
        let position = notification.position_override().unwrap_or(self.position);

        let mut entry = ActiveNotification {
            id,
            notification,
            position,
            phase: Phase::Visible,
            shown_at: now,
            leaving_since: None,
            timer: None,
        };
        if !duration.is_zero() {
            entry.arm(TimerKind::Expire, now + duration);
        }

        tracing::debug!(%id, severity = entry.notification.severity().as_str(), ?duration, "toast shown");
        self.active.push(entry);
        id
    }

    /// Starts the leave transition of a visible notification.
    ///
    /// Returns `false` if the id is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        match self.active.iter_mut().find(|entry| entry.id == id) {
            Some(entry) if entry.phase == Phase::Visible => {
                entry.begin_leaving(now);
                tracing::debug!(%id, "toast dismissed");
                true
            }
            _ => false,
        }
    }

    /// Removes every notification at once and cancels all timers.
    ///
    /// No leave transition runs and the dismiss observer is not called.
    pub fn dismiss_all(&mut self) {
        if !self.active.is_empty() {
            tracing::debug!(count = self.active.len(), "all toasts cleared");
        }
        self.active.clear();
    }

    /// Fires every due timer in due order.
    ///
    /// Transitions are computed from each timer's due instant, so a late
    /// call yields the same schedule as a punctual one. Returns the ids
    /// removed by this call.
    pub fn advance(&mut self) -> Vec<NotificationId> {
        let mut removed = Vec::new();
        if !self.mounted {
            return removed;
        }
        let now = self.clock.now();

        while let Some((index, timer)) = self.earliest_due(now) {
            let entry = &mut self.active[index];
            entry.timer = None;
            match timer.kind {
                TimerKind::Expire => {
                    entry.begin_leaving(timer.due);
                    tracing::debug!(id = %entry.id, "toast expired");
                }
                TimerKind::Remove => {
                    let entry = self.active.remove(index);
                    tracing::debug!(id = %entry.id, "toast removed");
                    if let Some(observer) = self.on_dismiss.as_mut() {
                        observer(&entry.id);
                    }
                    removed.push(entry.id);
                }
            }
        }
        removed
    }

    fn earliest_due(&self, now: Instant) -> Option<(usize, Timer)> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.timer.map(|timer| (index, timer)))
            .filter(|(_, timer)| timer.due <= now)
            .min_by_key(|(_, timer)| timer.due)
    }

    /// Unmounts the surface: cancels all timers and clears the active set.
    pub fn shutdown(&mut self) {
        self.active.clear();
        self.mounted = false;
        tracing::debug!("toast surface shut down");
    }

    /// Handles a notification message, returning the ids removed by it.
    ///
    /// `Action` is routed back to the caller and leaves the state untouched.
    pub fn handle_message(&mut self, message: &Message) -> Vec<NotificationId> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
                Vec::new()
            }
            Message::Tick => self.advance(),
            Message::Action { .. } => Vec::new(),
        }
    }

    /// Active notifications in insertion order.
    pub fn notifications(&self) -> impl Iterator<Item = &ActiveNotification> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&ActiveNotification> {
        self.active.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether any timer is armed.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.active.iter().any(|entry| entry.timer.is_some())
    }

    /// Whether any visible entry is still fading in.
    ///
    /// Persistent toasts arm no timer, so hosts must keep redrawing while
    /// this holds or the card stays at its first, transparent frame.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let now = self.clock.now();
        self.active.iter().any(|entry| {
            entry.phase == Phase::Visible
                && now.saturating_duration_since(entry.shown_at) < ENTER_DURATION
        })
    }

    /// Whether the host needs to keep ticking: a timer is armed or a fade is running.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.has_pending_timers() || self.is_animating()
    }

    /// Due instant of the next timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.active
            .iter()
            .filter_map(|entry| entry.timer.map(|timer| timer.due))
            .min()
    }

    /// Anchors with at least one notification, in first-use order.
    #[must_use]
    pub fn positions_in_use(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for entry in &self.active {
            if !positions.contains(&entry.position) {
                positions.push(entry.position);
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn manager() -> (Manager, ManualClock) {
        let clock = ManualClock::new();
        (Manager::with_clock(clock.clone()), clock)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn push_appends_in_insertion_order() {
        let (mut manager, _) = manager();
        let first = manager.push(Notification::info("first"));
        let second = manager.push(Notification::info("second"));

        let order: Vec<NotificationId> = manager.notifications().map(|n| n.id()).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn push_uses_default_duration() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::info("hi"));

        clock.advance(ms(4999));
        manager.advance();
        assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Visible));

        clock.advance(ms(1));
        manager.advance();
        assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Leaving));
    }

    #[test]
    fn configured_default_duration_applies() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone()).default_duration(ms(1000));
        let id = manager.push(Notification::info("hi"));

        clock.advance(ms(1000));
        manager.advance();
        assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Leaving));
    }

    #[test]
    fn dismiss_starts_leave_transition() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::info("hi").persistent());

        assert!(manager.dismiss(id));
        assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Leaving));

        clock.advance(ms(299));
        assert!(manager.advance().is_empty());

        clock.advance(ms(1));
        assert_eq!(manager.advance(), vec![id]);
        assert!(manager.is_empty());
    }

    #[test]
    fn double_dismiss_is_idempotent() {
        let (mut manager, clock) = manager();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        manager.set_on_dismiss(move |id| sink.borrow_mut().push(*id));

        let id = manager.push(Notification::info("hi"));
        assert!(manager.dismiss(id));
        clock.advance(ms(100));
        assert!(!manager.dismiss(id));

        clock.advance(ms(200));
        manager.advance();
        assert_eq!(*calls.borrow(), vec![id]);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (mut manager, _) = manager();
        manager.push(Notification::info("kept"));
        let stranger = NotificationId::next();

        assert!(!manager.dismiss(stranger));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn dismiss_all_skips_transition_and_observer() {
        let (mut manager, clock) = manager();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        manager.set_on_dismiss(move |_| *sink.borrow_mut() += 1);

        for i in 0..3 {
            manager.push(Notification::info(format!("toast {i}")));
        }
        manager.dismiss_all();

        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
        clock.advance(ms(10_000));
        assert!(manager.advance().is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn late_tick_keeps_schedule() {
        let (mut manager, clock) = manager();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        manager.set_on_dismiss(move |_| *sink.borrow_mut() += 1);
        let id = manager.push(Notification::info("hi").duration(ms(1000)));

        clock.advance(ms(1250));
        manager.advance();
        // Leaving since 1000, so removal is still due at 1300.
        assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Leaving));

        clock.advance(ms(50));
        assert_eq!(manager.advance(), vec![id]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn very_late_tick_fires_both_transitions() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::info("hi").duration(ms(1000)));

        clock.advance(ms(5000));
        assert_eq!(manager.advance(), vec![id]);
    }

    #[test]
    fn timers_fire_in_due_order() {
        let (mut manager, clock) = manager();
        let order = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&order);
        manager.set_on_dismiss(move |id| sink.borrow_mut().push(*id));

        let slow = manager.push(Notification::info("slow").duration(ms(2000)));
        let fast = manager.push(Notification::info("fast").duration(ms(500)));

        clock.advance(ms(5000));
        manager.advance();
        assert_eq!(*order.borrow(), vec![fast, slow]);
    }

    #[test]
    fn duplicate_arming_is_ignored() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::info("hi").duration(ms(1000)));

        let entry = manager
            .active
            .iter_mut()
            .find(|entry| entry.id == id)
            .unwrap();
        let later = clock.now() + ms(9000);
        assert!(!entry.arm(TimerKind::Expire, later));
        assert_eq!(entry.timer.map(|t| t.due), Some(clock.now() + ms(1000)));
    }

    #[test]
    fn persistent_toast_has_no_timer() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::warning("stay").persistent());

        assert!(!manager.has_pending_timers());
        clock.advance(ms(60_000));
        manager.advance();
        assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Visible));
    }

    #[test]
    fn persistent_toast_keeps_ticking_until_faded_in() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::success("Saved").persistent());

        assert!(manager.is_animating());
        assert!(manager.needs_tick());

        clock.advance(ENTER_DURATION - ms(1));
        assert!(manager.needs_tick());

        clock.advance(ms(1));
        assert!(!manager.is_animating());
        assert!(!manager.needs_tick());
        let entry = manager.get(id).unwrap();
        assert_eq!(entry.presence(clock.now()), 1.0);
    }

    #[test]
    fn leaving_entry_is_not_fading_in() {
        let (mut manager, _) = manager();
        let id = manager.push(Notification::info("bye").persistent());
        manager.dismiss(id);

        assert!(!manager.is_animating());
        assert!(manager.needs_tick());
    }

    #[test]
    fn shutdown_cancels_everything() {
        let (mut manager, clock) = manager();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        manager.set_on_dismiss(move |_| *sink.borrow_mut() += 1);
        let id = manager.push(Notification::info("hi"));
        manager.dismiss(id);

        manager.shutdown();
        clock.advance(ms(1000));

        assert!(!manager.is_mounted());
        assert!(manager.advance().is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn push_after_shutdown_remounts() {
        let (mut manager, _) = manager();
        manager.shutdown();
        manager.push(Notification::info("back"));
        assert!(manager.is_mounted());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn presence_fades_in_and_out() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::info("hi").persistent());
        let start = clock.now();

        let entry = manager.get(id).unwrap();
        assert_eq!(entry.presence(start), 0.0);
        assert_eq!(entry.presence(start + ENTER_DURATION), 1.0);

        clock.advance(ENTER_DURATION);
        manager.dismiss(id);
        let leaving_at = clock.now();
        let entry = manager.get(id).unwrap();
        assert_eq!(entry.presence(leaving_at), 1.0);
        assert_eq!(entry.presence(leaving_at + LEAVE_DURATION), 0.0);
    }

    #[test]
    fn position_override_and_layers() {
        let (mut manager, _) = manager();
        manager.set_surface_position(Position::TopRight);
        manager.push(Notification::info("a"));
        manager.push(Notification::info("b").position(Position::BottomCenter));
        manager.push(Notification::info("c"));

        assert_eq!(
            manager.positions_in_use(),
            vec![Position::TopRight, Position::BottomCenter]
        );
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let (mut manager, clock) = manager();
        let id = manager.push(Notification::info("hi"));

        assert!(manager.handle_message(&Message::Dismiss(id)).is_empty());
        let action = Message::Action {
            id,
            key: "undo".into(),
        };
        assert!(manager.handle_message(&action).is_empty());

        clock.advance(LEAVE_DURATION);
        assert_eq!(manager.handle_message(&Message::Tick), vec![id]);
    }
}
