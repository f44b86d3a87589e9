// SPDX-License-Identifier: MPL-2.0
//! End-to-end toast delivery through the `Toaster` facade with a virtual clock.

use iced_swatch::error::Error;
use iced_swatch::ui::notifications::{
    toast, Manager, ManualClock, Notification, NotificationId, NotificationMessage, Phase,
    Position, Severity, ToastSurface, Toaster, LEAVE_DURATION,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn mounted(clock: &ManualClock) -> (ToastSurface, Toaster, Rc<RefCell<Vec<NotificationId>>>) {
    let dismissed = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&dismissed);

    let mut manager = Manager::with_clock(clock.clone()).default_duration(Duration::from_secs(5));
    manager.set_on_dismiss(move |id| log.borrow_mut().push(*id));

    let surface = ToastSurface::new(manager);
    let toaster = Toaster::new();
    toaster.bind(&surface);
    (surface, toaster, dismissed)
}

#[test]
fn unbound_toaster_reports_error() {
    let toaster = Toaster::new();
    assert_eq!(toaster.surface().err(), Some(Error::Unbound("Toaster")));
    assert_eq!(toaster.info("lost"), None);

    let elsewhere = ToastSurface::new(Manager::new());
    let id = elsewhere.manager_mut().push(Notification::info("elsewhere"));
    assert!(!toaster.dismiss(id));
    assert_eq!(elsewhere.manager().len(), 1);
}

#[test]
fn auto_dismiss_runs_full_lifecycle() {
    let clock = ManualClock::new();
    let (surface, toaster, dismissed) = mounted(&clock);

    let shown_at = surface.manager().now();
    let id = toaster.success("Saved").expect("toaster is bound");
    assert_eq!(surface.manager().get(id).map(|n| n.phase()), Some(Phase::Visible));
    assert_eq!(surface.manager().next_due(), Some(shown_at + Duration::from_secs(5)));

    clock.advance(Duration::from_millis(4_999));
    assert!(surface.manager_mut().advance().is_empty());

    clock.advance(Duration::from_millis(1));
    surface.manager_mut().advance();
    assert_eq!(surface.manager().get(id).map(|n| n.phase()), Some(Phase::Leaving));
    assert!(dismissed.borrow().is_empty());

    clock.advance(LEAVE_DURATION);
    assert_eq!(surface.manager_mut().advance(), vec![id]);
    assert_eq!(*dismissed.borrow(), vec![id]);
    assert!(surface.manager().is_empty());
}

#[test]
fn late_tick_catches_up_in_one_call() {
    let clock = ManualClock::new();
    let (surface, toaster, dismissed) = mounted(&clock);

    let first = toaster.info("first").expect("bound");
    let second = toaster
        .show(Notification::info("second").duration(Duration::from_secs(1)))
        .expect("bound");

    clock.advance(Duration::from_secs(60));
    let removed = surface.manager_mut().advance();

    assert_eq!(removed, vec![second, first]);
    assert_eq!(*dismissed.borrow(), vec![second, first]);
}

#[test]
fn persistent_toast_needs_explicit_dismissal() {
    let clock = ManualClock::new();
    let (surface, toaster, dismissed) = mounted(&clock);

    let id = toaster
        .show(Notification::error("Upload failed").persistent())
        .expect("bound");
    clock.advance(Duration::from_secs(3_600));
    surface.manager_mut().advance();
    assert_eq!(surface.manager().get(id).map(|n| n.phase()), Some(Phase::Visible));

    surface
        .manager_mut()
        .handle_message(&NotificationMessage::Dismiss(id));
    clock.advance(LEAVE_DURATION);
    surface.manager_mut().advance();

    assert_eq!(*dismissed.borrow(), vec![id]);
}

#[test]
fn dismiss_all_clears_immediately_without_callbacks() {
    let clock = ManualClock::new();
    let (surface, toaster, dismissed) = mounted(&clock);

    for severity in Severity::ALL {
        toaster.show(Notification::new(severity, severity.as_str()));
    }
    assert_eq!(surface.manager().len(), 4);

    toaster.dismiss_all();
    assert!(surface.manager().is_empty());
    assert!(!surface.manager().has_pending_timers());

    clock.advance(Duration::from_secs(10));
    assert!(surface.manager_mut().advance().is_empty());
    assert!(dismissed.borrow().is_empty());
}

#[test]
fn toasts_group_by_anchor() {
    let clock = ManualClock::new();
    let (surface, toaster, _) = mounted(&clock);

    toaster.info("default anchor");
    toaster.show(Notification::warning("pinned").position(Position::TopLeft));
    toaster.info("another default");

    let manager = surface.manager();
    let layers = toast::layers(&manager);
    let summary: Vec<(Position, usize)> = layers
        .iter()
        .map(|(position, entries)| (*position, entries.len()))
        .collect();
    assert_eq!(
        summary,
        vec![(Position::BottomRight, 2), (Position::TopLeft, 1)]
    );
}

#[test]
fn shutdown_then_push_remounts() {
    let clock = ManualClock::new();
    let (surface, toaster, dismissed) = mounted(&clock);

    toaster.info("before");
    surface.manager_mut().shutdown();
    assert!(!surface.manager().is_mounted());
    assert!(surface.manager().is_empty());

    let id = toaster.info("after").expect("bound");
    assert!(surface.manager().is_mounted());

    clock.advance(Duration::from_secs(5) + LEAVE_DURATION);
    surface.manager_mut().advance();
    assert_eq!(*dismissed.borrow(), vec![id]);
}

#[test]
fn rebinding_moves_all_clones() {
    let clock = ManualClock::new();
    let (first, toaster, _) = mounted(&clock);
    let clone = toaster.clone();

    let second = ToastSurface::new(Manager::with_clock(clock.clone()));
    toaster.bind(&second);
    clone.info("goes to the second surface");

    assert!(first.manager().is_empty());
    assert_eq!(second.manager().len(), 1);
}
