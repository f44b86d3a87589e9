// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Timers only run while they have work: the toast tick while any toast
//! timer is armed or a toast is fading in, the color scheme poll while the
//! OS watcher is registered.

use super::{App, Message};
use crate::config::{SYSTEM_THEME_POLL_INTERVAL_MS, TOAST_TICK_INTERVAL_MS};
use iced::{event, time, Subscription};
use std::time::Duration;

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            create_event_subscription(),
            create_toast_subscription(self.toast_surface().manager().needs_tick()),
            create_system_theme_subscription(self.theme_store().is_watching()),
        ])
    }
}

/// Routes window close requests so teardown runs before the window goes away.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::CloseRequested(window_id));
        }
        None
    })
}

/// Drives toast fades, expiry and removal while any of them is in progress.
pub fn create_toast_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(Duration::from_millis(TOAST_TICK_INTERVAL_MS)).map(Message::ToastTick)
    } else {
        Subscription::none()
    }
}

/// Re-reads the OS color scheme while the watcher is registered.
pub fn create_system_theme_subscription(is_watching: bool) -> Subscription<Message> {
    if is_watching {
        time::every(Duration::from_millis(SYSTEM_THEME_POLL_INTERVAL_MS))
            .map(Message::SystemThemePoll)
    } else {
        Subscription::none()
    }
}
