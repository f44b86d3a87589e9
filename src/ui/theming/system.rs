// SPDX-License-Identifier: MPL-2.0
//! OS color-scheme preference.
//!
//! [`SystemPreference`] reads the current preference. [`SystemWatcher`] is the
//! explicit change registration: while registered it reports each observed
//! change once; after [`SystemWatcher::unregister`] it reports nothing.

use super::Appearance;
use std::cell::Cell;
use std::rc::Rc;

/// Source of the OS-reported color scheme.
pub trait SystemPreference {
    fn appearance(&self) -> Appearance;
}

/// Reads the preference from the desktop environment via `dark-light`.
///
/// Anything other than an explicit light preference, including a detection
/// error, resolves to dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPreference;

impl SystemPreference for OsPreference {
    fn appearance(&self) -> Appearance {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Appearance::Light,
            Ok(_) => Appearance::Dark,
            Err(error) => {
                tracing::debug!(%error, "color scheme detection failed, assuming dark");
                Appearance::Dark
            }
        }
    }
}

/// Preference controlled by the host, shared between clones.
///
/// Used to simulate OS changes in tests and previews.
#[derive(Debug, Clone)]
pub struct ManualPreference {
    current: Rc<Cell<Appearance>>,
}

impl ManualPreference {
    #[must_use]
    pub fn new(appearance: Appearance) -> Self {
        Self {
            current: Rc::new(Cell::new(appearance)),
        }
    }

    pub fn set(&self, appearance: Appearance) {
        self.current.set(appearance);
    }
}

impl SystemPreference for ManualPreference {
    fn appearance(&self) -> Appearance {
        self.current.get()
    }
}

/// Registration for OS preference change notifications.
#[derive(Debug, Clone, Default)]
pub struct SystemWatcher {
    registered: bool,
    last_seen: Option<Appearance>,
}

impl SystemWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing, with `current` as the baseline.
    pub fn register(&mut self, current: Appearance) {
        self.registered = true;
        self.last_seen = Some(current);
    }

    /// Stops observing. Later observations are ignored.
    pub fn unregister(&mut self) {
        self.registered = false;
        self.last_seen = None;
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Records an observation; returns `true` when it is a change to report.
    pub fn observe(&mut self, appearance: Appearance) -> bool {
        if !self.registered || self.last_seen == Some(appearance) {
            return false;
        }
        self.last_seen = Some(appearance);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_preference_is_shared_between_clones() {
        let preference = ManualPreference::new(Appearance::Light);
        let handle = preference.clone();
        handle.set(Appearance::Dark);
        assert_eq!(preference.appearance(), Appearance::Dark);
    }

    #[test]
    fn os_preference_does_not_panic() {
        let _ = OsPreference.appearance();
    }

    #[test]
    fn unregistered_watcher_reports_nothing() {
        let mut watcher = SystemWatcher::new();
        assert!(!watcher.observe(Appearance::Dark));
    }

    #[test]
    fn watcher_reports_each_change_once() {
        let mut watcher = SystemWatcher::new();
        watcher.register(Appearance::Light);

        assert!(!watcher.observe(Appearance::Light));
        assert!(watcher.observe(Appearance::Dark));
        assert!(!watcher.observe(Appearance::Dark));
        assert!(watcher.observe(Appearance::Light));
    }

    #[test]
    fn unregister_stops_reports() {
        let mut watcher = SystemWatcher::new();
        watcher.register(Appearance::Light);
        watcher.unregister();

        assert!(!watcher.is_registered());
        assert!(!watcher.observe(Appearance::Dark));
    }
}
