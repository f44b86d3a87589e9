// SPDX-License-Identifier: MPL-2.0
//! Process-wide theme state.
//!
//! The store owns the selected [`ThemeMode`], its persistence, the resolved
//! [`Appearance`], and the document root marker that reflects it.
//!
//! Mode resolution on [`ThemeStore::init`]:
//! 1. persisted value under the configured storage key
//! 2. the configured default mode
//! 3. for [`ThemeMode::System`], the OS-reported preference

use super::{Appearance, DocumentRoot, PreferenceStorage, SystemPreference, SystemWatcher, ThemeMode};
use crate::config::ThemeConfig;
use std::fmt;

pub struct ThemeStore {
    mode: ThemeMode,
    appearance: Appearance,
    storage_key: String,
    storage: Box<dyn PreferenceStorage>,
    system: Box<dyn SystemPreference>,
    root: DocumentRoot,
    watcher: SystemWatcher,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("appearance", &self.appearance)
            .field("storage_key", &self.storage_key)
            .field("watching", &self.watcher.is_registered())
            .finish()
    }
}

impl ThemeStore {
    /// Resolves the initial mode, applies it, and starts watching the OS preference.
    pub fn init(
        options: &ThemeConfig,
        storage: impl PreferenceStorage + 'static,
        system: impl SystemPreference + 'static,
    ) -> Self {
        let storage: Box<dyn PreferenceStorage> = Box::new(storage);
        let system: Box<dyn SystemPreference> = Box::new(system);

        let mode = read_persisted(storage.as_ref(), &options.storage_key)
            .unwrap_or(options.default_mode);
        let appearance = mode.resolve(system.as_ref());

        let mut watcher = SystemWatcher::new();
        watcher.register(system.appearance());

        let mut store = Self {
            mode,
            appearance,
            storage_key: options.storage_key.clone(),
            storage,
            system,
            root: DocumentRoot::new(),
            watcher,
        };
        store.root.apply(appearance);
        store.persist();

        tracing::debug!(%mode, ?appearance, "theme store initialized");
        store
    }

    /// Selected mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Effective appearance.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    #[must_use]
    pub fn root(&self) -> &DocumentRoot {
        &self.root
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Whether OS preference changes are being observed.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watcher.is_registered()
    }

    /// Selects a mode, persists it, and applies the resolved appearance.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist();
        self.apply(mode.resolve(self.system.as_ref()));
        tracing::debug!(%mode, appearance = ?self.appearance, "theme changed");
    }

    /// Handles an OS preference change notification.
    ///
    /// Returns `true` if the effective appearance changed.
    pub fn system_changed(&mut self, appearance: Appearance) -> bool {
        if !self.watcher.observe(appearance) || self.mode != ThemeMode::System {
            return false;
        }
        self.apply(appearance)
    }

    /// Re-reads the OS preference and handles any change.
    pub fn poll_system(&mut self) -> bool {
        let appearance = self.system.appearance();
        self.system_changed(appearance)
    }

    /// Stops observing OS preference changes.
    pub fn shutdown(&mut self) {
        if self.watcher.is_registered() {
            self.watcher.unregister();
            tracing::debug!("theme store stopped watching the system preference");
        }
    }

    fn apply(&mut self, appearance: Appearance) -> bool {
        let changed = self.appearance != appearance;
        self.appearance = appearance;
        self.root.apply(appearance);
        changed
    }

    fn persist(&mut self) {
        if let Err(error) = self.storage.set(&self.storage_key, self.mode.as_str()) {
            tracing::warn!(key = %self.storage_key, %error, "failed to persist theme");
        }
    }
}

fn read_persisted(storage: &dyn PreferenceStorage, key: &str) -> Option<ThemeMode> {
    match storage.get(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(mode) => Some(mode),
            Err(error) => {
                tracing::warn!(key, %error, "ignoring persisted theme");
                None
            }
        },
        Ok(None) => None,
        Err(error) => {
            tracing::warn!(key, %error, "failed to read persisted theme");
            None
        }
    }
}
