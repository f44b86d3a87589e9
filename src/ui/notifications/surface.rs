// SPDX-License-Identifier: MPL-2.0
//! Delivery surface handles.
//!
//! A [`ToastSurface`] is the shared handle to one mounted [`Manager`]. The
//! view layer renders it and the update loop drives it. A [`Toaster`] is the
//! facade handed to code outside the view tree: it is created unbound, bound
//! to a surface once one exists, and forwards enqueue and dismiss calls.

use super::manager::Manager;
use super::notification::{Notification, NotificationId, Severity};
use crate::error::{Error, Result};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Shared single-threaded handle to a delivery surface.
#[derive(Debug, Clone, Default)]
pub struct ToastSurface(Rc<RefCell<Manager>>);

impl ToastSurface {
    #[must_use]
    pub fn new(manager: Manager) -> Self {
        Self(Rc::new(RefCell::new(manager)))
    }

    /// Borrows the manager for reading.
    ///
    /// # Panics
    ///
    /// Panics if the manager is currently borrowed mutably.
    #[must_use]
    pub fn manager(&self) -> Ref<'_, Manager> {
        self.0.borrow()
    }

    /// Borrows the manager for writing.
    ///
    /// # Panics
    ///
    /// Panics if the manager is currently borrowed.
    #[must_use]
    pub fn manager_mut(&self) -> RefMut<'_, Manager> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same surface.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Facade for enqueueing toasts from anywhere in the application.
///
/// Clones share the same binding. Calls made while unbound are logged and
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    surface: Rc<RefCell<Option<ToastSurface>>>,
}

impl Toaster {
    const NAME: &'static str = "Toaster";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the facade to `surface`, replacing any previous binding.
    pub fn bind(&self, surface: &ToastSurface) {
        if self.surface.replace(Some(surface.clone())).is_some() {
            tracing::debug!("toaster rebound to a new surface");
        }
    }

    pub fn unbind(&self) {
        self.surface.replace(None);
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.surface.borrow().is_some()
    }

    /// The bound surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unbound`] if no surface has been bound.
    pub fn surface(&self) -> Result<ToastSurface> {
        self.surface.borrow().clone().ok_or(Error::Unbound(Self::NAME))
    }

    fn bound(&self, operation: &str) -> Option<ToastSurface> {
        let surface = self.surface.borrow().clone();
        if surface.is_none() {
            tracing::error!(operation, "{}", Error::Unbound(Self::NAME));
        }
        surface
    }

    /// Enqueues a notification. Returns `None` when unbound.
    pub fn show(&self, notification: Notification) -> Option<NotificationId> {
        let surface = self.bound("show")?;
        let id = surface.manager_mut().push(notification);
        Some(id)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(Notification::new(Severity::Info, message))
    }

    pub fn success(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(Notification::new(Severity::Success, message))
    }

    pub fn warning(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(Notification::new(Severity::Warning, message))
    }

    pub fn error(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(Notification::new(Severity::Error, message))
    }

    /// Starts the leave transition of `id`. Returns `false` when unbound or unknown.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.bound("dismiss")
            .is_some_and(|surface| surface.manager_mut().dismiss(id))
    }

    pub fn dismiss_all(&self) {
        if let Some(surface) = self.bound("dismiss_all") {
            surface.manager_mut().dismiss_all();
        }
    }
}
