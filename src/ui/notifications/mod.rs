// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` content, `Severity`, `Position`, ids
//! - [`clock`] - Injected time source for timers
//! - [`manager`] - `Manager`, lifecycle and timers of one delivery surface
//! - [`surface`] - `ToastSurface` shared handle and the `Toaster` facade
//! - [`toast`] - Widgets rendering the active notifications
//!
//! # Usage
//!
//! ```
//! use iced_swatch::ui::notifications::{Manager, ToastSurface, Toaster};
//!
//! let surface = ToastSurface::new(Manager::new());
//! let toaster = Toaster::new();
//! toaster.bind(&surface);
//!
//! let id = toaster.success("Profile saved");
//! assert!(id.is_some());
//! assert_eq!(surface.manager().len(), 1);
//! ```

pub mod clock;
pub mod manager;
pub mod notification;
pub mod surface;
pub mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{
    ActiveNotification, Manager, Message as NotificationMessage, Phase, ENTER_DURATION,
    LEAVE_DURATION,
};
pub use notification::{
    Notification, NotificationAction, NotificationId, Position, Severity, UnknownPosition,
};
pub use surface::{ToastSurface, Toaster};
