// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` content, its `Severity`, the
//! screen anchor `Position`, and the `NotificationId` assigned at enqueue.

use crate::ui::design_tokens::palette;
use iced::{alignment, Color};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Combines a process-wide sequence number with a random nonce, so ids stay
/// distinct across surfaces and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId {
    seq: u64,
    nonce: u32,
}

impl NotificationId {
    /// Allocates the next id.
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self {
            seq: COUNTER.fetch_add(1, Ordering::Relaxed),
            nonce: rand::rng().random(),
        }
    }

    /// Position of this id in the global allocation order.
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.seq
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}-{:08x}", self.seq, self.nonce)
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Screen anchor of a toast layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    TopCenter,
    BottomCenter,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::TopCenter => "top-center",
            Position::BottomCenter => "bottom-center",
        }
    }

    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
            Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        }
    }

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        match self {
            Position::TopLeft | Position::TopRight | Position::TopCenter => {
                alignment::Vertical::Top
            }
            Position::BottomLeft | Position::BottomRight | Position::BottomCenter => {
                alignment::Vertical::Bottom
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toast position '{}'", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == normalized)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

/// Caller-owned action rendered as a button inside the toast.
///
/// Pressing it emits the `key` back to the caller together with the toast id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    pub label: String,
    pub key: String,
}

/// Content of a notification, before it is enqueued.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    title: Option<String>,
    message: String,
    severity: Severity,
    /// `None` uses the surface default; zero never expires.
    duration: Option<Duration>,
    dismissible: bool,
    action: Option<NotificationAction>,
    position: Option<Position>,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            severity,
            duration: None,
            dismissible: true,
            action: None,
            position: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the auto-dismiss delay. `Duration::ZERO` keeps the toast until dismissed.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the toast until it is dismissed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, key: impl Into<String>) -> Self {
        self.action = Some(NotificationAction {
            label: label.into(),
            key: key.into(),
        });
        self
    }

    /// Overrides the surface anchor for this toast.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn requested_duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn action_content(&self) -> Option<&NotificationAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn position_override(&self) -> Option<Position> {
        self.position
    }
}
