// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::inputs::text_input;
use crate::ui::notifications::{NotificationMessage, Position, Severity};
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Text fields on the demo page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Password,
    Search,
    Email,
    Username,
    Small,
    Medium,
    Large,
}

/// Checkboxes on the demo page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Default,
    WithHelp,
    Error,
    Disabled,
    Small,
    Medium,
    Large,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(ThemeMode),
    /// Periodic re-read of the OS color scheme.
    SystemThemePoll(Instant),
    Toast(NotificationMessage),
    /// Drives toast timers while any are pending.
    ToastTick(Instant),
    ShowToast(Severity),
    ShowPersistentToast,
    ShowActionToast,
    DismissAllToasts,
    ToastPositionSelected(Position),
    Input(Field, text_input::Message),
    ToggleEmailError,
    Checked(Choice, bool),
    /// Parent checkbox of the indeterminate group.
    AllOptionsToggled(bool),
    OptionToggled(usize, bool),
    AlertDismissed(Severity),
    ResetAlerts,
    CloseRequested(iced::window::Id),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides `[theme].default_mode`.
    pub theme: Option<ThemeMode>,
    /// Overrides `[toasts].position`.
    pub position: Option<Position>,
}
