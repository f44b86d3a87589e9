// SPDX-License-Identifier: MPL-2.0
//! Application root state for the design-system demo page.
//!
//! The `App` owns the theme store and one toast delivery surface, binds a
//! `Toaster` facade to that surface, and keeps the local state of the demo
//! widgets. Teardown (window close) stops the OS preference watcher and
//! cancels every toast timer before the window goes away.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Choice, Field, Flags, Message};

use crate::config::{self, Config};
use crate::ui::inputs::text_input;
use crate::ui::notifications::{
    Manager, Notification, NotificationId, NotificationMessage, Severity, ToastSurface, Toaster,
};
use crate::ui::theming::{FileStorage, MemoryStorage, OsPreference, PreferenceStorage, ThemeStore};
use iced::{window, Task, Theme};
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Number of children in the indeterminate checkbox group.
pub const GROUP_SIZE: usize = 3;

/// Root Iced application state.
pub struct App {
    theme: ThemeStore,
    toasts: ToastSurface,
    toaster: Toaster,
    /// Toasts removed after their leave transition, counted by the dismiss observer.
    removed_toasts: Rc<Cell<usize>>,
    last_action: Option<String>,
    fields: HashMap<Field, text_input::State>,
    email_error: bool,
    choices: HashSet<Choice>,
    group: [bool; GROUP_SIZE],
    hidden_alerts: HashSet<Severity>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("toasts", &self.toasts.manager().len())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, applies launcher overrides, and mounts the
    /// theme store and the toast surface.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        apply_flags(&mut config, &flags);

        let storage: Box<dyn PreferenceStorage> = match FileStorage::in_config_dir(None) {
            Some(storage) => Box::new(storage),
            None => {
                tracing::warn!("no config directory available, theme choice will not persist");
                Box::new(MemoryStorage::new())
            }
        };
        let app = Self::with_parts(
            ThemeStore::init(&config.theme, storage, OsPreference),
            configured_manager(Manager::new(), &config),
        );

        if let Some(warning) = config_warning {
            app.toaster.show(
                Notification::warning(warning)
                    .title("Configuration")
                    .persistent(),
            );
        }

        (app, Task::none())
    }

    /// Assembles the application from an initialized store and a toast manager.
    ///
    /// The manager is used as given: its anchor and default duration are kept.
    /// Only its dismiss observer is replaced by the app's removal counter.
    pub fn with_parts(theme: ThemeStore, mut manager: Manager) -> Self {
        let removed_toasts = Rc::new(Cell::new(0));
        let counter = Rc::clone(&removed_toasts);
        manager.set_on_dismiss(move |id: &NotificationId| {
            counter.set(counter.get() + 1);
            tracing::debug!(%id, "toast dismissed by observer");
        });

        let toasts = ToastSurface::new(manager);
        let toaster = Toaster::new();
        toaster.bind(&toasts);

        Self {
            theme,
            toasts,
            toaster,
            removed_toasts,
            last_action: None,
            fields: HashMap::new(),
            email_error: true,
            choices: HashSet::new(),
            group: [true, false, false],
            hidden_alerts: HashSet::new(),
        }
    }

    fn title(&self) -> String {
        String::from("Design System")
    }

    fn theme(&self) -> Theme {
        self.theme.appearance().theme()
    }

    /// Facade for enqueueing toasts.
    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    #[must_use]
    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme
    }

    #[must_use]
    pub fn toast_surface(&self) -> &ToastSurface {
        &self.toasts
    }

    #[must_use]
    pub fn removed_toasts(&self) -> usize {
        self.removed_toasts.get()
    }

    #[must_use]
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> Option<&text_input::State> {
        self.fields.get(&field)
    }

    #[must_use]
    pub fn is_checked(&self, choice: Choice) -> bool {
        self.choices.contains(&choice)
    }

    #[must_use]
    pub fn group(&self) -> [bool; GROUP_SIZE] {
        self.group
    }

    /// Parent state of the checkbox group: `(checked, indeterminate)`.
    #[must_use]
    pub fn group_state(&self) -> (bool, bool) {
        let all = self.group.iter().all(|&checked| checked);
        let any = self.group.iter().any(|&checked| checked);
        (all, any && !all)
    }

    #[must_use]
    pub fn is_alert_visible(&self, severity: Severity) -> bool {
        !self.hidden_alerts.contains(&severity)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeSelected(mode) => {
                self.theme.set_theme(mode);
            }
            Message::SystemThemePoll(_instant) => {
                if self.theme.poll_system() {
                    tracing::debug!(
                        appearance = ?self.theme.appearance(),
                        "following system color scheme"
                    );
                }
            }
            Message::Toast(toast_message) => {
                if let NotificationMessage::Action { id, key } = &toast_message {
                    tracing::debug!(%id, key, "toast action pressed");
                    self.last_action = Some(key.clone());
                    self.toaster.dismiss(*id);
                }
                self.toasts.manager_mut().handle_message(&toast_message);
            }
            Message::ToastTick(_instant) => {
                self.toasts.manager_mut().advance();
            }
            Message::ShowToast(severity) => {
                let label = capitalize(severity.as_str());
                self.toaster.show(
                    Notification::new(
                        severity,
                        format!("This is an example of a {} toast notification.", severity.as_str()),
                    )
                    .title(format!("{label} Toast")),
                );
            }
            Message::ShowPersistentToast => {
                self.toaster.show(
                    Notification::success("Saved")
                        .title("Stays until dismissed")
                        .persistent(),
                );
            }
            Message::ShowActionToast => {
                self.toaster.show(
                    Notification::info("Message archived.")
                        .action("Undo", "undo-archive")
                        .duration(std::time::Duration::from_secs(8)),
                );
            }
            Message::DismissAllToasts => {
                self.toaster.dismiss_all();
            }
            Message::ToastPositionSelected(position) => {
                self.toasts.manager_mut().set_surface_position(position);
            }
            Message::Input(field, input_message) => {
                let state = self.fields.entry(field).or_default();
                match text_input::update(state, input_message) {
                    text_input::Event::Cleared => {
                        tracing::debug!(?field, "field cleared");
                    }
                    text_input::Event::Changed(_) | text_input::Event::None => {}
                }
            }
            Message::ToggleEmailError => {
                self.email_error = !self.email_error;
            }
            Message::Checked(choice, checked) => {
                if checked {
                    self.choices.insert(choice);
                } else {
                    self.choices.remove(&choice);
                }
            }
            Message::AllOptionsToggled(checked) => {
                self.group = [checked; GROUP_SIZE];
            }
            Message::OptionToggled(index, checked) => {
                if let Some(slot) = self.group.get_mut(index) {
                    *slot = checked;
                }
            }
            Message::AlertDismissed(severity) => {
                self.hidden_alerts.insert(severity);
            }
            Message::ResetAlerts => {
                self.hidden_alerts.clear();
            }
            Message::CloseRequested(id) => {
                self.shutdown();
                return window::close(id);
            }
        }
        Task::none()
    }

    /// Stops the OS preference watcher and cancels every toast timer.
    pub fn shutdown(&mut self) {
        self.theme.shutdown();
        self.toasts.manager_mut().shutdown();
        self.toaster.unbind();
    }
}

fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(mode) = flags.theme {
        config.theme.default_mode = mode;
    }
    if let Some(position) = flags.position {
        config.toasts.position = Some(position);
    }
}

/// Applies the `[toasts]` section to a freshly built manager.
fn configured_manager(manager: Manager, config: &Config) -> Manager {
    manager
        .position(config.toasts.position.unwrap_or_default())
        .default_duration(config.toasts.default_duration())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let theme = ThemeStore::init(&config.theme, MemoryStorage::new(), OsPreference);
        Self::with_parts(theme, configured_manager(Manager::new(), &config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Clock, ManualClock, Phase, Position};
    use crate::ui::theming::{Appearance, ManualPreference, ThemeMode};
    use std::time::Duration;

    fn app_with_clock() -> (App, ManualClock, ManualPreference) {
        let config = Config::default();
        let os = ManualPreference::new(Appearance::Light);
        let theme = ThemeStore::init(&config.theme, MemoryStorage::new(), os.clone());
        let clock = ManualClock::new();
        let app = App::with_parts(theme, Manager::with_clock(clock.clone()));
        (app, clock, os)
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        apply_flags(
            &mut config,
            &Flags {
                theme: Some(ThemeMode::Dark),
                position: Some(Position::TopLeft),
            },
        );
        assert_eq!(config.theme.default_mode, ThemeMode::Dark);
        assert_eq!(config.toasts.position, Some(Position::TopLeft));
    }

    #[test]
    fn with_parts_keeps_manager_settings() {
        let config = Config::default();
        let theme = ThemeStore::init(
            &config.theme,
            MemoryStorage::new(),
            ManualPreference::new(Appearance::Light),
        );
        let clock = ManualClock::new();
        let manager = Manager::with_clock(clock.clone())
            .position(Position::TopCenter)
            .default_duration(Duration::from_secs(2));
        let app = App::with_parts(theme, manager);

        app.toaster().info("short");
        let manager = app.toast_surface().manager();
        assert_eq!(manager.surface_position(), Position::TopCenter);
        assert_eq!(manager.next_due(), Some(clock.now() + Duration::from_secs(2)));
    }

    #[test]
    fn config_applies_to_new_manager() {
        let mut config = Config::default();
        config.toasts.position = Some(Position::BottomLeft);
        config.toasts.default_duration_ms = Some(0);

        let clock = ManualClock::new();
        let mut manager = configured_manager(Manager::with_clock(clock.clone()), &config);
        assert_eq!(manager.surface_position(), Position::BottomLeft);

        manager.push(Notification::info("stays"));
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn persistent_toast_keeps_tick_until_visible() {
        let (mut app, clock, _) = app_with_clock();
        let _ = app.update(Message::ShowPersistentToast);
        assert!(app.toast_surface().manager().needs_tick());

        clock.advance(Duration::from_millis(100));
        let _ = app.update(Message::ToastTick(clock.now()));
        assert!(app.toast_surface().manager().needs_tick());

        clock.advance(Duration::from_millis(100));
        let _ = app.update(Message::ToastTick(clock.now()));
        let manager = app.toast_surface().manager();
        assert!(!manager.needs_tick());
        let entry = manager.notifications().next().unwrap();
        assert_eq!(entry.presence(clock.now()), 1.0);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("warning"), "Warning");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn show_toast_enqueues_on_bound_surface() {
        let (mut app, _, _) = app_with_clock();
        let _ = app.update(Message::ShowToast(Severity::Success));

        let manager = app.toast_surface().manager();
        let entry = manager.notifications().next().unwrap();
        assert_eq!(entry.notification().title_text(), Some("Success Toast"));
        assert_eq!(entry.position(), Position::BottomRight);
    }

    #[test]
    fn tick_drives_removal_and_observer() {
        let (mut app, clock, _) = app_with_clock();
        let _ = app.update(Message::ShowToast(Severity::Info));

        clock.advance(Duration::from_millis(5300));
        let _ = app.update(Message::ToastTick(clock.now()));

        assert!(app.toast_surface().manager().is_empty());
        assert_eq!(app.removed_toasts(), 1);
    }

    #[test]
    fn dismiss_all_does_not_notify_observer() {
        let (mut app, clock, _) = app_with_clock();
        let _ = app.update(Message::ShowToast(Severity::Info));
        let _ = app.update(Message::ShowPersistentToast);
        let _ = app.update(Message::DismissAllToasts);

        clock.advance(Duration::from_secs(10));
        let _ = app.update(Message::ToastTick(clock.now()));
        assert_eq!(app.removed_toasts(), 0);
    }

    #[test]
    fn action_is_recorded_and_dismisses() {
        let (mut app, _, _) = app_with_clock();
        let _ = app.update(Message::ShowActionToast);
        let id = app.toast_surface().manager().notifications().next().unwrap().id();

        let _ = app.update(Message::Toast(NotificationMessage::Action {
            id,
            key: "undo-archive".into(),
        }));

        assert_eq!(app.last_action(), Some("undo-archive"));
        assert_eq!(
            app.toast_surface().manager().get(id).map(|n| n.phase()),
            Some(Phase::Leaving)
        );
    }

    #[test]
    fn position_picker_moves_new_toasts() {
        let (mut app, _, _) = app_with_clock();
        let _ = app.update(Message::ToastPositionSelected(Position::TopCenter));
        let _ = app.update(Message::ShowToast(Severity::Warning));

        let manager = app.toast_surface().manager();
        assert_eq!(manager.positions_in_use(), vec![Position::TopCenter]);
    }

    #[test]
    fn theme_selection_and_system_poll() {
        let (mut app, _, os) = app_with_clock();
        assert_eq!(app.theme(), Theme::Light);

        os.set(Appearance::Dark);
        let _ = app.update(Message::SystemThemePoll(std::time::Instant::now()));
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::ThemeSelected(ThemeMode::Light));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.theme_store().mode(), ThemeMode::Light);
    }

    #[test]
    fn group_parent_is_indeterminate_when_mixed() {
        let (mut app, _, _) = app_with_clock();
        assert_eq!(app.group_state(), (false, true));

        let _ = app.update(Message::AllOptionsToggled(true));
        assert_eq!(app.group_state(), (true, false));

        let _ = app.update(Message::OptionToggled(1, false));
        assert_eq!(app.group(), [true, false, true]);

        let _ = app.update(Message::AllOptionsToggled(false));
        assert_eq!(app.group_state(), (false, false));
    }

    #[test]
    fn alerts_hide_and_reset() {
        let (mut app, _, _) = app_with_clock();
        let _ = app.update(Message::AlertDismissed(Severity::Error));
        assert!(!app.is_alert_visible(Severity::Error));
        assert!(app.is_alert_visible(Severity::Info));

        let _ = app.update(Message::ResetAlerts);
        assert!(app.is_alert_visible(Severity::Error));
    }

    #[test]
    fn text_fields_keep_local_state() {
        let (mut app, _, _) = app_with_clock();
        let _ = app.update(Message::Input(
            Field::Username,
            text_input::Message::Changed("ada".into()),
        ));
        assert_eq!(app.field(Field::Username).map(|s| s.value()), Some("ada"));

        let _ = app.update(Message::Input(Field::Username, text_input::Message::Clear));
        assert_eq!(app.field(Field::Username).map(|s| s.value()), Some(""));
    }

    #[test]
    fn checkbox_choices_toggle() {
        let (mut app, _, _) = app_with_clock();
        let _ = app.update(Message::Checked(Choice::Default, true));
        assert!(app.is_checked(Choice::Default));
        let _ = app.update(Message::Checked(Choice::Default, false));
        assert!(!app.is_checked(Choice::Default));
    }

    #[test]
    fn shutdown_stops_watcher_and_timers() {
        let (mut app, clock, _) = app_with_clock();
        let _ = app.update(Message::ShowToast(Severity::Info));

        app.shutdown();
        clock.advance(Duration::from_secs(10));

        assert!(!app.theme_store().is_watching());
        assert!(app.toast_surface().manager_mut().advance().is_empty());
        assert!(!app.toaster().is_bound());
    }
}
