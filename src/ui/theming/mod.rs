// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme management.
//!
//! # Components
//!
//! - [`store`] - `ThemeStore`, the process-wide selected mode and its effects
//! - [`storage`] - Persistence of the selected mode (file-backed or in-memory)
//! - [`system`] - OS color-scheme probing and the change watcher
//! - [`root`] - The document root class list carrying the `light`/`dark` marker

pub mod root;
pub mod storage;
pub mod store;
pub mod system;

pub use root::DocumentRoot;
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use store::ThemeStore;
pub use system::{ManualPreference, OsPreference, SystemPreference, SystemWatcher};

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follows the OS color-scheme preference.
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Human-readable label used by the theme switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Resolves the effective appearance, asking `system` only for [`ThemeMode::System`].
    #[must_use]
    pub fn resolve(self, system: &dyn SystemPreference) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => system.appearance(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme mode string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode: {}", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(UnknownThemeMode(s.to_string())),
        }
    }
}

/// Effective visual mode after resolving [`ThemeMode::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Class token written to the document root.
    #[must_use]
    pub fn class_token(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }

    /// Built-in Iced theme for this appearance.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Appearance::Light => Theme::Light,
            Appearance::Dark => Theme::Dark,
        }
    }
}

/// Semantic colors of the design system for one appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub background: Color,
    pub muted: Color,
    pub border: Color,

    // Text
    pub foreground: Color,
    pub muted_foreground: Color,

    // Brand
    pub primary: Color,
    pub primary_foreground: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub destructive: Color,
    pub info: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            muted: palette::GRAY_100,
            border: palette::GRAY_200,

            foreground: palette::GRAY_950,
            muted_foreground: palette::GRAY_500,

            primary: palette::PRIMARY_600,
            primary_foreground: palette::WHITE,

            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
            destructive: palette::ERROR_500,
            info: palette::INFO_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_950,
            muted: palette::GRAY_800,
            border: palette::GRAY_700,

            foreground: palette::GRAY_100,
            muted_foreground: palette::GRAY_400,

            primary: palette::PRIMARY_400,
            primary_foreground: palette::GRAY_950,

            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
            destructive: palette::ERROR_500,
            info: palette::INFO_500,
        }
    }

    #[must_use]
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    /// Scheme matching the brightness of an Iced theme.
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
