// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVG sources embedded as strings. Handles are created
//! once on first access and cached in a `OnceLock`. Every icon is drawn with
//! `currentColor` strokes, so a single asset serves both themes; the color is
//! applied at render time through [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use crate::ui::theming::ColorScheme;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
    "Info icon: lowercase i in a circle."
);
define_icon!(
    circle_check,
    r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
    "Circle with a checkmark."
);
define_icon!(
    warning,
    r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#,
    "Warning icon: exclamation mark in a triangle."
);
define_icon!(
    circle_cross,
    r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#,
    "Circle with an X."
);
define_icon!(
    cross,
    r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
    "Cross icon: two diagonal strokes."
);
define_icon!(minus, r#"<path d="M5 12h14"/>"#, "Horizontal dash.");

// =============================================================================
// Theme Icons
// =============================================================================

define_icon!(
    sun,
    r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
    "Sun icon: circle with rays."
);
define_icon!(
    moon,
    r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
    "Moon icon: crescent."
);
define_icon!(
    monitor,
    r#"<rect width="20" height="14" x="2" y="3" rx="2"/><path d="M8 21h8"/><path d="M12 17v4"/>"#,
    "Monitor icon: screen on a stand."
);

// =============================================================================
// Input Icons
// =============================================================================

define_icon!(
    eye,
    r#"<path d="M2.06 12.35a1 1 0 0 1 0-.7 10.75 10.75 0 0 1 19.88 0 1 1 0 0 1 0 .7 10.75 10.75 0 0 1-19.88 0"/><circle cx="12" cy="12" r="3"/>"#,
    "Eye icon: open eye."
);
define_icon!(
    eye_off,
    r#"<path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"/><path d="M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"/><path d="M14.08 14.16a3 3 0 0 1-4.2-4.2"/><path d="m2 2 20 20"/>"#,
    "Eye icon crossed out."
);
define_icon!(
    magnifier,
    r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
    "Magnifier icon: lens with handle."
);
define_icon!(
    envelope,
    r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
    "Envelope icon."
);
define_icon!(
    lock,
    r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#,
    "Padlock icon."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints an icon with a fixed color.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Paints an icon with the theme's text color.
pub fn themed(icon: Svg<'_>) -> Svg<'_> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.palette().text),
    })
}

/// Paints an icon with the theme's muted text color.
pub fn muted(icon: Svg<'_>) -> Svg<'_> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(ColorScheme::of(theme).muted_foreground),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        let _ = info();
        let _ = circle_check();
        let _ = warning();
        let _ = circle_cross();
        let _ = cross();
        let _ = minus();
        let _ = sun();
        let _ = moon();
        let _ = monitor();
        let _ = eye();
        let _ = eye_off();
        let _ = magnifier();
        let _ = envelope();
        let _ = lock();
    }

    #[test]
    fn sized_helper_works() {
        let _ = sized(sun(), 32.0);
    }

    #[test]
    fn tint_helpers_work() {
        let _ = tinted(moon(), Color::WHITE);
        let _ = themed(monitor());
        let _ = muted(eye());
    }
}
