// SPDX-License-Identifier: MPL-2.0
//! Text field styles.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Input field; `is_error` switches the border to the destructive color.
pub fn field(is_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let scheme = ColorScheme::of(theme);
        let accent = if is_error {
            scheme.destructive
        } else {
            scheme.primary
        };

        let (border_color, border_width) = match status {
            text_input::Status::Focused { .. } => (accent, border::WIDTH_MD),
            text_input::Status::Hovered if !is_error => (scheme.muted_foreground, border::WIDTH_SM),
            _ if is_error => (scheme.destructive, border::WIDTH_SM),
            _ => (scheme.border, border::WIDTH_SM),
        };

        let disabled = matches!(status, text_input::Status::Disabled);
        let value = if disabled {
            Color {
                a: opacity::DISABLED,
                ..scheme.foreground
            }
        } else {
            scheme.foreground
        };

        text_input::Style {
            background: Background::Color(if disabled {
                scheme.muted
            } else {
                scheme.background
            }),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            icon: scheme.muted_foreground,
            placeholder: scheme.muted_foreground,
            value,
            selection: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            },
        }
    }
}
