// SPDX-License-Identifier: MPL-2.0
//! Checkbox styles.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::checkbox;
use iced::{Background, Border, Color, Theme};

/// Checkbox box. `filled` forces the checked look, used for the indeterminate state.
pub fn boxed(is_error: bool, filled: bool) -> impl Fn(&Theme, checkbox::Status) -> checkbox::Style {
    move |theme: &Theme, status: checkbox::Status| {
        let scheme = ColorScheme::of(theme);

        let (is_checked, hovered, disabled) = match status {
            checkbox::Status::Active { is_checked } => (is_checked, false, false),
            checkbox::Status::Hovered { is_checked } => (is_checked, true, false),
            checkbox::Status::Disabled { is_checked } => (is_checked, false, true),
        };
        let on = is_checked || filled;

        let accent = if is_error {
            scheme.destructive
        } else {
            scheme.primary
        };
        let dim = |color: Color| {
            if disabled {
                Color {
                    a: opacity::DISABLED,
                    ..color
                }
            } else {
                color
            }
        };

        let border_color = if is_error {
            scheme.destructive
        } else if on || hovered {
            accent
        } else {
            scheme.muted_foreground
        };

        checkbox::Style {
            background: Background::Color(dim(if on { accent } else { scheme.background })),
            icon_color: dim(scheme.primary_foreground),
            border: Border {
                color: dim(border_color),
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            text_color: Some(dim(scheme.foreground)),
        }
    }
}
