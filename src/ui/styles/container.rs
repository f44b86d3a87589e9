// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.foreground),
        ..Default::default()
    }
}

/// Bordered section surface used on the demo page.
pub fn panel(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::of(theme);

    container::Style {
        background: Some(Background::Color(scheme.muted)),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Frame around a segmented control.
pub fn segmented(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::of(theme);

    container::Style {
        background: Some(Background::Color(scheme.muted)),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Toast card with a severity accent; `presence` fades the whole card.
pub fn toast(accent: Color, presence: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::of(theme);
        let fade = |color: Color| Color {
            a: color.a * presence,
            ..color
        };

        container::Style {
            background: Some(Background::Color(fade(scheme.background))),
            border: Border {
                color: fade(accent),
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: iced::Shadow {
                color: fade(shadow::LG.color),
                ..shadow::LG
            },
            text_color: Some(fade(scheme.foreground)),
            ..Default::default()
        }
    }
}

/// Inline alert banner tinted with the severity color.
pub fn alert(accent: Color, bordered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::of(theme);

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::TINT,
                ..accent
            })),
            border: Border {
                color: if bordered { accent } else { Color::TRANSPARENT },
                width: if bordered { border::WIDTH_SM } else { 0.0 },
                radius: radius::MD.into(),
            },
            text_color: Some(scheme.foreground),
            ..Default::default()
        }
    }
}
