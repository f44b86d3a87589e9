// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::of(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(scheme.muted)),
            text_color: scheme.muted_foreground,
            border: Border {
                color: scheme.border,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Selected segment of a toggle group.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::of(theme);
    let background = match status {
        button::Status::Hovered => scheme.primary,
        _ => Color {
            a: opacity::OVERLAY_STRONG,
            ..scheme.primary
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: scheme.primary_foreground,
        border: Border {
            color: scheme.primary,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Unselected segment of a toggle group, or a secondary action.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::of(theme);

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(scheme.muted)),
            text_color: scheme.foreground,
            border: Border {
                color: scheme.primary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: scheme.muted_foreground,
            border: Border {
                color: scheme.border,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(scheme.background)),
            text_color: scheme.foreground,
            border: Border {
                color: scheme.border,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless icon button (close, clear, reveal).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::of(theme);
    let overlay = |a: f32| {
        Some(Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, scheme.muted_foreground),
        button::Status::Hovered => (overlay(opacity::OVERLAY_SUBTLE), scheme.foreground),
        button::Status::Pressed => (overlay(opacity::OVERLAY_MEDIUM), scheme.foreground),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::DISABLED,
                ..scheme.muted_foreground
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only button drawn in an accent color.
pub fn link(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => accent,
            button::Status::Active => Color {
                a: opacity::OVERLAY_STRONG + 0.2,
                ..accent
            },
            button::Status::Disabled => Color {
                a: opacity::DISABLED,
                ..accent
            },
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Button without chrome, used to make labels clickable.
pub fn bare(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: ColorScheme::of(theme).foreground,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
