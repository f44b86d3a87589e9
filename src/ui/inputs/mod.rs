// SPDX-License-Identifier: MPL-2.0
//! Form inputs.
//!
//! - [`text_input`] - Labelled text field with icons, clear and password reveal
//! - [`checkbox`] - Labelled checkbox with an indeterminate state

pub mod checkbox;
pub mod text_input;

pub use checkbox::Checkbox;
pub use text_input::TextInput;

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Row};
use iced::{font, Element, Font, Theme};

/// Size variant shared by form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// Label and value text size.
    #[must_use]
    pub fn text_size(self) -> f32 {
        match self {
            Size::Sm => typography::CAPTION,
            Size::Md => typography::BODY_SM,
            Size::Lg => typography::BODY,
        }
    }

    #[must_use]
    pub fn input_height(self) -> f32 {
        match self {
            Size::Sm => sizing::INPUT_HEIGHT_SM,
            Size::Md => sizing::INPUT_HEIGHT_MD,
            Size::Lg => sizing::INPUT_HEIGHT_LG,
        }
    }

    /// Horizontal padding inside a text field.
    #[must_use]
    pub fn inset(self) -> f32 {
        match self {
            Size::Sm => spacing::XS,
            Size::Md => spacing::SM,
            Size::Lg => spacing::MD,
        }
    }

    #[must_use]
    pub fn checkbox_size(self) -> f32 {
        match self {
            Size::Sm => sizing::CHECKBOX_SM,
            Size::Md => sizing::CHECKBOX_MD,
            Size::Lg => sizing::CHECKBOX_LG,
        }
    }

    /// Gap between a checkbox and its label.
    #[must_use]
    pub fn gap(self) -> f32 {
        match self {
            Size::Sm => 6.0,
            Size::Md => spacing::XS,
            Size::Lg => 10.0,
        }
    }
}

/// Lowercases `label` and joins its words with `-`.
#[must_use]
pub fn slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Field label, red when in error, with a trailing `*` when required.
fn label<'a, Message: 'a>(
    content: &str,
    size: f32,
    has_error: bool,
    required: bool,
) -> Element<'a, Message> {
    let medium = Font {
        weight: font::Weight::Medium,
        ..Font::DEFAULT
    };

    let mut row = Row::new().spacing(spacing::XXS).push(
        text(content.to_string())
            .size(size)
            .font(medium)
            .style(move |theme: &Theme| {
                let scheme = ColorScheme::of(theme);
                text::Style {
                    color: Some(if has_error {
                        scheme.destructive
                    } else {
                        scheme.foreground
                    }),
                }
            }),
    );
    if required {
        row = row.push(
            text("*")
                .size(size)
                .font(medium)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).destructive),
                }),
        );
    }
    row.into()
}

/// Text shown below a field. Error text wins over help text.
fn hint_text<'s>(error: Option<&'s str>, help: Option<&'s str>) -> Option<&'s str> {
    error.or(help)
}

fn hint<'a, Message: 'a>(content: &str, has_error: bool) -> Element<'a, Message> {
    text(content.to_string())
        .size(typography::HELPER)
        .style(move |theme: &Theme| {
            let scheme = ColorScheme::of(theme);
            text::Style {
                color: Some(if has_error {
                    scheme.destructive
                } else {
                    scheme.muted_foreground
                }),
            }
        })
        .into()
}
