// SPDX-License-Identifier: MPL-2.0
//! Typography primitives.
//!
//! A [`Typography`] is a piece of text rendered with one of the scale
//! variants, an optional semantic tone and an optional weight override.
//!
//! ```ignore
//! let title: Element<'_, Message> = typography::h2("Inputs").into();
//! let hint = typography::helper("Shown below the field").truncate(true);
//! ```

use crate::ui::design_tokens::typography as scale;
use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::{font, Color, Element, Font, Theme};

/// Position on the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Display,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    BodyLg,
    #[default]
    Body,
    BodySm,
    Caption,
    Helper,
    Code,
}

impl Variant {
    pub const ALL: [Variant; 13] = [
        Variant::Display,
        Variant::H1,
        Variant::H2,
        Variant::H3,
        Variant::H4,
        Variant::H5,
        Variant::H6,
        Variant::BodyLg,
        Variant::Body,
        Variant::BodySm,
        Variant::Caption,
        Variant::Helper,
        Variant::Code,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Display => "display",
            Variant::H1 => "h1",
            Variant::H2 => "h2",
            Variant::H3 => "h3",
            Variant::H4 => "h4",
            Variant::H5 => "h5",
            Variant::H6 => "h6",
            Variant::BodyLg => "body-lg",
            Variant::Body => "body",
            Variant::BodySm => "body-sm",
            Variant::Caption => "caption",
            Variant::Helper => "helper",
            Variant::Code => "code",
        }
    }

    /// Font size in logical pixels.
    #[must_use]
    pub fn size(self) -> f32 {
        match self {
            Variant::Display => scale::DISPLAY,
            Variant::H1 => scale::H1,
            Variant::H2 => scale::H2,
            Variant::H3 => scale::H3,
            Variant::H4 => scale::H4,
            Variant::H5 => scale::H5,
            Variant::H6 => scale::H6,
            Variant::BodyLg => scale::BODY_LG,
            Variant::Body => scale::BODY,
            Variant::BodySm => scale::BODY_SM,
            Variant::Caption => scale::CAPTION,
            Variant::Helper => scale::HELPER,
            Variant::Code => scale::CODE,
        }
    }

    /// Line height relative to the font size.
    #[must_use]
    pub fn leading(self) -> f32 {
        match self {
            Variant::Display | Variant::H1 | Variant::H2 => scale::LEADING_TIGHT,
            Variant::H3 | Variant::H4 | Variant::H5 | Variant::H6 => scale::LEADING_SNUG,
            _ => scale::LEADING_NORMAL,
        }
    }

    #[must_use]
    pub fn default_weight(self) -> font::Weight {
        match self {
            Variant::Display | Variant::H1 => font::Weight::Bold,
            Variant::H2 | Variant::H3 | Variant::H4 => font::Weight::Semibold,
            Variant::H5 | Variant::H6 => font::Weight::Medium,
            _ => font::Weight::Normal,
        }
    }

    #[must_use]
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            Variant::Display
                | Variant::H1
                | Variant::H2
                | Variant::H3
                | Variant::H4
                | Variant::H5
                | Variant::H6
        )
    }
}

/// Semantic text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Primary,
    Success,
    Warning,
    Destructive,
    Info,
}

impl Tone {
    /// Color for this tone; `None` inherits the surrounding text color.
    #[must_use]
    pub fn color(self, scheme: &ColorScheme) -> Option<Color> {
        match self {
            Tone::Default => None,
            Tone::Muted => Some(scheme.muted_foreground),
            Tone::Primary => Some(scheme.primary),
            Tone::Success => Some(scheme.success),
            Tone::Warning => Some(scheme.warning),
            Tone::Destructive => Some(scheme.destructive),
            Tone::Info => Some(scheme.info),
        }
    }
}

/// Weight override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    /// Keep the variant's weight.
    #[default]
    Default,
    Light,
    Medium,
    Semibold,
    Bold,
}

impl Weight {
    fn font_weight(self) -> Option<font::Weight> {
        match self {
            Weight::Default => None,
            Weight::Light => Some(font::Weight::Light),
            Weight::Medium => Some(font::Weight::Medium),
            Weight::Semibold => Some(font::Weight::Semibold),
            Weight::Bold => Some(font::Weight::Bold),
        }
    }
}

/// Text rendered on the type scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    content: String,
    variant: Variant,
    tone: Tone,
    weight: Weight,
    truncate: bool,
}

impl Typography {
    pub fn new(variant: Variant, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant,
            tone: Tone::default(),
            weight: Weight::default(),
            truncate: false,
        }
    }

    #[must_use]
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Keeps the text on one line.
    #[must_use]
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Font used to render this text, weight override applied.
    #[must_use]
    pub fn font(&self) -> Font {
        let base = if self.variant == Variant::Code {
            Font::MONOSPACE
        } else {
            Font::DEFAULT
        };
        Font {
            weight: self
                .weight
                .font_weight()
                .unwrap_or_else(|| self.variant.default_weight()),
            ..base
        }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let font = self.font();
        let tone = self.tone;
        let widget = text(self.content)
            .size(self.variant.size())
            .line_height(text::LineHeight::Relative(self.variant.leading()))
            .font(font)
            .style(move |theme: &Theme| text::Style {
                color: tone.color(&ColorScheme::of(theme)),
            });

        if self.truncate {
            widget.wrapping(text::Wrapping::None).into()
        } else {
            widget.into()
        }
    }
}

impl<'a, Message: 'a> From<Typography> for Element<'a, Message> {
    fn from(typography: Typography) -> Self {
        typography.view()
    }
}

pub fn display(content: impl Into<String>) -> Typography {
    Typography::new(Variant::Display, content)
}

pub fn h1(content: impl Into<String>) -> Typography {
    Typography::new(Variant::H1, content)
}

pub fn h2(content: impl Into<String>) -> Typography {
    Typography::new(Variant::H2, content)
}

pub fn h3(content: impl Into<String>) -> Typography {
    Typography::new(Variant::H3, content)
}

pub fn h4(content: impl Into<String>) -> Typography {
    Typography::new(Variant::H4, content)
}

pub fn h5(content: impl Into<String>) -> Typography {
    Typography::new(Variant::H5, content)
}

pub fn h6(content: impl Into<String>) -> Typography {
    Typography::new(Variant::H6, content)
}

pub fn body_lg(content: impl Into<String>) -> Typography {
    Typography::new(Variant::BodyLg, content)
}

pub fn body(content: impl Into<String>) -> Typography {
    Typography::new(Variant::Body, content)
}

pub fn body_sm(content: impl Into<String>) -> Typography {
    Typography::new(Variant::BodySm, content)
}

pub fn caption(content: impl Into<String>) -> Typography {
    Typography::new(Variant::Caption, content)
}

/// Helper text, muted by default.
pub fn helper(content: impl Into<String>) -> Typography {
    Typography::new(Variant::Helper, content).tone(Tone::Muted)
}

/// Inline code in the monospace font.
pub fn code(content: impl Into<String>) -> Typography {
    Typography::new(Variant::Code, content)
}
