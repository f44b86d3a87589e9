// SPDX-License-Identifier: MPL-2.0
//! Labelled text field.
//!
//! The field keeps a local [`State`]: the echoed value, used when the caller
//! does not control the value, and the password reveal toggle. Changes are
//! reported upward as [`Event`]s.

use super::{hint, hint_text, label, slug, Size};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, svg::Svg, text_input, Column, Stack};
use iced::{alignment, Element, Length, Padding};

/// Icon constructor, see [`crate::ui::icons`].
pub type IconFn = fn() -> Svg<'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    #[default]
    Text,
    Password,
    Email,
}

/// Local state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    value: String,
    revealed: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            revealed: false,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether a password is shown in clear text.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Changed(String),
    Clear,
    ToggleReveal,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Changed(String),
    Cleared,
}

/// Process a field message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Changed(value) => {
            state.value.clone_from(&value);
            Event::Changed(value)
        }
        Message::Clear => {
            state.value.clear();
            Event::Cleared
        }
        Message::ToggleReveal => {
            state.revealed = !state.revealed;
            Event::None
        }
    }
}

/// What occupies the trailing slot of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    Empty,
    Icon,
    RevealToggle { revealed: bool },
    Clear,
}

/// Text field props.
#[derive(Debug, Clone)]
pub struct TextInput {
    label: String,
    placeholder: String,
    help_text: Option<String>,
    error: Option<String>,
    is_error: bool,
    leading_icon: Option<IconFn>,
    trailing_icon: Option<IconFn>,
    clearable: bool,
    disabled: bool,
    required: bool,
    size: Size,
    full_width: bool,
    kind: Kind,
    value: Option<String>,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            help_text: None,
            error: None,
            is_error: false,
            leading_icon: None,
            trailing_icon: None,
            clearable: false,
            disabled: false,
            required: false,
            size: Size::default(),
            full_width: false,
            kind: Kind::default(),
            value: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Error text shown below the field; also puts the field in error state.
    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn is_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    #[must_use]
    pub fn leading_icon(mut self, icon: IconFn) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    #[must_use]
    pub fn trailing_icon(mut self, icon: IconFn) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Controls the displayed value; the local echo is ignored.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Element id derived from the label.
    #[must_use]
    pub fn id(&self) -> String {
        format!("text-input-{}", slug(&self.label))
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.is_error || self.error.is_some()
    }

    /// Value to display: the controlled value if any, else the local echo.
    #[must_use]
    pub fn displayed_value<'s>(&'s self, state: &'s State) -> &'s str {
        self.value.as_deref().unwrap_or(&state.value)
    }

    #[must_use]
    pub fn trailing(&self, state: &State) -> Trailing {
        if self.trailing_icon.is_some() {
            Trailing::Icon
        } else if self.kind == Kind::Password {
            Trailing::RevealToggle {
                revealed: state.revealed,
            }
        } else if self.clearable && !self.disabled && !self.displayed_value(state).is_empty() {
            Trailing::Clear
        } else {
            Trailing::Empty
        }
    }

    pub fn view(&self, state: &State) -> Element<'static, Message> {
        let has_error = self.has_error();
        let trailing = self.trailing(state);
        let inset = self.size.inset();
        let icon_room = sizing::ICON_SM + spacing::XS;

        let mut input = text_input(&self.placeholder, self.displayed_value(state))
            .size(self.size.text_size())
            .padding(Padding {
                top: 0.0,
                bottom: 0.0,
                left: inset + if self.leading_icon.is_some() { icon_room } else { 0.0 },
                right: inset + if trailing == Trailing::Empty { 0.0 } else { icon_room },
            })
            .line_height(iced::Pixels(self.size.input_height() - 2.0))
            .secure(self.kind == Kind::Password && !state.revealed)
            .style(styles::text_input::field(has_error));
        if !self.disabled {
            input = input.on_input(Message::Changed);
        }
        input = input.width(if self.full_width {
            Length::Fill
        } else {
            Length::Fixed(sizing::INPUT_WIDTH)
        });

        let mut field = Stack::new().push(input);
        if let Some(icon) = self.leading_icon {
            field = field.push(
                container(icons::muted(icons::sized(icon(), sizing::ICON_SM)))
                    .height(Length::Fill)
                    .align_y(alignment::Vertical::Center)
                    .padding(Padding::ZERO.left(inset)),
            );
        }
        let trailing_widget: Option<Element<'static, Message>> = match trailing {
            Trailing::Empty => None,
            Trailing::Icon => self.trailing_icon.map(|icon| {
                icons::muted(icons::sized(icon(), sizing::ICON_SM)).into()
            }),
            Trailing::RevealToggle { revealed } => {
                let glyph = if revealed { icons::eye_off() } else { icons::eye() };
                Some(
                    button(icons::muted(icons::sized(glyph, sizing::ICON_SM)))
                        .padding(0)
                        .on_press(Message::ToggleReveal)
                        .style(styles::button::ghost)
                        .into(),
                )
            }
            Trailing::Clear => Some(
                button(icons::muted(icons::sized(icons::cross(), sizing::ICON_SM)))
                    .padding(0)
                    .on_press(Message::Clear)
                    .style(styles::button::ghost)
                    .into(),
            ),
        };
        if let Some(widget) = trailing_widget {
            field = field.push(
                container(widget)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Center)
                    .padding(Padding::ZERO.right(inset)),
            );
        }

        let mut column = Column::new()
            .spacing(6.0)
            .push(label(&self.label, typography::BODY_SM, has_error, self.required))
            .push(field);
        if let Some(hint_content) = hint_text(self.error.as_deref(), self.help_text.as_deref()) {
            column = column.push(hint(hint_content, has_error));
        }
        if self.full_width {
            column = column.width(Length::Fill);
        }
        column.into()
    }
}
