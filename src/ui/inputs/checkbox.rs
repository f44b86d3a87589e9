// SPDX-License-Identifier: MPL-2.0
//! Labelled checkbox.
//!
//! Stateless: the caller owns `checked` and receives the requested value
//! through the `on_toggle` callback. An indeterminate checkbox draws a dash
//! over a filled box; toggling it requests `!checked`.

use super::{hint, hint_text, label, slug, Size};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, checkbox, container, svg, Column, Row, Stack};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    label: Option<String>,
    help_text: Option<String>,
    error: Option<String>,
    is_error: bool,
    size: Size,
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    required: bool,
}

impl Checkbox {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

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
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
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

    /// Element id derived from the label, if any.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.label
            .as_deref()
            .map(|label| format!("checkbox-{}", slug(label)))
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.is_error || self.error.is_some()
    }

    /// Value requested when the box or its label is clicked.
    #[must_use]
    pub fn toggled_value(&self) -> bool {
        !self.checked
    }

    pub fn view<Message: Clone + 'static>(
        &self,
        on_toggle: impl Fn(bool) -> Message + 'static,
    ) -> Element<'static, Message> {
        let has_error = self.has_error();
        let box_size = self.size.checkbox_size();
        let requested = self.toggled_value();
        let label_message = on_toggle(requested);

        // The dash replaces the check mark, so the box itself renders unchecked.
        let shows_check = self.checked && !self.indeterminate;
        let mut control = checkbox(shows_check)
            .size(box_size)
            .style(styles::checkbox::boxed(has_error, self.indeterminate));
        if !self.disabled {
            control = control.on_toggle(move |_| on_toggle(requested));
        }

        let mut mark = Stack::new().push(control);
        if self.indeterminate {
            let dash = icons::sized(icons::minus(), box_size * 0.75).style(
                |theme: &Theme, _status: svg::Status| svg::Style {
                    color: Some(ColorScheme::of(theme).primary_foreground),
                },
            );
            mark = mark.push(
                container(dash)
                    .width(Length::Fixed(box_size))
                    .height(Length::Fixed(box_size))
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            );
        }

        let mut row = Row::new()
            .spacing(self.size.gap())
            .align_y(alignment::Vertical::Center)
            .push(mark);
        if let Some(text) = &self.label {
            let mut label_button = button(label(text, self.size.text_size(), has_error, self.required))
                .padding(0)
                .style(styles::button::bare);
            if !self.disabled {
                label_button = label_button.on_press(label_message);
            }
            row = row.push(label_button);
        }

        let mut column = Column::new().spacing(6.0).push(row);
        if let Some(content) = hint_text(self.error.as_deref(), self.help_text.as_deref()) {
            column = column.push(hint(content, has_error));
        }
        column.into()
    }
}
