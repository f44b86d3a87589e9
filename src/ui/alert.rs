// SPDX-License-Identifier: MPL-2.0
//! Inline alert banner.
//!
//! Alerts share the [`Severity`] scale and default icons with toasts but stay
//! in the layout until the caller hides them. Dismissing only emits a message.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::notifications::toast::severity_icon;
use crate::ui::notifications::Severity;
use crate::ui::styles;
use crate::ui::typography::{self as type_scale, Weight};
use iced::widget::{button, container, Column, Row};
use iced::{alignment, Element, Length};

/// Icon constructor, see [`crate::ui::icons`].
pub type IconFn = fn() -> iced::widget::svg::Svg<'static>;

#[derive(Debug, Clone)]
pub struct Alert {
    variant: Severity,
    title: Option<String>,
    body: String,
    dismissible: bool,
    full_width: bool,
    bordered: bool,
    icon: Option<IconFn>,
}

impl Alert {
    pub fn new(variant: Severity, body: impl Into<String>) -> Self {
        Self {
            variant,
            title: None,
            body: body.into(),
            dismissible: false,
            full_width: true,
            bordered: true,
            icon: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    #[must_use]
    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Replaces the severity's default icon.
    #[must_use]
    pub fn icon(mut self, icon: IconFn) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn variant(&self) -> Severity {
        self.variant
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Renders the alert; `on_dismiss` is emitted by the close button when dismissible.
    pub fn view<Message: Clone + 'static>(&self, on_dismiss: Message) -> Element<'static, Message> {
        let accent = self.variant.color();
        let glyph = self.icon.map_or_else(|| severity_icon(self.variant), |icon| icon());
        let icon = icons::tinted(icons::sized(glyph, sizing::ICON_MD), accent);

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(title) = &self.title {
            body = body.push(type_scale::body(title.clone()).weight(Weight::Medium));
        }
        body = body.push(type_scale::body_sm(self.body.clone()));

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(body);
        if self.dismissible {
            content = content.push(
                button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
                    .padding(6.0)
                    .on_press(on_dismiss)
                    .style(styles::button::ghost),
            );
        }

        let banner = container(content)
            .padding(spacing::MD)
            .style(styles::container::alert(accent, self.bordered));
        if self.full_width {
            banner.width(Length::Fill).into()
        } else {
            banner.width(Length::Shrink).max_width(sizing::PAGE_MAX_WIDTH).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let alert = Alert::new(Severity::default(), "Heads up");
        assert_eq!(alert.variant(), Severity::Info);
        assert!(!alert.is_dismissible());
        assert!(alert.full_width);
        assert!(alert.bordered);
        assert!(alert.icon.is_none());
    }

    #[test]
    fn every_variant_renders() {
        for severity in Severity::ALL {
            let _element: Element<'_, ()> = Alert::new(severity, "body")
                .title("Title")
                .dismissible(true)
                .view(());
        }
    }

    #[test]
    fn custom_icon_and_compact_layout_render() {
        let _element: Element<'_, ()> = Alert::new(Severity::Warning, "body")
            .icon(icons::lock)
            .full_width(false)
            .bordered(false)
            .view(());
    }
}
