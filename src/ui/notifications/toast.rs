// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are small cards with a severity-colored accent, an optional title,
//! an optional action button and a close button when dismissible. The overlay
//! renders one layer per anchor in use; empty layer space lets pointer events
//! through while each card captures them.

use super::manager::{ActiveNotification, Manager, Message};
use super::notification::{Position, Severity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, opaque, svg::Svg, text, Column, Row, Stack};
use iced::{alignment, font, Color, Element, Font, Length};
use std::time::Instant;

/// Renders a single toast.
pub fn view<'a>(entry: &ActiveNotification, now: Instant) -> Element<'a, Message> {
    let notification = entry.notification();
    let severity = notification.severity();
    let accent = severity.color();
    let presence = entry.presence(now);
    let fade = move |color: Color| Color {
        a: color.a * presence,
        ..color
    };

    let icon = icons::tinted(icons::sized(severity_icon(severity), sizing::ICON_MD), fade(accent));

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = notification.title_text() {
        body = body.push(
            text(title.to_string())
                .size(typography::BODY)
                .font(Font {
                    weight: font::Weight::Semibold,
                    ..Font::DEFAULT
                }),
        );
    }
    body = body.push(text(notification.message().to_string()).size(typography::BODY_SM));
    if let Some(action) = notification.action_content() {
        body = body.push(
            button(text(action.label.clone()).size(typography::BODY_SM))
                .padding(0)
                .on_press(Message::Action {
                    id: entry.id(),
                    key: action.key.clone(),
                })
                .style(styles::button::link(fade(accent))),
        );
    }

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top)
        .push(icon)
        .push(body);

    if notification.is_dismissible() {
        content = content.push(
            button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
                .on_press(Message::Dismiss(entry.id()))
                .padding(spacing::XXS)
                .style(styles::button::ghost),
        );
    }

    let card = container(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(accent, presence));

    opaque(card)
}

/// Renders every active toast, one layer per anchor in use.
pub fn view_overlay<'a>(manager: &Manager) -> Element<'a, Message> {
    let now = manager.now();

    let layers = layers(manager)
        .into_iter()
        .map(|(position, entries)| -> Element<'a, Message> {
            let column = Column::with_children(entries.into_iter().map(|entry| view(entry, now)))
                .spacing(spacing::XS)
                .align_x(position.horizontal());

            container(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(position.horizontal())
                .align_y(position.vertical())
                .padding(spacing::MD)
                .into()
        });

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Groups active toasts by anchor, preserving insertion order within each group.
pub fn layers(manager: &Manager) -> Vec<(Position, Vec<&ActiveNotification>)> {
    manager
        .positions_in_use()
        .into_iter()
        .map(|position| {
            let entries = manager
                .notifications()
                .filter(|entry| entry.position() == position)
                .collect();
            (position, entries)
        })
        .collect()
}

/// Returns the default icon for the severity level.
#[must_use]
pub fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Success => icons::circle_check(),
        Severity::Info => icons::info(),
        Severity::Warning => icons::warning(),
        Severity::Error => icons::circle_cross(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{ManualClock, Notification};

    #[test]
    fn severity_icons_are_defined() {
        for severity in Severity::ALL {
            let _ = severity_icon(severity);
        }
    }

    #[test]
    fn layers_group_by_anchor_in_insertion_order() {
        let mut manager = Manager::with_clock(ManualClock::new()).position(Position::TopLeft);
        let a = manager.push(Notification::info("a"));
        let b = manager.push(Notification::info("b").position(Position::BottomCenter));
        let c = manager.push(Notification::info("c"));

        let layers = layers(&manager);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].0, Position::TopLeft);
        let ids: Vec<_> = layers[0].1.iter().map(|entry| entry.id()).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(layers[1].1[0].id(), b);
    }

    #[test]
    fn overlay_renders_every_kind_of_toast() {
        let mut manager = Manager::with_clock(ManualClock::new());
        manager.push(Notification::success("saved").title("Done"));
        manager.push(Notification::error("failed").action("Retry", "retry"));
        manager.push(Notification::warning("pinned").dismissible(false));

        let _element: Element<'_, Message> = view_overlay(&manager);
    }

    #[test]
    fn empty_overlay_renders() {
        let _element: Element<'_, Message> = view_overlay(&Manager::new());
    }
}
