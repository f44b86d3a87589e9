// SPDX-License-Identifier: MPL-2.0
//! Segmented Light / Dark / System selector.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, svg::Svg, text, Row};
use iced::{alignment, Element};

/// Renders the switcher with `selected` highlighted; pressing a segment emits `on_select(mode)`.
pub fn view<'a, Message: Clone + 'a>(
    selected: ThemeMode,
    show_labels: bool,
    on_select: impl Fn(ThemeMode) -> Message,
) -> Element<'a, Message> {
    let segments = ThemeMode::ALL.into_iter().map(|mode| -> Element<'a, Message> {
        let mut content = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(mode_icon(mode), sizing::ICON_SM));
        if show_labels {
            content = content.push(text(mode.label()).size(typography::BODY_SM));
        }

        let style = if mode == selected {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        button(content)
            .padding([6.0, spacing::SM])
            .on_press(on_select(mode))
            .style(style)
            .into()
    });

    container(Row::with_children(segments).spacing(spacing::XXS))
        .padding(spacing::XXS)
        .style(styles::container::segmented)
        .into()
}

#[must_use]
pub fn mode_icon(mode: ThemeMode) -> Svg<'static> {
    match mode {
        ThemeMode::Light => icons::sun(),
        ThemeMode::Dark => icons::moon(),
        ThemeMode::System => icons::monitor(),
    }
}
