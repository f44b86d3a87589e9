// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as button_widget, checkbox as checkbox_widget, text_input};
    use iced::Theme;
    use iced_swatch::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
    use iced_swatch::ui::notifications::Severity;
    use iced_swatch::ui::styles::{button, checkbox, container, text_input as field};
    use iced_swatch::ui::theming::{Appearance, ColorScheme};
    use iced_swatch::ui::typography::Tone;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, button_widget::Status::Active);
            let _ = button::selected(&theme, button_widget::Status::Hovered);
            let _ = button::unselected(&theme, button_widget::Status::Pressed);
            let _ = button::ghost(&theme, button_widget::Status::Disabled);
            let _ = button::link(palette::INFO_500)(&theme, button_widget::Status::Active);
            let _ = container::page(&theme);
            let _ = container::panel(&theme);
            let _ = container::segmented(&theme);
            let _ = container::toast(palette::SUCCESS_500, 1.0)(&theme);
            let _ = container::alert(palette::WARNING_500, true)(&theme);
            let _ = field::field(false)(&theme, text_input::Status::Active);
            let _ = checkbox::boxed(false, false)(
                &theme,
                checkbox_widget::Status::Active { is_checked: true },
            );
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::ICON_LG;
        assert!(typography::DISPLAY > typography::H1);
    }

    #[test]
    fn schemes_invert_between_light_and_dark() {
        let light = ColorScheme::for_appearance(Appearance::Light);
        let dark = ColorScheme::for_appearance(Appearance::Dark);

        assert!(light.background.r > dark.background.r);
        assert!(light.foreground.r < dark.foreground.r);
    }

    #[test]
    fn severity_accents_are_distinct() {
        for (index, a) in Severity::ALL.iter().enumerate() {
            for b in &Severity::ALL[index + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share an accent");
            }
        }
    }

    #[test]
    fn error_states_use_destructive_color() {
        let theme = Theme::Light;
        let scheme = ColorScheme::of(&theme);

        let input = field::field(true)(&theme, text_input::Status::Active);
        assert_eq!(input.border.color, scheme.destructive);
        assert_eq!(Tone::Destructive.color(&scheme), Some(scheme.destructive));
    }
}
