// SPDX-License-Identifier: MPL-2.0
//! Components render into a host view with the host's own message type.

use iced::widget::Column;
use iced::Element;
use iced_swatch::ui::alert::Alert;
use iced_swatch::ui::icons;
use iced_swatch::ui::inputs::checkbox::Checkbox;
use iced_swatch::ui::inputs::text_input::{self, Kind, TextInput};
use iced_swatch::ui::notifications::Severity;
use iced_swatch::ui::theme_switcher;
use iced_swatch::ui::theming::ThemeMode;
use iced_swatch::ui::typography as type_scale;

#[derive(Debug, Clone)]
enum HostMessage {
    Dismissed(Severity),
    Toggled(bool),
    Field(text_input::Message),
    Theme(ThemeMode),
}

struct Host {
    field: text_input::State,
    accepted: bool,
}

impl Host {
    fn view(&self) -> Element<'_, HostMessage> {
        let field = TextInput::new("Email")
            .kind(Kind::Email)
            .leading_icon(icons::envelope)
            .clearable(true)
            .error("Please enter a valid email address")
            .view(&self.field)
            .map(HostMessage::Field);

        let password = TextInput::new("Password")
            .kind(Kind::Password)
            .view(&self.field)
            .map(HostMessage::Field);

        Column::new()
            .push(type_scale::h1("Settings"))
            .push(theme_switcher::view(ThemeMode::System, true, HostMessage::Theme))
            .push(field)
            .push(password)
            .push(
                Checkbox::new(self.accepted)
                    .label("Accept terms")
                    .indeterminate(!self.accepted)
                    .view(HostMessage::Toggled),
            )
            .push(
                Alert::new(Severity::Warning, "Check your input.")
                    .title("Warning")
                    .dismissible(true)
                    .view(HostMessage::Dismissed(Severity::Warning)),
            )
            .into()
    }
}

#[test]
fn components_compose_into_host_view() {
    let mut field = text_input::State::new();
    let _ = text_input::update(&mut field, text_input::Message::Changed("ada@".into()));
    let host = Host {
        field,
        accepted: false,
    };
    let _element = host.view();
}

#[test]
fn component_elements_outlive_their_props() {
    let element: Element<'static, HostMessage> = {
        let alert = Alert::new(Severity::Error, String::from("Temporary props"));
        alert.view(HostMessage::Dismissed(Severity::Error))
    };
    drop(element);

    let element: Element<'static, text_input::Message> = {
        let state = text_input::State::with_value("short-lived");
        TextInput::new("Name").clearable(true).view(&state)
    };
    drop(element);
}
