// SPDX-License-Identifier: MPL-2.0
//! Demo page showcasing every component of the design system.
//!
//! The page is a single scrollable column of sections. The toast overlay is
//! stacked on top so toasts float above the page at their anchors.

use super::{App, Choice, Field, Message, GROUP_SIZE};
use crate::ui::alert::Alert;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::inputs::checkbox::Checkbox;
use crate::ui::inputs::text_input::{self, Kind, TextInput};
use crate::ui::inputs::Size;
use crate::ui::notifications::{toast, Position, Severity};
use crate::ui::styles;
use crate::ui::theme_switcher;
use crate::ui::typography::{self as type_scale, Tone, Weight};
use iced::widget::{button, container, scrollable, text, Column, Row, Space, Stack};
use iced::{alignment, Element, Length};

const GROUP_LABELS: [&str; GROUP_SIZE] = ["Option 1", "Option 2", "Option 3"];

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let page = Column::new()
            .spacing(spacing::XL)
            .max_width(sizing::PAGE_MAX_WIDTH)
            .push(self.view_header())
            .push(section("Typography", view_typography()))
            .push(section("Text Input", self.view_text_inputs()))
            .push(section("Checkbox", self.view_checkboxes()))
            .push(section("Toast", self.view_toasts()))
            .push(section("Alert", self.view_alerts()))
            .push(section("Theme", self.view_root_classes()));

        let page = container(scrollable(
            container(page)
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

        let overlay = toast::view_overlay(&self.toast_surface().manager()).map(Message::Toast);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(overlay)
            .into()
    }

    fn view_header<'a>(&'a self) -> Element<'a, Message> {
        let heading = Column::new()
            .spacing(spacing::XS)
            .push(type_scale::h1("Design System").tone(Tone::Primary))
            .push(
                type_scale::body_lg("Typography, inputs, feedback and theming built on shared tokens.")
                    .tone(Tone::Muted),
            );

        Row::new()
            .align_y(alignment::Vertical::Center)
            .spacing(spacing::MD)
            .push(container(heading).width(Length::Fill))
            .push(theme_switcher::view(
                self.theme_store().mode(),
                true,
                Message::ThemeSelected,
            ))
            .into()
    }

    fn view_text_inputs<'a>(&'a self) -> Element<'a, Message> {
        let basics = Column::new()
            .spacing(spacing::LG)
            .push(self.input(
                Field::Name,
                TextInput::new("Full Name")
                    .placeholder("Enter your name")
                    .help_text("As it appears on your ID")
                    .required(true),
            ))
            .push(self.input(
                Field::Password,
                TextInput::new("Password")
                    .placeholder("Enter your password")
                    .kind(Kind::Password)
                    .leading_icon(icons::lock),
            ))
            .push(self.input(
                Field::Search,
                TextInput::new("Search")
                    .placeholder("Search...")
                    .leading_icon(icons::magnifier)
                    .clearable(true),
            ));

        let mut email = TextInput::new("Email")
            .placeholder("you@example.com")
            .kind(Kind::Email)
            .leading_icon(icons::envelope);
        if self.email_error {
            email = email.error("Please enter a valid email address");
        }

        let validation = Column::new()
            .spacing(spacing::SM)
            .push(self.input(Field::Email, email))
            .push(
                button(text("Toggle error").size(typography::BODY_SM))
                    .on_press(Message::ToggleEmailError)
                    .style(styles::button::ghost),
            )
            .push(self.input(
                Field::Username,
                TextInput::new("Username")
                    .placeholder("Not available")
                    .disabled(true),
            ));

        let sizes = Row::new()
            .spacing(spacing::MD)
            .push(self.input(
                Field::Small,
                TextInput::new("Small").placeholder("Small input").size(Size::Sm),
            ))
            .push(self.input(
                Field::Medium,
                TextInput::new("Medium").placeholder("Medium input").size(Size::Md),
            ))
            .push(self.input(
                Field::Large,
                TextInput::new("Large").placeholder("Large input").size(Size::Lg),
            ));

        Column::new()
            .spacing(spacing::LG)
            .push(basics)
            .push(validation)
            .push(subheading("Sizes"))
            .push(sizes)
            .into()
    }

    fn input<'a>(&'a self, field: Field, input: TextInput) -> Element<'a, Message> {
        let empty = text_input::State::new();
        let state = self.field(field).unwrap_or(&empty);
        input
            .view(state)
            .map(move |message| Message::Input(field, message))
    }

    fn view_checkboxes<'a>(&'a self) -> Element<'a, Message> {
        let basics = Column::new()
            .spacing(spacing::MD)
            .push(self.choice(Choice::Default, |checkbox| {
                checkbox.label("Accept terms and conditions")
            }))
            .push(self.choice(Choice::WithHelp, |checkbox| {
                checkbox
                    .label("Subscribe to newsletter")
                    .help_text("Get weekly updates about new features")
            }))
            .push(self.choice(Choice::Error, |checkbox| {
                checkbox
                    .label("I agree to the privacy policy")
                    .error("You must accept the privacy policy")
                    .required(true)
            }))
            .push(
                Checkbox::new(true)
                    .label("Disabled option")
                    .disabled(true)
                    .view(|value| Message::Checked(Choice::Disabled, value)),
            );

        let sizes = Row::new()
            .spacing(spacing::LG)
            .push(self.choice(Choice::Small, |checkbox| checkbox.label("Small").size(Size::Sm)))
            .push(self.choice(Choice::Medium, |checkbox| checkbox.label("Medium").size(Size::Md)))
            .push(self.choice(Choice::Large, |checkbox| checkbox.label("Large").size(Size::Lg)));

        let (all, mixed) = self.group_state();
        let children = self
            .group()
            .into_iter()
            .zip(GROUP_LABELS)
            .enumerate()
            .map(|(index, (checked, label))| -> Element<'a, Message> {
                Checkbox::new(checked)
                    .label(label)
                    .view(move |value| Message::OptionToggled(index, value))
            });

        let group = Column::new()
            .spacing(spacing::XS)
            .push(
                Checkbox::new(all)
                    .label("Select all")
                    .indeterminate(mixed)
                    .view(Message::AllOptionsToggled),
            )
            .push(
                container(Column::with_children(children).spacing(spacing::XS))
                    .padding(iced::Padding::ZERO.left(spacing::LG)),
            );

        Column::new()
            .spacing(spacing::LG)
            .push(basics)
            .push(subheading("Sizes"))
            .push(sizes)
            .push(subheading("Indeterminate"))
            .push(group)
            .into()
    }

    fn choice<'a>(
        &'a self,
        choice: Choice,
        configure: impl FnOnce(Checkbox) -> Checkbox,
    ) -> Element<'a, Message> {
        configure(Checkbox::new(self.is_checked(choice)))
            .view(move |value| Message::Checked(choice, value))
    }

    fn view_toasts<'a>(&'a self) -> Element<'a, Message> {
        let severities = Row::with_children(Severity::ALL.into_iter().map(
            |severity| -> Element<'a, Message> {
                button(text(format!("Show {}", severity.as_str())))
                    .on_press(Message::ShowToast(severity))
                    .style(styles::button::primary)
                    .into()
            },
        ))
        .spacing(spacing::SM);

        let current = self.toast_surface().manager().surface_position();
        let positions = Row::with_children(Position::ALL.into_iter().map(
            |position| -> Element<'a, Message> {
                let style = if position == current {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                button(text(position.as_str()).size(typography::BODY_SM))
                    .on_press(Message::ToastPositionSelected(position))
                    .style(style)
                    .into()
            },
        ))
        .spacing(spacing::XXS)
        .wrap();

        let extras = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text("Persistent"))
                    .on_press(Message::ShowPersistentToast)
                    .style(styles::button::unselected),
            )
            .push(
                button(text("With action"))
                    .on_press(Message::ShowActionToast)
                    .style(styles::button::unselected),
            )
            .push(
                button(text("Dismiss all"))
                    .on_press(Message::DismissAllToasts)
                    .style(styles::button::ghost),
            );

        let removed = self.removed_toasts();
        let status = match self.last_action() {
            Some(key) => format!("{removed} dismissed, last action: {key}"),
            None => format!("{removed} dismissed"),
        };

        Column::new()
            .spacing(spacing::MD)
            .push(severities)
            .push(subheading("Position"))
            .push(positions)
            .push(extras)
            .push(type_scale::helper(status))
            .into()
    }

    fn view_alerts<'a>(&'a self) -> Element<'a, Message> {
        let alerts = Severity::ALL
            .into_iter()
            .filter(|&severity| self.is_alert_visible(severity))
            .map(|severity| -> Element<'a, Message> {
                let (title, body) = alert_copy(severity);
                Alert::new(severity, body)
                    .title(title)
                    .dismissible(true)
                    .view(Message::AlertDismissed(severity))
            });

        // Not dismissible, so the message is never emitted.
        let plain = Alert::new(Severity::Info, "Borderless alerts blend into dense layouts.")
            .bordered(false)
            .full_width(false)
            .view(Message::ResetAlerts);

        Column::new()
            .spacing(spacing::SM)
            .extend(alerts)
            .push(plain)
            .push(
                button(text("Reset alerts"))
                    .on_press(Message::ResetAlerts)
                    .style(styles::button::ghost),
            )
            .into()
    }

    fn view_root_classes<'a>(&'a self) -> Element<'a, Message> {
        let store = self.theme_store();
        Column::new()
            .spacing(spacing::XS)
            .push(type_scale::body(format!("Mode: {}", store.mode().label())))
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(type_scale::body_sm("Root classes").weight(Weight::Medium))
                    .push(type_scale::code(store.root().class_attribute())),
            )
            .into()
    }
}

fn view_typography<'a>() -> Element<'a, Message> {
    let headings = Column::new()
        .spacing(spacing::XS)
        .push(type_scale::display("Display"))
        .push(type_scale::h1("Heading 1"))
        .push(type_scale::h2("Heading 2"))
        .push(type_scale::h3("Heading 3"))
        .push(type_scale::h4("Heading 4"))
        .push(type_scale::h5("Heading 5"))
        .push(type_scale::h6("Heading 6"));

    let body = Column::new()
        .spacing(spacing::XS)
        .push(type_scale::body_lg("Large body text for introductions."))
        .push(type_scale::body("Regular body text for most content."))
        .push(type_scale::body_sm("Small body text for secondary content."))
        .push(type_scale::caption("Caption text"))
        .push(type_scale::helper("Helper text"))
        .push(type_scale::code("let tokens = design_tokens::spacing::MD;"));

    let tones = Row::new()
        .spacing(spacing::MD)
        .push(type_scale::body("Muted").tone(Tone::Muted))
        .push(type_scale::body("Primary").tone(Tone::Primary))
        .push(type_scale::body("Success").tone(Tone::Success))
        .push(type_scale::body("Warning").tone(Tone::Warning))
        .push(type_scale::body("Destructive").tone(Tone::Destructive))
        .push(type_scale::body("Info").tone(Tone::Info));

    let weights = Row::new()
        .spacing(spacing::MD)
        .push(type_scale::body("Light").weight(Weight::Light))
        .push(type_scale::body("Medium").weight(Weight::Medium))
        .push(type_scale::body("Semibold").weight(Weight::Semibold))
        .push(type_scale::body("Bold").weight(Weight::Bold));

    let truncated = container(
        type_scale::body("This line is far too long for its box and gets cut off instead of wrapping.")
            .truncate(true),
    )
    .width(Length::Fixed(sizing::INPUT_WIDTH));

    Column::new()
        .spacing(spacing::LG)
        .push(headings)
        .push(body)
        .push(tones)
        .push(weights)
        .push(truncated)
        .into()
}

fn section<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::LG)
            .push(type_scale::h2(title))
            .push(content),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

fn subheading<'a>(title: &'a str) -> Element<'a, Message> {
    Column::new()
        .push(Space::new().height(spacing::XS))
        .push(type_scale::h5(title))
        .into()
}

fn alert_copy(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Info => ("Information", "This is an informational alert with some details."),
        Severity::Success => ("Success", "Your changes have been saved successfully."),
        Severity::Warning => ("Warning", "Please review your settings before continuing."),
        Severity::Error => ("Error", "Something went wrong. Please try again."),
    }
}
