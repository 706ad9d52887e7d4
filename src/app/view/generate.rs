//! Generator views: email suggestions, passwords, QR codes

use crate::app::ui_components::{
    card_container, primary_button, result_container, secondary_button, themed_pick_list,
    themed_pick_list_menu, themed_slider, themed_text_input, themed_toggler,
};
use crate::app::{Message, State};
use crate::core::generate::{self, Strength};
use crate::core::qr::{self, QrContent};
use iced::widget::{button, column, container, image, pick_list, row, slider, text, text_input, toggler};
use iced::{Alignment, Element, Font, Length};
use strum::IntoEnumIterator;

fn field<'a>(
    state: &'a State,
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let theme = &state.theme;
    column![
        text(label).size(12).color(theme.fg_secondary),
        text_input(placeholder, value)
            .on_input(on_input)
            .padding(10)
            .size(13)
            .style(move |_, status| themed_text_input(theme, status)),
    ]
    .spacing(4)
    .into()
}

pub fn view_email(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.email;

    let domain_picker = pick_list(
        generate::EMAIL_DOMAINS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        Some(form.domain.clone()),
        Message::EmailDomainSelected,
    )
    .width(Length::Fixed(160.0))
    .padding(8)
    .text_size(13)
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    let mut body = column![
        row![
            field(
                state,
                "First name",
                "Ada",
                &form.first_name,
                Message::EmailFirstChanged,
            ),
            field(
                state,
                "Last name",
                "Lovelace",
                &form.last_name,
                Message::EmailLastChanged,
            ),
        ]
        .spacing(12),
        field(
            state,
            "Extra word (optional)",
            "dev, studio...",
            &form.extra,
            Message::EmailExtraChanged,
        ),
        row![
            column![
                text("Domain").size(12).color(theme.fg_secondary),
                domain_picker,
            ]
            .spacing(4),
            container(row![]).width(Length::Fill),
            toggler(form.include_numbers)
                .label("Add numbers")
                .text_size(12)
                .on_toggle(Message::EmailNumbersToggled)
                .style(move |_, status| themed_toggler(theme, status)),
        ]
        .align_y(Alignment::End),
        button(text("Generate suggestions").size(13))
            .on_press(Message::EmailGenerate)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    if !form.results.is_empty() {
        let entries: Vec<Element<'_, Message>> = form
            .results
            .iter()
            .map(|address| {
                row![
                    text(address)
                        .size(13)
                        .font(Font::MONOSPACE)
                        .color(theme.fg_primary),
                    container(row![]).width(Length::Fill),
                    button(text("Copy").size(11))
                        .on_press(Message::CopyText(address.clone()))
                        .padding([4, 10])
                        .style(move |_, status| secondary_button(theme, status)),
                ]
                .align_y(Alignment::Center)
                .into()
            })
            .collect();

        body = body.push(
            container(column(entries).spacing(6))
                .padding(14)
                .width(Length::Fill)
                .style(move |_| result_container(theme)),
        );
    }

    container(body)
        .padding(16)
        .max_width(520)
        .style(move |_| card_container(theme))
        .into()
}

pub fn view_password(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.password;
    let options = form.options;

    let length_row = column![
        row![
            text("Length").size(12).color(theme.fg_secondary),
            container(row![]).width(Length::Fill),
            text(options.length.to_string())
                .size(12)
                .font(Font::MONOSPACE)
                .color(theme.fg_primary),
        ],
        slider(
            generate::PASSWORD_LENGTH_RANGE,
            options.length,
            Message::PasswordLengthChanged,
        )
        .style(move |_, status| themed_slider(theme, status)),
    ]
    .spacing(4);

    let class_toggle = |label, on, msg: fn(bool) -> Message| {
        toggler(on)
            .label(label)
            .text_size(12)
            .on_toggle(msg)
            .style(move |_, status| themed_toggler(theme, status))
    };

    let classes = column![
        class_toggle("Uppercase (A-Z)", options.uppercase, Message::PasswordUppercaseToggled),
        class_toggle("Lowercase (a-z)", options.lowercase, Message::PasswordLowercaseToggled),
        class_toggle("Digits (0-9)", options.digits, Message::PasswordDigitsToggled),
        class_toggle("Symbols (!@#...)", options.symbols, Message::PasswordSymbolsToggled),
    ]
    .spacing(8);

    let mut body = column![
        length_row,
        classes,
        button(text("Generate password").size(13))
            .on_press(Message::PasswordGenerate)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(14);

    if let Some(output) = &form.output {
        let strength = generate::strength(output);
        let strength_color = match strength {
            Strength::Weak => theme.danger,
            Strength::Moderate => theme.warning,
            Strength::Strong => theme.success,
            Strength::VeryStrong => theme.accent,
        };

        body = body.push(
            container(
                column![
                    text(output)
                        .size(16)
                        .font(Font::MONOSPACE)
                        .color(theme.fg_primary),
                    row![
                        text(strength.to_string()).size(12).color(strength_color),
                        container(row![]).width(Length::Fill),
                        button(text("Copy").size(11))
                            .on_press(Message::CopyText(output.clone()))
                            .padding([4, 10])
                            .style(move |_, status| secondary_button(theme, status)),
                    ]
                    .align_y(Alignment::Center),
                ]
                .spacing(8),
            )
            .padding(14)
            .width(Length::Fill)
            .style(move |_| result_container(theme)),
        );
    }

    container(body)
        .padding(16)
        .max_width(460)
        .style(move |_| card_container(theme))
        .into()
}

pub fn view_qr(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.qr;

    let content_picker = pick_list(
        QrContent::iter().collect::<Vec<_>>(),
        Some(form.content),
        Message::QrContentSelected,
    )
    .width(Length::Fixed(140.0))
    .padding(8)
    .text_size(13)
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    let size_row = column![
        row![
            text("Size").size(12).color(theme.fg_secondary),
            container(row![]).width(Length::Fill),
            text(format!("{}px", form.size))
                .size(12)
                .font(Font::MONOSPACE)
                .color(theme.fg_primary),
        ],
        slider(qr::SIZE_RANGE, form.size, Message::QrSizeChanged)
            .step(qr::SIZE_STEP)
            .style(move |_, status| themed_slider(theme, status)),
    ]
    .spacing(4);

    let generate_button = if form.fetching {
        button(text("Generating...").size(13)).padding([10, 16])
    } else {
        button(text("Generate QR code").size(13))
            .on_press(Message::QrGenerate)
            .padding([10, 16])
    }
    .style(move |_, status| primary_button(theme, status));

    let mut body = column![
        row![
            column![
                text("Content type").size(12).color(theme.fg_secondary),
                content_picker,
            ]
            .spacing(4),
            field(state, "Data", "Text, link, email...", &form.data, Message::QrDataChanged),
        ]
        .spacing(12)
        .align_y(Alignment::End),
        size_row,
        row![
            field(
                state,
                "Foreground (hex)",
                "000000",
                &form.color,
                Message::QrColorChanged,
            ),
            field(
                state,
                "Background (hex)",
                "ffffff",
                &form.bg_color,
                Message::QrBgColorChanged,
            ),
        ]
        .spacing(12),
        generate_button,
    ]
    .spacing(12);

    if let Some(handle) = &form.handle {
        body = body.push(
            container(
                column![
                    image(handle.clone()).width(Length::Fixed(220.0)),
                    button(text("Save as PNG").size(12))
                        .on_press(Message::QrSavePressed)
                        .padding([8, 14])
                        .style(move |_, status| secondary_button(theme, status)),
                ]
                .spacing(10)
                .align_x(Alignment::Center),
            )
            .padding(14)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .style(move |_| result_container(theme)),
        );
    }

    container(body)
        .padding(16)
        .max_width(520)
        .style(move |_| card_container(theme))
        .into()
}
