//! Settings tab UI

use crate::app::ui_components::{
    card_container, section_header_container, themed_pick_list, themed_pick_list_menu,
};
use crate::app::{Message, State};
use crate::theme::ThemeChoice;
use iced::widget::{column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};
use strum::IntoEnumIterator;

pub fn view_settings(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let theme_picker = pick_list(
        ThemeChoice::iter().collect::<Vec<_>>(),
        Some(state.theme_choice),
        Message::ThemeSelected,
    )
    .width(Length::Fixed(200.0))
    .padding(8)
    .text_size(13)
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    let appearance_card = container(column![
        container(text("APPEARANCE").size(12).color(theme.fg_muted))
            .padding([8, 12])
            .width(Length::Fill)
            .style(move |_| section_header_container(theme)),
        column![render_settings_row(
            "Theme",
            "Choose your preferred color scheme",
            theme_picker.into(),
            state,
        )]
        .padding(12),
    ])
    .width(Length::Fill)
    .style(move |_| card_container(theme));

    let about_card = container(column![
        container(text("ABOUT").size(12).color(theme.fg_muted))
            .padding([8, 12])
            .width(Length::Fill)
            .style(move |_| section_header_container(theme)),
        column![
            text(format!("Handy {}", env!("CARGO_PKG_VERSION")))
                .size(13)
                .color(theme.fg_primary),
            text("A grab bag of small calculators, converters, and generators.")
                .size(12)
                .color(theme.fg_secondary),
        ]
        .spacing(4)
        .padding(12),
    ])
    .width(Length::Fill)
    .style(move |_| card_container(theme));

    column![
        text("Settings").size(24).color(theme.fg_primary),
        appearance_card,
        about_card,
    ]
    .spacing(16)
    .max_width(640)
    .into()
}

fn render_settings_row<'a>(
    title: &'a str,
    description: &'a str,
    control: Element<'a, Message>,
    state: &'a State,
) -> Element<'a, Message> {
    let theme = &state.theme;

    row![
        column![
            text(title).size(13).color(theme.fg_primary),
            text(description).size(11).color(theme.fg_muted),
        ]
        .spacing(2)
        .width(Length::Fill),
        control,
    ]
    .align_y(Alignment::Center)
    .spacing(16)
    .into()
}
