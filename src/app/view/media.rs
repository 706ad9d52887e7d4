//! Image converter and compressor views

use crate::app::forms::PickedFile;
use crate::app::ui_components::{
    card_container, primary_button, result_container, secondary_button, themed_pick_list,
    themed_pick_list_menu, themed_slider,
};
use crate::app::{Message, State};
use crate::core::images::{self, OutputFormat};
use iced::widget::{button, column, container, pick_list, row, slider, text};
use iced::{Alignment, Element, Font, Length};
use strum::IntoEnumIterator;

fn picked_file_row<'a>(state: &'a State, picked: Option<&'a PickedFile>) -> Element<'a, Message> {
    let theme = &state.theme;

    match picked {
        Some(file) => {
            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            row![
                text(name)
                    .size(13)
                    .font(Font::MONOSPACE)
                    .color(theme.fg_primary),
                container(row![]).width(Length::Fill),
                text(images::format_file_size(file.size))
                    .size(12)
                    .color(theme.fg_secondary),
            ]
            .align_y(Alignment::Center)
            .into()
        }
        None => text("No file selected")
            .size(12)
            .color(theme.fg_muted)
            .into(),
    }
}

pub fn view_converter(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.converter;

    let format_picker = pick_list(
        OutputFormat::iter().collect::<Vec<_>>(),
        Some(form.format),
        Message::ConvertFormatSelected,
    )
    .width(Length::Fixed(120.0))
    .padding(8)
    .text_size(13)
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    let convert_button = if form.working {
        button(text("Converting...").size(13)).padding([10, 16])
    } else {
        let mut b = button(text("Convert").size(13)).padding([10, 16]);
        if form.picked.is_some() {
            b = b.on_press(Message::ConvertPressed);
        }
        b
    }
    .style(move |_, status| primary_button(theme, status));

    let mut body = column![
        row![
            button(text("Choose image...").size(13))
                .on_press(Message::ConvertPickFile)
                .padding([8, 14])
                .style(move |_, status| secondary_button(theme, status)),
            column![
                text("Convert to").size(12).color(theme.fg_secondary),
                format_picker,
            ]
            .spacing(4),
        ]
        .spacing(12)
        .align_y(Alignment::End),
        picked_file_row(state, form.picked.as_ref()),
        text(format!(
            "Up to {} per file",
            images::format_file_size(images::MAX_FILE_SIZE)
        ))
        .size(11)
        .color(theme.fg_muted),
        convert_button,
    ]
    .spacing(12);

    if let Some(converted) = &form.converted {
        body = body.push(
            container(
                row![
                    text("Output").size(12).color(theme.fg_secondary),
                    container(row![]).width(Length::Fill),
                    text(converted)
                        .size(13)
                        .font(Font::MONOSPACE)
                        .color(theme.fg_primary),
                ]
                .align_y(Alignment::Center),
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

pub fn view_compressor(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.compressor;

    let quality_row = column![
        row![
            text("Quality").size(12).color(theme.fg_secondary),
            container(row![]).width(Length::Fill),
            text(format!("{}%", form.quality))
                .size(12)
                .font(Font::MONOSPACE)
                .color(theme.fg_primary),
        ],
        slider(
            images::QUALITY_RANGE,
            form.quality,
            Message::CompressQualityChanged,
        )
        .step(images::QUALITY_STEP)
        .style(move |_, status| themed_slider(theme, status)),
    ]
    .spacing(4);

    let compress_button = if form.working {
        button(text("Compressing...").size(13)).padding([10, 16])
    } else {
        let mut b = button(text("Compress").size(13)).padding([10, 16]);
        if form.picked.is_some() {
            b = b.on_press(Message::CompressPressed);
        }
        b
    }
    .style(move |_, status| primary_button(theme, status));

    let mut body = column![
        button(text("Choose image...").size(13))
            .on_press(Message::CompressPickFile)
            .padding([8, 14])
            .style(move |_, status| secondary_button(theme, status)),
        picked_file_row(state, form.picked.as_ref()),
        quality_row,
        compress_button,
    ]
    .spacing(12);

    if let Some(stats) = form.stats {
        body = body.push(
            container(
                column![
                    row![
                        text("Original").size(12).color(theme.fg_secondary),
                        container(row![]).width(Length::Fill),
                        text(images::format_file_size(stats.original_size))
                            .size(13)
                            .font(Font::MONOSPACE)
                            .color(theme.fg_primary),
                    ],
                    row![
                        text("Compressed").size(12).color(theme.fg_secondary),
                        container(row![]).width(Length::Fill),
                        text(images::format_file_size(stats.compressed_size))
                            .size(13)
                            .font(Font::MONOSPACE)
                            .color(theme.fg_primary),
                    ],
                    row![
                        text("Savings").size(12).color(theme.fg_secondary),
                        container(row![]).width(Length::Fill),
                        text(format!("{:.1}%", stats.savings_percent))
                            .size(13)
                            .font(Font::MONOSPACE)
                            .color(theme.success),
                    ],
                ]
                .spacing(6),
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
