//! Word counter view

use crate::app::ui_components::{
    card_container, result_container, secondary_button, themed_text_editor,
};
use crate::app::{Message, State};
use iced::widget::{button, column, container, row, text, text_editor};
use iced::{Alignment, Element, Font, Length};

pub fn view_word_counter(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.word_count;
    let stats = form.stats;

    let editor = text_editor(&form.content)
        .placeholder("Paste or type your text here...")
        .on_action(Message::WordEditorAction)
        .height(Length::Fixed(220.0))
        .padding(10)
        .size(13)
        .style(move |_, status| themed_text_editor(theme, status));

    let stat = |label: &'static str, value: String| {
        container(
            column![
                text(value)
                    .size(18)
                    .font(Font::MONOSPACE)
                    .color(theme.fg_primary),
                text(label).size(11).color(theme.fg_secondary),
            ]
            .spacing(2)
            .align_x(Alignment::Center),
        )
        .padding([10, 14])
        .style(move |_| result_container(theme))
    };

    let counters = row![
        stat("Words", stats.words.to_string()),
        stat("Characters", stats.characters.to_string()),
        stat("No spaces", stats.characters_no_spaces.to_string()),
        stat("Sentences", stats.sentences.to_string()),
        stat("Paragraphs", stats.paragraphs.to_string()),
        stat("Lines", stats.lines.to_string()),
    ]
    .spacing(10)
    .wrap();

    let derived = column![
        text(format!(
            "Average word length: {:.1} characters",
            stats.avg_word_length()
        ))
        .size(12)
        .color(theme.fg_secondary),
        text(format!(
            "Words per sentence: {:.1}",
            stats.words_per_sentence()
        ))
        .size(12)
        .color(theme.fg_secondary),
        text(format!("Reading time: about {} min", stats.reading_minutes))
            .size(12)
            .color(theme.fg_secondary),
    ]
    .spacing(4);

    let copy = button(text("Copy").size(13))
        .on_press(Message::CopyText(form.content.text()))
        .padding([8, 14])
        .style(move |_, status| secondary_button(theme, status));

    let clear = button(text("Clear").size(13))
        .on_press(Message::WordClear)
        .padding([8, 14])
        .style(move |_, status| secondary_button(theme, status));

    let actions = row![copy, clear].spacing(8);

    container(column![editor, counters, derived, actions].spacing(14))
        .padding(16)
        .max_width(640)
        .style(move |_| card_container(theme))
        .into()
}
