//! Home screen: tool cards grouped by category

use crate::app::ui_components::card_button;
use crate::app::{Message, State};
use crate::core::catalog::{self, ToolCategory, ToolInfo};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

const CATEGORY_ORDER: &[ToolCategory] = &[
    ToolCategory::Calculators,
    ToolCategory::Finance,
    ToolCategory::Dates,
    ToolCategory::Generators,
    ToolCategory::Media,
    ToolCategory::Text,
];

pub fn view_home(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let mut sections = column![
        text("All tools").size(24).color(theme.fg_primary),
        text("Pick a tool, or search from the sidebar")
            .size(13)
            .color(theme.fg_secondary),
    ]
    .spacing(6);

    for category in CATEGORY_ORDER {
        let cards: Vec<Element<'_, Message>> = catalog::TOOLS
            .iter()
            .filter(|tool| tool.category == *category)
            .map(|tool| view_tool_card(state, tool))
            .collect();

        if cards.is_empty() {
            continue;
        }

        sections = sections.push(
            column![
                text(category.label().to_uppercase())
                    .size(11)
                    .color(theme.fg_muted),
                row(cards).spacing(12).wrap(),
            ]
            .spacing(8),
        );
    }

    sections.spacing(18).into()
}

fn view_tool_card<'a>(state: &'a State, tool: &'static ToolInfo) -> Element<'a, Message> {
    let theme = &state.theme;

    let header = row![
        text("●").size(10).color(theme.accent_for(tool.accent)),
        text(tool.name).size(14).color(theme.fg_primary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body = column![
        header,
        text(tool.description).size(11).color(theme.fg_secondary),
    ]
    .spacing(6);

    button(container(body).width(Length::Fill))
        .on_press(Message::ToolSelected(tool.id))
        .width(Length::Fixed(220.0))
        .padding(14)
        .style(move |_, status| card_button(theme, status))
        .into()
}
