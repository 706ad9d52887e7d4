//! Sidebar with tool search and navigation

use crate::app::helpers::fuzzy_filter_tools;
use crate::app::ui_components::{
    active_card_button, active_tab_button, card_button, secondary_button,
    section_header_container, sidebar_container, themed_scrollable, themed_text_input,
};
use crate::app::{Message, Screen, State};
use crate::core::catalog;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Id};
use iced::{Alignment, Element, Length};

pub fn view_sidebar(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let branding = column![
        text("Handy").size(20).color(theme.accent),
        text("Everyday utilities").size(11).color(theme.fg_muted),
    ]
    .spacing(2);

    let search = text_input("Search tools...", &state.tool_search)
        .id(Id::new(super::TOOL_SEARCH_INPUT_ID))
        .on_input(Message::ToolSearchChanged)
        .padding(10)
        .size(13)
        .style(move |_, status| themed_text_input(theme, status));

    let matches = fuzzy_filter_tools(catalog::TOOLS.iter(), &state.tool_search);

    let header = row![
        container(text("TOOLS").size(9).color(theme.fg_muted))
            .padding([2, 6])
            .style(move |_| section_header_container(theme)),
        container(row![]).width(Length::Fill),
        text(format!("{}/{}", matches.len(), catalog::TOOLS.len()))
            .size(9)
            .color(theme.fg_muted),
    ]
    .align_y(Alignment::Center);

    let tool_list: Element<'_, Message> = if matches.is_empty() {
        container(
            text("No tools match")
                .size(12)
                .color(theme.fg_muted),
        )
        .padding(12)
        .width(Length::Fill)
        .into()
    } else {
        column(
            matches
                .iter()
                .map(|&(tool, _score)| view_tool_entry(state, tool))
                .collect::<Vec<_>>(),
        )
        .spacing(6)
        .into()
    };

    let tools = scrollable(container(tool_list).padding([0, 2]))
        .id(Id::new(super::SIDEBAR_SCROLLABLE_ID))
        .height(Length::Fill)
        .style(move |_, status| themed_scrollable(theme, status));

    let home_button = button(
        text("⌂ Home")
            .size(13)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(Message::GoHome)
    .width(Length::Fill)
    .padding(8)
    .style(move |_, status| match state.screen {
        Screen::Home => active_tab_button(theme, status),
        _ => secondary_button(theme, status),
    });

    let settings_button = button(
        text("Settings")
            .size(13)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(Message::OpenSettings)
    .width(Length::Fill)
    .padding(8)
    .style(move |_, status| match state.screen {
        Screen::Settings => active_tab_button(theme, status),
        _ => secondary_button(theme, status),
    });

    container(
        column![
            branding,
            search,
            header,
            tools,
            column![home_button, settings_button].spacing(6),
        ]
        .spacing(12)
        .padding(14)
        .width(Length::Fixed(240.0))
        .height(Length::Fill),
    )
    .style(move |_| sidebar_container(theme))
    .into()
}

fn view_tool_entry<'a>(state: &'a State, tool: &'static catalog::ToolInfo) -> Element<'a, Message> {
    let theme = &state.theme;
    let is_active = state.screen == Screen::Tool(tool);

    let dot = text("●").size(10).color(theme.accent_for(tool.accent));
    let label = container(
        text(tool.name)
            .size(13)
            .color(theme.fg_primary)
            .wrapping(Wrapping::None),
    )
    .width(Length::Fill)
    .clip(true);

    button(row![dot, label].spacing(8).align_y(Alignment::Center))
        .on_press(Message::ToolSelected(tool.id))
        .width(Length::Fill)
        .padding([8, 10])
        .style(move |_, status| {
            if is_active {
                active_card_button(theme, status)
            } else {
                card_button(theme, status)
            }
        })
        .into()
}
