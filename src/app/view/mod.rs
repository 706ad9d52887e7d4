//! UI rendering module
//!
//! Split into one submodule per tool family plus the shared chrome.

// Widget IDs for state preservation
pub const TOOL_SEARCH_INPUT_ID: &str = "tool-search-input";
pub const SIDEBAR_SCROLLABLE_ID: &str = "sidebar-tool-list";

mod calculator;
mod dates;
mod finance;
mod generate;
mod home;
mod media;
mod settings;
mod sidebar;
mod text;

use crate::app::ui_components::{main_container, notification_banner, themed_scrollable};
use crate::app::{Message, Screen, State};
use iced::widget::{column, container, row, scrollable, stack};
use iced::{alignment, Element, Length};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let sidebar = sidebar::view_sidebar(state);

    let content: Element<'_, Message> = match state.screen {
        Screen::Home => home::view_home(state),
        Screen::Settings => settings::view_settings(state),
        Screen::Tool(tool) => {
            let body = match tool.id {
                "calculator" => calculator::view_calculator(state),
                "area-calculator" => calculator::view_area(state),
                "percentage-calculator" => finance::view_percentage(state),
                "gst-calculator" => finance::view_gst(state),
                "emi-calculator" => finance::view_emi(state),
                "profit-loss" => finance::view_profit_loss(state),
                "ecommerce-profit" => finance::view_ecommerce(state),
                "age-calculator" => dates::view_age(state),
                "date-difference" => dates::view_date_difference(state),
                "gmail-generator" => generate::view_email(state),
                "password-generator" => generate::view_password(state),
                "qr-code-generator" => generate::view_qr(state),
                "image-converter" => media::view_converter(state),
                "image-compressor" => media::view_compressor(state),
                "word-counter" => text::view_word_counter(state),
                _ => home::view_home(state),
            };

            column![
                iced::widget::text(tool.name).size(24).color(theme.fg_primary),
                iced::widget::text(tool.description)
                    .size(13)
                    .color(theme.fg_secondary),
                body,
            ]
            .spacing(12)
            .into()
        }
    };

    let workspace = container(
        scrollable(container(content).padding(24).width(Length::Fill))
            .height(Length::Fill)
            .style(move |_, status| themed_scrollable(theme, status)),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let base = container(row![sidebar, workspace])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme));

    // Banner overlay layer (free-floating at top-right)
    // Always use stack! so the widget tree shape stays stable and scroll
    // state survives banner churn.
    if state.banners.is_empty() {
        stack![base, iced::widget::Space::new()].into()
    } else {
        let banner_column = column(
            state
                .banners
                .iter()
                .take(2)
                .enumerate()
                .map(|(index, banner)| notification_banner(banner, theme, index))
                .collect::<Vec<_>>(),
        )
        .spacing(8)
        .width(Length::Shrink)
        .padding(16);

        stack![
            base,
            container(banner_column)
                .width(Length::Fill)
                .height(Length::Shrink)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
        ]
        .into()
    }
}
