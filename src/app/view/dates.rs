//! Age calculator and date difference views

use crate::app::ui_components::{
    card_container, primary_button, result_container, themed_text_input,
};
use crate::app::{Message, State};
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Font, Length};

fn date_field<'a>(
    state: &'a State,
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    on_submit: Message,
) -> Element<'a, Message> {
    let theme = &state.theme;
    column![
        text(label).size(12).color(theme.fg_secondary),
        text_input("YYYY-MM-DD", value)
            .on_input(on_input)
            .on_submit(on_submit)
            .font(Font::MONOSPACE)
            .padding(10)
            .size(13)
            .style(move |_, status| themed_text_input(theme, status)),
    ]
    .spacing(4)
    .into()
}

fn stat_row<'a>(state: &'a State, label: &'a str, value: String) -> Element<'a, Message> {
    let theme = &state.theme;
    row![
        text(label).size(12).color(theme.fg_secondary),
        container(row![]).width(Length::Fill),
        text(value)
            .size(13)
            .font(Font::MONOSPACE)
            .color(theme.fg_primary),
    ]
    .align_y(Alignment::Center)
    .into()
}

pub fn view_age(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.age;

    let mut body = column![
        date_field(
            state,
            "Birth date",
            &form.birth_date,
            Message::AgeBirthDateChanged,
            Message::AgeCompute,
        ),
        button(text("Compute age").size(13))
            .on_press(Message::AgeCompute)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    if let Some(result) = form.result {
        let headline = format!(
            "{} years, {} months, {} days",
            result.years, result.months, result.days
        );
        let status = if result.is_adult { "Adult" } else { "Minor" };

        body = body.push(
            container(
                column![
                    text(headline).size(18).color(theme.fg_primary),
                    stat_row(state, "Total months", result.total_months.to_string()),
                    stat_row(state, "Total weeks", result.total_weeks.to_string()),
                    stat_row(state, "Total days", result.total_days.to_string()),
                    stat_row(
                        state,
                        "Next birthday",
                        format!(
                            "{} (in {} days)",
                            result.next_birthday.format("%Y-%m-%d"),
                            result.days_to_birthday
                        ),
                    ),
                    stat_row(
                        state,
                        "Life progress",
                        format!("{:.1}% of 80 years", result.life_progress_percent()),
                    ),
                    stat_row(state, "Status", status.to_string()),
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

pub fn view_date_difference(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.date_diff;

    let mut body = column![
        row![
            date_field(
                state,
                "Start date",
                &form.start_date,
                Message::DiffStartChanged,
                Message::DiffCompute,
            ),
            date_field(
                state,
                "End date",
                &form.end_date,
                Message::DiffEndChanged,
                Message::DiffCompute,
            ),
        ]
        .spacing(12),
        button(text("Compute difference").size(13))
            .on_press(Message::DiffCompute)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    if let Some(span) = form.result {
        body = body.push(
            container(
                column![
                    stat_row(state, "Years", span.years.to_string()),
                    stat_row(state, "Months", span.months.to_string()),
                    stat_row(state, "Weeks", span.weeks.to_string()),
                    stat_row(state, "Days", span.days.to_string()),
                    stat_row(state, "Hours", span.hours.to_string()),
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
