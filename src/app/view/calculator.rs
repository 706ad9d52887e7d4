//! Keypad calculator and area calculator

use crate::app::ui_components::{
    active_tab_button, card_container, primary_button, result_container, secondary_button,
    themed_text_input,
};
use crate::app::{Message, State};
use crate::core::expr;
use crate::core::geometry::Shape;
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Font, Length};
use strum::IntoEnumIterator;

pub fn view_calculator(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.calculator;

    let display = text_input("0", &form.expression)
        .on_input(Message::CalcExpressionChanged)
        .on_submit(Message::CalcEvaluate)
        .font(Font::MONOSPACE)
        .size(22)
        .padding(12)
        .align_x(Alignment::End)
        .style(move |_, status| themed_text_input(theme, status));

    let error_line: Element<'_, Message> = match &form.error {
        Some(error) => text(error).size(12).color(theme.danger).into(),
        None => text(" ").size(12).into(),
    };

    let keypad = column![
        keypad_row(state, &[KeyPad::Clear, KeyPad::Char('('), KeyPad::Char(')'), KeyPad::Backspace]),
        keypad_row(state, &[KeyPad::Char('7'), KeyPad::Char('8'), KeyPad::Char('9'), KeyPad::Char('/')]),
        keypad_row(state, &[KeyPad::Char('4'), KeyPad::Char('5'), KeyPad::Char('6'), KeyPad::Char('*')]),
        keypad_row(state, &[KeyPad::Char('1'), KeyPad::Char('2'), KeyPad::Char('3'), KeyPad::Char('-')]),
        keypad_row(state, &[KeyPad::Char('0'), KeyPad::Char('.'), KeyPad::Equals, KeyPad::Char('+')]),
    ]
    .spacing(8);

    container(column![display, error_line, keypad].spacing(8))
        .padding(16)
        .max_width(360)
        .style(move |_| card_container(theme))
        .into()
}

#[derive(Clone, Copy)]
enum KeyPad {
    Char(char),
    Equals,
    Clear,
    Backspace,
}

fn keypad_row<'a>(state: &'a State, keys: &[KeyPad]) -> Element<'a, Message> {
    row(keys.iter().map(|key| keypad_button(state, *key)).collect::<Vec<_>>())
        .spacing(8)
        .into()
}

fn keypad_button(state: &State, key: KeyPad) -> Element<'_, Message> {
    let theme = &state.theme;

    let (label, message) = match key {
        KeyPad::Char(c) => (c.to_string(), Message::CalcInput(c)),
        KeyPad::Equals => ("=".to_string(), Message::CalcEvaluate),
        KeyPad::Clear => ("C".to_string(), Message::CalcClear),
        KeyPad::Backspace => ("⌫".to_string(), Message::CalcBackspace),
    };

    let styled = button(
        text(label)
            .size(16)
            .font(Font::MONOSPACE)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(message)
    .width(Length::Fill)
    .padding(12);

    match key {
        KeyPad::Equals => styled
            .style(move |_, status| primary_button(theme, status))
            .into(),
        _ => styled
            .style(move |_, status| secondary_button(theme, status))
            .into(),
    }
}

pub fn view_area(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.area;

    let tabs = row(Shape::iter()
        .map(|shape| {
            let is_active = form.shape == shape;
            button(text(shape.to_string()).size(13))
                .on_press(Message::AreaShapeSelected(shape))
                .padding([8, 14])
                .style(move |_, status| {
                    if is_active {
                        active_tab_button(theme, status)
                    } else {
                        secondary_button(theme, status)
                    }
                })
                .into()
        })
        .collect::<Vec<_>>())
    .spacing(8);

    let (label_a, label_b) = match form.shape {
        Shape::Rectangle => ("Width", Some("Length")),
        Shape::Circle => ("Radius", None),
        Shape::Triangle => ("Base", Some("Height")),
    };

    let mut inputs = column![
        text(label_a).size(12).color(theme.fg_secondary),
        text_input("0", &form.dim_a)
            .on_input(Message::AreaDimAChanged)
            .on_submit(Message::AreaCompute)
            .padding(10)
            .size(13)
            .style(move |_, status| themed_text_input(theme, status)),
    ]
    .spacing(4);

    if let Some(label_b) = label_b {
        inputs = inputs
            .push(text(label_b).size(12).color(theme.fg_secondary))
            .push(
                text_input("0", &form.dim_b)
                    .on_input(Message::AreaDimBChanged)
                    .on_submit(Message::AreaCompute)
                    .padding(10)
                    .size(13)
                    .style(move |_, status| themed_text_input(theme, status)),
            );
    }

    let compute = button(text("Compute area").size(13))
        .on_press(Message::AreaCompute)
        .padding([10, 16])
        .style(move |_, status| primary_button(theme, status));

    let mut body = column![tabs, inputs.spacing(6), compute].spacing(14);

    if let Some(area) = form.result {
        body = body.push(
            container(
                row![
                    text("Area").size(13).color(theme.fg_secondary),
                    container(row![]).width(Length::Fill),
                    text(expr::format_value(area))
                        .size(18)
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
        .max_width(420)
        .style(move |_| card_container(theme))
        .into()
}
