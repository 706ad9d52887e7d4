//! Money tools: percentages, GST, EMI, profit/loss, e-commerce margins

use crate::app::ui_components::{
    active_tab_button, card_container, primary_button, result_container, secondary_button,
    themed_pick_list, themed_pick_list_menu, themed_progress_bar, themed_slider,
    themed_text_input, themed_toggler,
};
use crate::app::{Message, State};
use crate::core::finance::{self, PercentMode};
use iced::widget::{
    button, column, container, pick_list, progress_bar, row, slider, text, text_input, toggler,
};
use iced::{Alignment, Element, Font, Length};
use strum::IntoEnumIterator;

/// Label + single-line input, the building block of every finance form.
fn field<'a>(
    state: &'a State,
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    on_submit: Message,
) -> Element<'a, Message> {
    let theme = &state.theme;
    column![
        text(label).size(12).color(theme.fg_secondary),
        text_input("0", value)
            .on_input(on_input)
            .on_submit(on_submit)
            .padding(10)
            .size(13)
            .style(move |_, status| themed_text_input(theme, status)),
    ]
    .spacing(4)
    .into()
}

fn result_row<'a>(state: &'a State, label: &'a str, value: String) -> Element<'a, Message> {
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

fn results_panel<'a>(state: &'a State, rows: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let theme = &state.theme;
    container(column(rows).spacing(6))
        .padding(14)
        .width(Length::Fill)
        .style(move |_| result_container(theme))
        .into()
}

pub fn view_percentage(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.percent;

    let tabs = row(PercentMode::iter()
        .map(|mode| {
            let is_active = form.mode == mode;
            button(text(mode.to_string()).size(13))
                .on_press(Message::PercentModeSelected(mode))
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

    let (label_a, label_b) = match form.mode {
        PercentMode::PercentOf => ("Percent (%)", "Of value"),
        PercentMode::WhatPercent => ("Part (X)", "Total (Y)"),
        PercentMode::ReversePercent => ("Known value", "Is this percent (%)"),
    };

    let mut body = column![
        tabs,
        field(
            state,
            label_a,
            &form.value_a,
            Message::PercentValueAChanged,
            Message::PercentCompute,
        ),
        field(
            state,
            label_b,
            &form.value_b,
            Message::PercentValueBChanged,
            Message::PercentCompute,
        ),
        button(text("Compute").size(13))
            .on_press(Message::PercentCompute)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    if let Some(result) = &form.result {
        body = body.push(results_panel(
            state,
            vec![result_row(state, "Result", result.clone())],
        ));
    }

    container(body)
        .padding(16)
        .max_width(460)
        .style(move |_| card_container(theme))
        .into()
}

pub fn view_gst(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.gst;

    let rate_picker = pick_list(finance::GST_RATES, Some(form.rate), Message::GstRateSelected)
        .width(Length::Fixed(120.0))
        .padding(8)
        .text_size(13)
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme));

    let mut body = column![
        field(
            state,
            "Amount",
            &form.amount,
            Message::GstAmountChanged,
            Message::GstCompute,
        ),
        row![
            column![
                text("GST rate (%)").size(12).color(theme.fg_secondary),
                rate_picker,
            ]
            .spacing(4),
            container(row![]).width(Length::Fill),
            toggler(form.inclusive)
                .label("Amount includes GST")
                .text_size(12)
                .on_toggle(Message::GstInclusiveToggled)
                .style(move |_, status| themed_toggler(theme, status)),
        ]
        .align_y(Alignment::End),
        button(text("Compute").size(13))
            .on_press(Message::GstCompute)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    if let Some(breakdown) = form.result {
        body = body.push(results_panel(
            state,
            vec![
                result_row(state, "Net amount", finance::format_inr(breakdown.net)),
                result_row(state, "GST", finance::format_inr(breakdown.gst)),
                result_row(state, "Total", finance::format_inr(breakdown.total)),
            ],
        ));
    }

    container(body)
        .padding(16)
        .max_width(460)
        .style(move |_| card_container(theme))
        .into()
}

pub fn view_emi(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.emi;

    let principal_row = column![
        row![
            text("Principal").size(12).color(theme.fg_secondary),
            container(row![]).width(Length::Fill),
            text(finance::format_inr(form.principal))
                .size(12)
                .font(Font::MONOSPACE)
                .color(theme.fg_primary),
        ],
        slider(
            finance::PRINCIPAL_RANGE,
            form.principal,
            Message::EmiPrincipalChanged,
        )
        .step(10_000.0)
        .style(move |_, status| themed_slider(theme, status)),
    ]
    .spacing(4);

    let rate_row = column![
        row![
            text("Interest rate (% p.a.)").size(12).color(theme.fg_secondary),
            container(row![]).width(Length::Fill),
            text(format!("{:.1}%", form.annual_rate))
                .size(12)
                .font(Font::MONOSPACE)
                .color(theme.fg_primary),
        ],
        slider(finance::RATE_RANGE, form.annual_rate, Message::EmiRateChanged)
            .step(0.5)
            .style(move |_, status| themed_slider(theme, status)),
    ]
    .spacing(4);

    let tenure_row = column![
        row![
            text("Tenure").size(12).color(theme.fg_secondary),
            container(row![]).width(Length::Fill),
            text(format!(
                "{} months ({:.1} yrs)",
                form.tenure_months,
                f64::from(form.tenure_months) / 12.0
            ))
            .size(12)
            .font(Font::MONOSPACE)
            .color(theme.fg_primary),
        ],
        slider(
            finance::TENURE_RANGE,
            form.tenure_months,
            Message::EmiTenureChanged,
        )
        .step(6u32)
        .style(move |_, status| themed_slider(theme, status)),
    ]
    .spacing(4);

    let mut body = column![principal_row, rate_row, tenure_row].spacing(14);

    if let Some(breakdown) = form.result {
        let fraction = breakdown.principal_fraction();
        let principal_pct = f64::from(fraction) * 100.0;
        body = body.push(results_panel(
            state,
            vec![
                result_row(state, "Monthly EMI", finance::format_inr(breakdown.emi)),
                result_row(
                    state,
                    "Total payment",
                    finance::format_inr(breakdown.total_payment),
                ),
                result_row(
                    state,
                    "Total interest",
                    finance::format_inr(breakdown.total_interest),
                ),
                // Principal vs. interest split of the total payment.
                progress_bar(0.0..=1.0, fraction)
                    .girth(8)
                    .style(move |_| themed_progress_bar(theme))
                    .into(),
                result_row(
                    state,
                    "Principal share",
                    format!("{principal_pct:.1}%"),
                ),
            ],
        ));
    }

    container(body)
        .padding(16)
        .max_width(520)
        .style(move |_| card_container(theme))
        .into()
}

pub fn view_profit_loss(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.profit_loss;

    let mut body = column![
        field(
            state,
            "Cost price",
            &form.cost_price,
            Message::PlCostChanged,
            Message::PlCompute,
        ),
        field(
            state,
            "Selling price",
            &form.selling_price,
            Message::PlSellingChanged,
            Message::PlCompute,
        ),
        button(text("Compute").size(13))
            .on_press(Message::PlCompute)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    if let Some(result) = form.result {
        let verdict_color = if result.is_profit {
            theme.success
        } else {
            theme.danger
        };
        let verdict = if result.is_profit { "Profit" } else { "Loss" };

        body = body.push(results_panel(
            state,
            vec![
                row![
                    text(verdict).size(14).color(verdict_color),
                    container(row![]).width(Length::Fill),
                    text(format!(
                        "{} ({:.2}%)",
                        finance::format_inr(result.amount),
                        result.percent
                    ))
                    .size(14)
                    .font(Font::MONOSPACE)
                    .color(verdict_color),
                ]
                .align_y(Alignment::Center)
                .into(),
                text(result.advisory())
                    .size(12)
                    .color(theme.fg_secondary)
                    .into(),
            ],
        ));
    }

    container(body)
        .padding(16)
        .max_width(460)
        .style(move |_| card_container(theme))
        .into()
}

pub fn view_ecommerce(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.ecommerce;

    let mut body = column![
        field(
            state,
            "Selling price",
            &form.selling_price,
            Message::EcomSellingChanged,
            Message::EcomCompute,
        ),
        field(
            state,
            "Product cost",
            &form.product_cost,
            Message::EcomCostChanged,
            Message::EcomCompute,
        ),
        field(
            state,
            "Shipping cost",
            &form.shipping_cost,
            Message::EcomShippingChanged,
            Message::EcomCompute,
        ),
        row![
            field(
                state,
                "Marketplace fee (%)",
                &form.fee_percent,
                Message::EcomFeeChanged,
                Message::EcomCompute,
            ),
            field(
                state,
                "Tax (%)",
                &form.tax_percent,
                Message::EcomTaxChanged,
                Message::EcomCompute,
            ),
        ]
        .spacing(12),
        button(text("Compute").size(13))
            .on_press(Message::EcomCompute)
            .padding([10, 16])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    if let Some(result) = form.result {
        let profit_color = if result.profit >= 0.0 {
            theme.success
        } else {
            theme.danger
        };

        body = body.push(results_panel(
            state,
            vec![
                result_row(state, "Revenue", finance::format_inr(result.revenue)),
                result_row(
                    state,
                    "Marketplace fee",
                    finance::format_inr(result.marketplace_fee),
                ),
                result_row(state, "Tax", finance::format_inr(result.tax)),
                result_row(state, "Total cost", finance::format_inr(result.total_cost)),
                row![
                    text("Net profit").size(13).color(theme.fg_secondary),
                    container(row![]).width(Length::Fill),
                    text(format!(
                        "{} (margin {:.1}%, ROI {:.1}%)",
                        finance::format_inr(result.profit),
                        result.margin_percent,
                        result.roi_percent
                    ))
                    .size(13)
                    .font(Font::MONOSPACE)
                    .color(profit_color),
                ]
                .align_y(Alignment::Center)
                .into(),
                text(result.advisory())
                    .size(12)
                    .color(theme.fg_secondary)
                    .into(),
            ],
        ));
    }

    container(body)
        .padding(16)
        .max_width(520)
        .style(move |_| card_container(theme))
        .into()
}
