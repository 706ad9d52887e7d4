//! Percentage, GST, EMI, profit/loss, and e-commerce profit tools.

use crate::app::{BannerSeverity, Message, State};
use crate::core::finance::{self, PercentMode};
use crate::core::expr::format_value;
use crate::validators::{parse_non_negative, parse_number, parse_positive};
use iced::Task;

pub(crate) fn handle_percent_mode_selected(state: &mut State, mode: PercentMode) -> Task<Message> {
    state.percent.mode = mode;
    state.percent.result = None;
    Task::none()
}

pub(crate) fn handle_percent_value_a_changed(state: &mut State, value: String) -> Task<Message> {
    state.percent.value_a = value;
    state.percent.result = None;
    Task::none()
}

pub(crate) fn handle_percent_value_b_changed(state: &mut State, value: String) -> Task<Message> {
    state.percent.value_b = value;
    state.percent.result = None;
    Task::none()
}

pub(crate) fn handle_percent_compute(state: &mut State) -> Task<Message> {
    let form = &state.percent;

    let outcome = parse_number("the first value", &form.value_a).and_then(|a| {
        let b = parse_number("the second value", &form.value_b)?;
        match form.mode {
            PercentMode::PercentOf => Ok(format_value(finance::percent_of(a, b))),
            PercentMode::WhatPercent => finance::what_percent(a, b)
                .map(|p| format!("{}%", format_value(p)))
                .map_err(|e| e.to_string()),
            PercentMode::ReversePercent => finance::reverse_percent(a, b)
                .map(format_value)
                .map_err(|e| e.to_string()),
        }
    });

    match outcome {
        Ok(result) => state.percent.result = Some(result),
        Err(message) => {
            state.percent.result = None;
            state.push_banner(message, BannerSeverity::Error, 6);
        }
    }
    Task::none()
}

pub(crate) fn handle_gst_amount_changed(state: &mut State, value: String) -> Task<Message> {
    state.gst.amount = value;
    state.gst.result = None;
    Task::none()
}

pub(crate) fn handle_gst_rate_selected(state: &mut State, rate: f64) -> Task<Message> {
    state.gst.rate = rate;
    state.gst.result = None;
    Task::none()
}

pub(crate) fn handle_gst_inclusive_toggled(state: &mut State, inclusive: bool) -> Task<Message> {
    state.gst.inclusive = inclusive;
    state.gst.result = None;
    Task::none()
}

pub(crate) fn handle_gst_compute(state: &mut State) -> Task<Message> {
    let form = &state.gst;

    let outcome = parse_positive("the amount", &form.amount).and_then(|amount| {
        let result = if form.inclusive {
            finance::gst_remove(amount, form.rate)
        } else {
            finance::gst_add(amount, form.rate)
        };
        result.map_err(|e| e.to_string())
    });

    match outcome {
        Ok(breakdown) => state.gst.result = Some(breakdown),
        Err(message) => {
            state.gst.result = None;
            state.push_banner(message, BannerSeverity::Error, 6);
        }
    }
    Task::none()
}

/// EMI sliders recompute on every change. The slider ranges match the
/// domain constraints, so failures only happen on degenerate input and
/// simply clear the result.
fn recompute_emi(state: &mut State) {
    let form = &mut state.emi;
    form.result = finance::emi(form.principal, form.annual_rate, form.tenure_months).ok();
}

pub(crate) fn handle_emi_principal_changed(state: &mut State, principal: f64) -> Task<Message> {
    state.emi.principal = principal;
    recompute_emi(state);
    Task::none()
}

pub(crate) fn handle_emi_rate_changed(state: &mut State, rate: f64) -> Task<Message> {
    state.emi.annual_rate = rate;
    recompute_emi(state);
    Task::none()
}

pub(crate) fn handle_emi_tenure_changed(state: &mut State, tenure_months: u32) -> Task<Message> {
    state.emi.tenure_months = tenure_months;
    recompute_emi(state);
    Task::none()
}

pub(crate) fn handle_pl_cost_changed(state: &mut State, value: String) -> Task<Message> {
    state.profit_loss.cost_price = value;
    state.profit_loss.result = None;
    Task::none()
}

pub(crate) fn handle_pl_selling_changed(state: &mut State, value: String) -> Task<Message> {
    state.profit_loss.selling_price = value;
    state.profit_loss.result = None;
    Task::none()
}

pub(crate) fn handle_pl_compute(state: &mut State) -> Task<Message> {
    let form = &state.profit_loss;

    let outcome = parse_positive("the cost price", &form.cost_price).and_then(|cp| {
        let sp = parse_non_negative("the selling price", &form.selling_price)?;
        finance::profit_loss(cp, sp).map_err(|e| e.to_string())
    });

    match outcome {
        Ok(result) => state.profit_loss.result = Some(result),
        Err(message) => {
            state.profit_loss.result = None;
            state.push_banner(message, BannerSeverity::Error, 6);
        }
    }
    Task::none()
}

pub(crate) fn handle_ecom_selling_changed(state: &mut State, value: String) -> Task<Message> {
    state.ecommerce.selling_price = value;
    state.ecommerce.result = None;
    Task::none()
}

pub(crate) fn handle_ecom_cost_changed(state: &mut State, value: String) -> Task<Message> {
    state.ecommerce.product_cost = value;
    state.ecommerce.result = None;
    Task::none()
}

pub(crate) fn handle_ecom_shipping_changed(state: &mut State, value: String) -> Task<Message> {
    state.ecommerce.shipping_cost = value;
    state.ecommerce.result = None;
    Task::none()
}

pub(crate) fn handle_ecom_fee_changed(state: &mut State, value: String) -> Task<Message> {
    state.ecommerce.fee_percent = value;
    state.ecommerce.result = None;
    Task::none()
}

pub(crate) fn handle_ecom_tax_changed(state: &mut State, value: String) -> Task<Message> {
    state.ecommerce.tax_percent = value;
    state.ecommerce.result = None;
    Task::none()
}

pub(crate) fn handle_ecom_compute(state: &mut State) -> Task<Message> {
    let form = &state.ecommerce;

    let outcome = parse_positive("the selling price", &form.selling_price).and_then(|sp| {
        let cost = parse_non_negative("the product cost", &form.product_cost)?;
        let shipping = parse_non_negative("the shipping cost", &form.shipping_cost)?;
        let fee = parse_non_negative("the marketplace fee", &form.fee_percent)?;
        let tax = parse_non_negative("the tax rate", &form.tax_percent)?;
        finance::ecommerce_profit(sp, cost, shipping, fee, tax).map_err(|e| e.to_string())
    });

    match outcome {
        Ok(result) => state.ecommerce.result = Some(result),
        Err(message) => {
            state.ecommerce.result = None;
            state.push_banner(message, BannerSeverity::Error, 6);
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;

    #[test]
    fn test_percent_of_mode() {
        let mut state = create_test_state();
        state.percent.value_a = "15".to_string();
        state.percent.value_b = "200".to_string();
        let _task = handle_percent_compute(&mut state);
        assert_eq!(state.percent.result.as_deref(), Some("30"));
    }

    #[test]
    fn test_what_percent_mode() {
        let mut state = create_test_state();
        let _task = handle_percent_mode_selected(&mut state, PercentMode::WhatPercent);
        state.percent.value_a = "50".to_string();
        state.percent.value_b = "200".to_string();
        let _task = handle_percent_compute(&mut state);
        assert_eq!(state.percent.result.as_deref(), Some("25%"));
    }

    #[test]
    fn test_percent_empty_input_banners() {
        let mut state = create_test_state();
        let _task = handle_percent_compute(&mut state);
        assert!(state.percent.result.is_none());
        assert_eq!(state.banners.len(), 1);
    }

    #[test]
    fn test_gst_exclusive_adds_tax() {
        let mut state = create_test_state();
        state.gst.amount = "1000".to_string();
        let _task = handle_gst_compute(&mut state);
        let breakdown = state.gst.result.unwrap();
        assert!((breakdown.gst - 180.0).abs() < 1e-9);
        assert!((breakdown.total - 1180.0).abs() < 1e-9);
    }

    #[test]
    fn test_gst_inclusive_extracts_tax() {
        let mut state = create_test_state();
        state.gst.amount = "1180".to_string();
        let _task = handle_gst_inclusive_toggled(&mut state, true);
        let _task = handle_gst_compute(&mut state);
        let breakdown = state.gst.result.unwrap();
        assert!((breakdown.net - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_emi_updates_on_slider_change() {
        let mut state = create_test_state();
        let _task = handle_emi_principal_changed(&mut state, 1_000_000.0);
        let result = state.emi.result.unwrap();
        assert!((result.emi - 21_247.0).abs() < 1.0);
        assert!(result.total_payment > result.principal);
    }

    #[test]
    fn test_profit_loss_detects_loss() {
        let mut state = create_test_state();
        state.profit_loss.cost_price = "100".to_string();
        state.profit_loss.selling_price = "80".to_string();
        let _task = handle_pl_compute(&mut state);
        let result = state.profit_loss.result.unwrap();
        assert!(!result.is_profit);
        assert!((result.amount - 20.0).abs() < 1e-9);
        assert!((result.percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_ecommerce_compute_rejects_negative_fee() {
        let mut state = create_test_state();
        state.ecommerce.selling_price = "500".to_string();
        state.ecommerce.product_cost = "200".to_string();
        state.ecommerce.shipping_cost = "50".to_string();
        state.ecommerce.fee_percent = "-2".to_string();
        state.ecommerce.tax_percent = "18".to_string();
        let _task = handle_ecom_compute(&mut state);
        assert!(state.ecommerce.result.is_none());
        assert!(!state.banners.is_empty());
    }

    #[test]
    fn test_ecommerce_compute_happy_path() {
        let mut state = create_test_state();
        state.ecommerce.selling_price = "1000".to_string();
        state.ecommerce.product_cost = "400".to_string();
        state.ecommerce.shipping_cost = "50".to_string();
        state.ecommerce.fee_percent = "10".to_string();
        state.ecommerce.tax_percent = "18".to_string();
        let _task = handle_ecom_compute(&mut state);
        let result = state.ecommerce.result.unwrap();
        assert!((result.marketplace_fee - 100.0).abs() < 1e-9);
        assert!((result.tax - 180.0).abs() < 1e-9);
        assert!((result.profit - 270.0).abs() < 1e-9);
    }
}
