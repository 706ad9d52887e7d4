//! Keypad calculator and area calculator.

use crate::app::{BannerSeverity, Message, State};
use crate::core::error::ExprError;
use crate::core::expr;
use crate::core::geometry::{self, Shape};
use crate::validators::parse_positive;
use iced::Task;

fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

/// True when the number being typed at the end of the expression already
/// carries a decimal point.
fn current_number_has_decimal(expression: &str) -> bool {
    expression
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .any(|c| c == '.')
}

pub(crate) fn handle_calc_input(state: &mut State, ch: char) -> Task<Message> {
    let form = &mut state.calculator;

    // Starting a fresh expression after "=" replaces the shown result.
    if form.result.take().is_some() && (ch.is_ascii_digit() || ch == '(' || ch == '.') {
        form.expression.clear();
    }
    form.error = None;

    if is_operator(ch) {
        // A second operator in a row swaps the pending one.
        if form.expression.ends_with(is_operator) {
            form.expression.pop();
        }
    } else if ch == '.' && current_number_has_decimal(&form.expression) {
        return Task::none();
    }

    form.expression.push(ch);
    Task::none()
}

pub(crate) fn handle_calc_expression_changed(state: &mut State, expression: String) -> Task<Message> {
    state.calculator.expression = expression;
    state.calculator.result = None;
    state.calculator.error = None;
    Task::none()
}

pub(crate) fn handle_calc_evaluate(state: &mut State) -> Task<Message> {
    let form = &mut state.calculator;
    if form.expression.trim().is_empty() {
        return Task::none();
    }

    match expr::evaluate(&form.expression) {
        Ok(value) => {
            let formatted = expr::format_value(value);
            form.expression = formatted.clone();
            form.result = Some(formatted);
            form.error = None;
        }
        Err(ExprError::Empty) => {}
        Err(e) => {
            form.result = None;
            form.error = Some(e.to_string());
        }
    }
    Task::none()
}

pub(crate) fn handle_calc_clear(state: &mut State) -> Task<Message> {
    state.calculator.expression.clear();
    state.calculator.result = None;
    state.calculator.error = None;
    Task::none()
}

pub(crate) fn handle_calc_backspace(state: &mut State) -> Task<Message> {
    state.calculator.expression.pop();
    state.calculator.error = None;
    Task::none()
}

pub(crate) fn handle_area_shape_selected(state: &mut State, shape: Shape) -> Task<Message> {
    state.area.shape = shape;
    state.area.result = None;
    Task::none()
}

pub(crate) fn handle_area_dim_a_changed(state: &mut State, value: String) -> Task<Message> {
    state.area.dim_a = value;
    state.area.result = None;
    Task::none()
}

pub(crate) fn handle_area_dim_b_changed(state: &mut State, value: String) -> Task<Message> {
    state.area.dim_b = value;
    state.area.result = None;
    Task::none()
}

pub(crate) fn handle_area_compute(state: &mut State) -> Task<Message> {
    let form = &state.area;

    let result = match form.shape {
        Shape::Rectangle => parse_positive("width", &form.dim_a)
            .and_then(|w| parse_positive("length", &form.dim_b).map(|l| (w, l)))
            .and_then(|(w, l)| geometry::rectangle_area(w, l).map_err(|e| e.to_string())),
        Shape::Circle => parse_positive("radius", &form.dim_a)
            .and_then(|r| geometry::circle_area(r).map_err(|e| e.to_string())),
        Shape::Triangle => parse_positive("base", &form.dim_a)
            .and_then(|b| parse_positive("height", &form.dim_b).map(|h| (b, h)))
            .and_then(|(b, h)| geometry::triangle_area(b, h).map_err(|e| e.to_string())),
    };

    match result {
        Ok(area) => state.area.result = Some(area),
        Err(message) => {
            state.area.result = None;
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
    fn test_typed_expression_evaluates_with_precedence() {
        let mut state = create_test_state();
        for ch in "2+3*4".chars() {
            let _task = handle_calc_input(&mut state, ch);
        }
        let _task = handle_calc_evaluate(&mut state);
        assert_eq!(state.calculator.result.as_deref(), Some("14"));
        assert_eq!(state.calculator.expression, "14");
    }

    #[test]
    fn test_digit_after_result_starts_fresh_expression() {
        let mut state = create_test_state();
        let _task = handle_calc_expression_changed(&mut state, "1+1".to_string());
        let _task = handle_calc_evaluate(&mut state);
        let _task = handle_calc_input(&mut state, '5');
        assert_eq!(state.calculator.expression, "5");
    }

    #[test]
    fn test_operator_after_result_continues_expression() {
        let mut state = create_test_state();
        let _task = handle_calc_expression_changed(&mut state, "6/2".to_string());
        let _task = handle_calc_evaluate(&mut state);
        let _task = handle_calc_input(&mut state, '+');
        assert_eq!(state.calculator.expression, "3+");
    }

    #[test]
    fn test_new_operator_swaps_pending_one() {
        let mut state = create_test_state();
        for ch in ['2', '+', '*'] {
            let _task = handle_calc_input(&mut state, ch);
        }
        assert_eq!(state.calculator.expression, "2*");

        let _task = handle_calc_input(&mut state, '3');
        let _task = handle_calc_evaluate(&mut state);
        assert_eq!(state.calculator.result.as_deref(), Some("6"));
    }

    #[test]
    fn test_second_decimal_point_is_ignored() {
        let mut state = create_test_state();
        for ch in ['1', '.', '5', '.'] {
            let _task = handle_calc_input(&mut state, ch);
        }
        assert_eq!(state.calculator.expression, "1.5");

        // A fresh number after an operator gets its own decimal point.
        for ch in ['+', '2', '.', '5'] {
            let _task = handle_calc_input(&mut state, ch);
        }
        assert_eq!(state.calculator.expression, "1.5+2.5");
    }

    #[test]
    fn test_division_by_zero_sets_inline_error() {
        let mut state = create_test_state();
        let _task = handle_calc_expression_changed(&mut state, "1/0".to_string());
        let _task = handle_calc_evaluate(&mut state);
        assert!(state.calculator.result.is_none());
        assert_eq!(
            state.calculator.error.as_deref(),
            Some("Division by zero")
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = create_test_state();
        let _task = handle_calc_expression_changed(&mut state, "1/0".to_string());
        let _task = handle_calc_evaluate(&mut state);
        let _task = handle_calc_clear(&mut state);
        assert!(state.calculator.expression.is_empty());
        assert!(state.calculator.error.is_none());
    }

    #[test]
    fn test_area_circle_uses_single_dimension() {
        let mut state = create_test_state();
        let _task = handle_area_shape_selected(&mut state, Shape::Circle);
        let _task = handle_area_dim_a_changed(&mut state, "2".to_string());
        let _task = handle_area_compute(&mut state);
        let area = state.area.result.unwrap();
        assert!((area - std::f64::consts::PI * 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_area_rejects_non_positive_dimension() {
        let mut state = create_test_state();
        let _task = handle_area_dim_a_changed(&mut state, "0".to_string());
        let _task = handle_area_dim_b_changed(&mut state, "5".to_string());
        let _task = handle_area_compute(&mut state);
        assert!(state.area.result.is_none());
        assert!(!state.banners.is_empty());
    }
}
