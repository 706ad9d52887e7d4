//! Age calculator and date difference tools.

use crate::app::{BannerSeverity, Message, State};
use crate::core::dates;
use crate::validators::parse_date;
use iced::Task;

pub(crate) fn handle_age_birth_date_changed(state: &mut State, value: String) -> Task<Message> {
    state.age.birth_date = value;
    state.age.result = None;
    Task::none()
}

pub(crate) fn handle_age_compute(state: &mut State) -> Task<Message> {
    let outcome = parse_date("your birth date", &state.age.birth_date).and_then(|birth| {
        let today = chrono::Local::now().date_naive();
        dates::age_on(birth, today).map_err(|e| e.to_string())
    });

    match outcome {
        Ok(breakdown) => state.age.result = Some(breakdown),
        Err(message) => {
            state.age.result = None;
            state.push_banner(message, BannerSeverity::Error, 6);
        }
    }
    Task::none()
}

pub(crate) fn handle_diff_start_changed(state: &mut State, value: String) -> Task<Message> {
    state.date_diff.start_date = value;
    state.date_diff.result = None;
    Task::none()
}

pub(crate) fn handle_diff_end_changed(state: &mut State, value: String) -> Task<Message> {
    state.date_diff.end_date = value;
    state.date_diff.result = None;
    Task::none()
}

pub(crate) fn handle_diff_compute(state: &mut State) -> Task<Message> {
    let form = &state.date_diff;

    let outcome = parse_date("the start date", &form.start_date).and_then(|start| {
        let end = parse_date("the end date", &form.end_date)?;
        dates::date_difference(start, end).map_err(|e| e.to_string())
    });

    match outcome {
        Ok(span) => state.date_diff.result = Some(span),
        Err(message) => {
            state.date_diff.result = None;
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
    fn test_age_compute_with_valid_date() {
        let mut state = create_test_state();
        state.age.birth_date = "1990-06-15".to_string();
        let _task = handle_age_compute(&mut state);
        let result = state.age.result.unwrap();
        assert!(result.years >= 34);
        assert!(result.is_adult);
    }

    #[test]
    fn test_age_rejects_future_birth_date() {
        let mut state = create_test_state();
        state.age.birth_date = "2999-01-01".to_string();
        let _task = handle_age_compute(&mut state);
        assert!(state.age.result.is_none());
        assert!(!state.banners.is_empty());
    }

    #[test]
    fn test_age_rejects_malformed_date() {
        let mut state = create_test_state();
        state.age.birth_date = "15/06/1990".to_string();
        let _task = handle_age_compute(&mut state);
        assert!(state.age.result.is_none());
    }

    #[test]
    fn test_diff_compute_whole_span() {
        let mut state = create_test_state();
        state.date_diff.start_date = "2024-01-01".to_string();
        state.date_diff.end_date = "2024-01-08".to_string();
        let _task = handle_diff_compute(&mut state);
        let span = state.date_diff.result.unwrap();
        assert_eq!(span.days, 7);
        assert_eq!(span.weeks, 1);
        assert_eq!(span.hours, 168);
    }

    #[test]
    fn test_diff_rejects_reversed_range() {
        let mut state = create_test_state();
        state.date_diff.start_date = "2024-06-01".to_string();
        state.date_diff.end_date = "2024-01-01".to_string();
        let _task = handle_diff_compute(&mut state);
        assert!(state.date_diff.result.is_none());
        assert!(!state.banners.is_empty());
    }
}
