//! Email variation, password, and QR code generators.

use crate::app::{save_config_task, BannerSeverity, Message, State};
use crate::core::generate::{self, EmailInputs};
use crate::core::qr::{self, QrContent, QrRequest};
use chrono::Datelike;
use iced::Task;
use std::path::PathBuf;

pub(crate) fn handle_email_first_changed(state: &mut State, value: String) -> Task<Message> {
    state.email.first_name = value;
    Task::none()
}

pub(crate) fn handle_email_last_changed(state: &mut State, value: String) -> Task<Message> {
    state.email.last_name = value;
    Task::none()
}

pub(crate) fn handle_email_extra_changed(state: &mut State, value: String) -> Task<Message> {
    state.email.extra = value;
    Task::none()
}

/// The chosen domain is a sticky preference.
pub(crate) fn handle_email_domain_selected(state: &mut State, domain: String) -> Task<Message> {
    state.config.email_domain.clone_from(&domain);
    state.email.domain = domain;
    save_config_task(state)
}

pub(crate) fn handle_email_numbers_toggled(state: &mut State, on: bool) -> Task<Message> {
    state.email.include_numbers = on;
    Task::none()
}

pub(crate) fn handle_email_generate(state: &mut State) -> Task<Message> {
    let form = &state.email;
    let inputs = EmailInputs {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        extra: form.extra.clone(),
        domain: form.domain.clone(),
        include_numbers: form.include_numbers,
    };
    let current_year = chrono::Local::now().year();

    match generate::email_variations(&inputs, current_year) {
        Ok(results) => state.email.results = results,
        Err(e) => {
            state.email.results.clear();
            state.push_banner(e.to_string(), BannerSeverity::Error, 6);
        }
    }
    Task::none()
}

/// Character classes toggled from the password tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordClass {
    Upper,
    Lower,
    Digits,
    Symbols,
}

pub(crate) fn handle_password_length_changed(state: &mut State, length: u8) -> Task<Message> {
    state.password.options.length = length;
    state.config.password_length = length;
    save_config_task(state)
}

/// Toggles one character class and persists the preference.
pub(crate) fn handle_password_class_toggled(
    state: &mut State,
    class: PasswordClass,
    on: bool,
) -> Task<Message> {
    let options = &mut state.password.options;
    match class {
        PasswordClass::Upper => {
            options.uppercase = on;
            state.config.password_uppercase = on;
        }
        PasswordClass::Lower => {
            options.lowercase = on;
            state.config.password_lowercase = on;
        }
        PasswordClass::Digits => {
            options.digits = on;
            state.config.password_digits = on;
        }
        PasswordClass::Symbols => {
            options.symbols = on;
            state.config.password_symbols = on;
        }
    }
    save_config_task(state)
}

pub(crate) fn handle_password_generate(state: &mut State) -> Task<Message> {
    match generate::password(&state.password.options) {
        Ok(pwd) => state.password.output = Some(pwd),
        Err(e) => {
            state.password.output = None;
            state.push_banner(e.to_string(), BannerSeverity::Error, 6);
        }
    }
    Task::none()
}

pub(crate) fn handle_qr_content_selected(state: &mut State, content: QrContent) -> Task<Message> {
    state.qr.content = content;
    Task::none()
}

pub(crate) fn handle_qr_data_changed(state: &mut State, value: String) -> Task<Message> {
    state.qr.data = value;
    Task::none()
}

pub(crate) fn handle_qr_size_changed(state: &mut State, size: u32) -> Task<Message> {
    // Snap to the API's supported step.
    state.qr.size = (size / qr::SIZE_STEP) * qr::SIZE_STEP;
    Task::none()
}

pub(crate) fn handle_qr_color_changed(state: &mut State, value: String) -> Task<Message> {
    state.qr.color = value;
    Task::none()
}

pub(crate) fn handle_qr_bg_color_changed(state: &mut State, value: String) -> Task<Message> {
    state.qr.bg_color = value;
    Task::none()
}

pub(crate) fn handle_qr_generate(state: &mut State) -> Task<Message> {
    let form = &state.qr;

    let request = QrRequest::new(
        form.content,
        &form.data,
        form.size,
        &form.color,
        &form.bg_color,
    )
    .and_then(|req| req.image_url());

    match request {
        Ok(url) => {
            state.qr.fetching = true;
            Task::perform(
                async move { qr::fetch_png(url).await.map_err(|e| e.to_string()) },
                Message::QrFetched,
            )
        }
        Err(e) => {
            state.push_banner(e.to_string(), BannerSeverity::Error, 6);
            Task::none()
        }
    }
}

pub(crate) fn handle_qr_fetched(
    state: &mut State,
    result: Result<Vec<u8>, String>,
) -> Task<Message> {
    state.qr.fetching = false;
    match result {
        Ok(bytes) => {
            state.qr.handle = Some(iced::widget::image::Handle::from_bytes(bytes.clone()));
            state.qr.png = Some(bytes);
        }
        Err(e) => {
            tracing::error!("QR fetch failed: {e}");
            state.push_banner(format!("Could not generate QR code: {e}"), BannerSeverity::Error, 8);
        }
    }
    Task::none()
}

pub(crate) fn handle_qr_save_pressed(state: &mut State) -> Task<Message> {
    if state.qr.png.is_none() {
        return Task::none();
    }

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_file_name("qr-code.png")
                .add_filter("PNG image", &["png"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::QrSaveLocationPicked,
    )
}

pub(crate) fn handle_qr_save_location_picked(
    state: &mut State,
    path: Option<PathBuf>,
) -> Task<Message> {
    let (Some(path), Some(bytes)) = (path, state.qr.png.clone()) else {
        return Task::none();
    };

    Task::perform(
        async move {
            tokio::fs::write(&path, bytes)
                .await
                .err()
                .map(|e| e.to_string())
        },
        Message::QrSaved,
    )
}

pub(crate) fn handle_qr_saved(state: &mut State, error: Option<String>) -> Task<Message> {
    match error {
        None => state.push_banner("QR code saved", BannerSeverity::Success, 5),
        Some(e) => state.push_banner(format!("Save failed: {e}"), BannerSeverity::Error, 8),
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;
    use crate::core::generate::EMAIL_DOMAINS;

    #[test]
    fn test_email_generate_produces_suggestions() {
        let mut state = create_test_state();
        state.email.first_name = "Ada".to_string();
        state.email.last_name = "Lovelace".to_string();
        state.email.domain = EMAIL_DOMAINS[0].to_string();
        let _task = handle_email_generate(&mut state);
        assert!(!state.email.results.is_empty());
        assert!(state
            .email
            .results
            .iter()
            .all(|e| e.ends_with("@gmail.com")));
    }

    #[test]
    fn test_email_generate_without_names_banners() {
        let mut state = create_test_state();
        state.email.first_name.clear();
        state.email.last_name.clear();
        let _task = handle_email_generate(&mut state);
        assert!(state.email.results.is_empty());
        assert!(!state.banners.is_empty());
    }

    #[test]
    fn test_password_generate_respects_length() {
        let mut state = create_test_state();
        let _task = handle_password_length_changed(&mut state, 20);
        let _task = handle_password_generate(&mut state);
        assert_eq!(state.password.output.as_ref().unwrap().len(), 20);
    }

    #[test]
    fn test_password_all_classes_off_banners() {
        let mut state = create_test_state();
        for class in [
            PasswordClass::Upper,
            PasswordClass::Lower,
            PasswordClass::Digits,
            PasswordClass::Symbols,
        ] {
            let _task = handle_password_class_toggled(&mut state, class, false);
        }
        let _task = handle_password_generate(&mut state);
        assert!(state.password.output.is_none());
        assert!(!state.banners.is_empty());
    }

    #[test]
    fn test_password_toggle_updates_config() {
        let mut state = create_test_state();
        let _task = handle_password_class_toggled(&mut state, PasswordClass::Symbols, true);
        assert!(state.password.options.symbols);
        assert!(state.config.password_symbols);
    }

    #[test]
    fn test_qr_size_snaps_to_step() {
        let mut state = create_test_state();
        let _task = handle_qr_size_changed(&mut state, 275);
        assert_eq!(state.qr.size, 250);
    }

    #[test]
    fn test_qr_generate_with_bad_color_banners() {
        let mut state = create_test_state();
        state.qr.data = "hello".to_string();
        state.qr.color = "red".to_string();
        let _task = handle_qr_generate(&mut state);
        assert!(!state.qr.fetching);
        assert!(!state.banners.is_empty());
    }
}
