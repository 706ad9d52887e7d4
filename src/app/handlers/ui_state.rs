//! Navigation, theming, banners, and clipboard.

use crate::app::{save_config_task, BannerSeverity, Message, Screen, State};
use crate::core::catalog;
use crate::theme::ThemeChoice;
use iced::Task;

/// Handles opening a tool from the sidebar or home grid. The opened tool
/// is remembered so the next launch lands on it.
pub(crate) fn handle_tool_selected(state: &mut State, id: &'static str) -> Task<Message> {
    let Some(tool) = catalog::find_tool(id) else {
        tracing::warn!("unknown tool id: {id}");
        return Task::none();
    };

    state.screen = Screen::Tool(tool);
    state.config.last_tool = Some(tool.id.to_string());
    save_config_task(state)
}

pub(crate) fn handle_go_home(state: &mut State) -> Task<Message> {
    state.screen = Screen::Home;
    state.config.last_tool = None;
    save_config_task(state)
}

pub(crate) fn handle_open_settings(state: &mut State) -> Task<Message> {
    state.screen = Screen::Settings;
    Task::none()
}

pub(crate) fn handle_tool_search_changed(state: &mut State, query: String) -> Task<Message> {
    state.tool_search = query;
    Task::none()
}

pub(crate) fn handle_theme_selected(state: &mut State, choice: ThemeChoice) -> Task<Message> {
    state.theme_choice = choice;
    state.theme = choice.to_theme();
    state.config.theme_choice = choice;
    save_config_task(state)
}

pub(crate) fn handle_dismiss_banner(state: &mut State, index: usize) -> Task<Message> {
    if index < state.banners.len() {
        state.banners.remove(index);
    }
    Task::none()
}

pub(crate) fn handle_prune_banners(state: &mut State) -> Task<Message> {
    state.prune_expired_banners();
    Task::none()
}

pub(crate) fn handle_config_saved(state: &mut State, error: Option<String>) -> Task<Message> {
    if let Some(error) = error {
        tracing::error!("config save failed: {error}");
        state.push_banner(
            format!("Failed to save settings: {error}"),
            BannerSeverity::Error,
            8,
        );
    }
    Task::none()
}

pub(crate) fn handle_copy_text(state: &mut State, text: String) -> Task<Message> {
    state.push_banner("Copied to clipboard", BannerSeverity::Success, 3);
    iced::clipboard::write(text)
}

/// Routes raw window events through the key map.
pub(crate) fn handle_event(state: &mut State, event: &iced::Event) -> Task<Message> {
    if let Some(message) = crate::app::map_key_event(state, event) {
        state.update(message)
    } else {
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;

    #[test]
    fn test_tool_selected_opens_and_remembers() {
        let mut state = create_test_state();
        let _task = handle_tool_selected(&mut state, "emi-calculator");
        assert_eq!(state.active_tool().map(|t| t.id), Some("emi-calculator"));
        assert_eq!(state.config.last_tool.as_deref(), Some("emi-calculator"));
    }

    #[test]
    fn test_unknown_tool_id_is_ignored() {
        let mut state = create_test_state();
        state.screen = Screen::Home;
        let _task = handle_tool_selected(&mut state, "no-such-tool");
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_go_home_clears_last_tool() {
        let mut state = create_test_state();
        let _task = handle_tool_selected(&mut state, "calculator");
        let _task = handle_go_home(&mut state);
        assert_eq!(state.screen, Screen::Home);
        assert!(state.config.last_tool.is_none());
    }

    #[test]
    fn test_theme_selected_switches_palette() {
        let mut state = create_test_state();
        let _task = handle_theme_selected(&mut state, ThemeChoice::Nord);
        assert_eq!(state.theme_choice, ThemeChoice::Nord);
        assert_eq!(state.theme.name, "Nord");
        assert_eq!(state.config.theme_choice, ThemeChoice::Nord);
    }

    #[test]
    fn test_dismiss_banner_out_of_range_is_noop() {
        let mut state = create_test_state();
        state.push_banner("hello", BannerSeverity::Info, 5);
        let _task = handle_dismiss_banner(&mut state, 3);
        assert_eq!(state.banners.len(), 1);
        let _task = handle_dismiss_banner(&mut state, 0);
        assert!(state.banners.is_empty());
    }

    #[test]
    fn test_prune_drops_only_expired_banners() {
        let mut state = create_test_state();
        state.push_banner("gone", BannerSeverity::Info, 0);
        state.push_banner("stays", BannerSeverity::Info, 60);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let _task = handle_prune_banners(&mut state);
        assert_eq!(state.banners.len(), 1);
        assert_eq!(state.banners[0].message, "stays");
    }

    #[test]
    fn test_config_save_error_surfaces_banner() {
        let mut state = create_test_state();
        let _task = handle_config_saved(&mut state, Some("disk full".to_string()));
        assert_eq!(state.banners.len(), 1);
        assert_eq!(state.banners[0].severity, BannerSeverity::Error);
    }
}
