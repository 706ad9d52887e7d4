//! Word counter.

use crate::app::{Message, State};
use crate::core::text;
use iced::widget::text_editor;
use iced::Task;

pub(crate) fn handle_word_editor_action(
    state: &mut State,
    action: text_editor::Action,
) -> Task<Message> {
    let form = &mut state.word_count;
    form.content.perform(action);
    form.stats = text::analyze(&form.content.text());
    Task::none()
}

pub(crate) fn handle_word_clear(state: &mut State) -> Task<Message> {
    state.word_count.content = text_editor::Content::new();
    state.word_count.stats = text::TextStats::default();
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;

    #[test]
    fn test_editing_recomputes_stats() {
        let mut state = create_test_state();
        let _task = handle_word_editor_action(
            &mut state,
            text_editor::Action::Edit(text_editor::Edit::Paste(
                std::sync::Arc::new("Hello world. Second sentence!".to_string()),
            )),
        );
        assert_eq!(state.word_count.stats.words, 4);
        assert_eq!(state.word_count.stats.sentences, 2);
    }

    #[test]
    fn test_clear_resets_stats() {
        let mut state = create_test_state();
        let _task = handle_word_editor_action(
            &mut state,
            text_editor::Action::Edit(text_editor::Edit::Paste(std::sync::Arc::new(
                "some text".to_string(),
            ))),
        );
        let _task = handle_word_clear(&mut state);
        assert_eq!(state.word_count.stats.words, 0);
        assert!(state.word_count.content.text().trim().is_empty());
    }
}
