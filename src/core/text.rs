//! Text statistics for the word counter.

/// Reading speed assumed for the reading-time estimate, words per minute.
const READING_WPM: usize = 225;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Estimated reading time in whole minutes, rounded up.
    pub reading_minutes: usize,
}

impl TextStats {
    /// Mean word length in characters, 0 for empty input.
    pub fn avg_word_length(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let avg = self.characters_no_spaces as f64 / self.words as f64;
        avg
    }

    /// Mean sentence length in words, 0 for empty input.
    pub fn words_per_sentence(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let avg = self.words as f64 / self.sentences as f64;
        avg
    }
}

/// Computes all statistics in one pass over the text. Empty or
/// whitespace-only input yields zeros across the board.
pub fn analyze(text: &str) -> TextStats {
    if text.trim().is_empty() {
        return TextStats::default();
    }

    let words = text.split_whitespace().count();
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let lines = text.lines().count();

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let paragraphs = text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();

    TextStats {
        words,
        characters,
        characters_no_spaces,
        lines,
        sentences,
        paragraphs,
        reading_minutes: words.div_ceil(READING_WPM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_all_zeros() {
        assert_eq!(analyze(""), TextStats::default());
        assert_eq!(analyze("   \n\t  "), TextStats::default());
    }

    #[test]
    fn test_single_word() {
        let s = analyze("hello");
        assert_eq!(s.words, 1);
        assert_eq!(s.characters, 5);
        assert_eq!(s.characters_no_spaces, 5);
        assert_eq!(s.lines, 1);
        assert_eq!(s.sentences, 1);
        assert_eq!(s.paragraphs, 1);
        assert_eq!(s.reading_minutes, 1);
    }

    #[test]
    fn test_sentences_split_on_terminators() {
        let s = analyze("One. Two! Three? Four");
        assert_eq!(s.sentences, 4);
        assert_eq!(s.words, 7);
    }

    #[test]
    fn test_repeated_terminators_not_double_counted() {
        let s = analyze("Wait... what?! Really.");
        assert_eq!(s.sentences, 3);
    }

    #[test]
    fn test_paragraphs_blank_line_separated() {
        let s = analyze("First paragraph.\n\nSecond paragraph.\n\n\nThird.");
        assert_eq!(s.paragraphs, 3);
    }

    #[test]
    fn test_characters_counts_unicode_scalars() {
        let s = analyze("héllo wörld");
        assert_eq!(s.characters, 11);
        assert_eq!(s.characters_no_spaces, 10);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 226].join(" ");
        assert_eq!(analyze(&text).reading_minutes, 2);
        let text = vec!["word"; 225].join(" ");
        assert_eq!(analyze(&text).reading_minutes, 1);
    }

    #[test]
    fn test_averages() {
        let s = analyze("aa bb. cc dd.");
        assert!((s.avg_word_length() - 2.5).abs() < f64::EPSILON);
        assert!((s.words_per_sentence() - 2.0).abs() < f64::EPSILON);
        assert_eq!(TextStats::default().avg_word_length(), 0.0);
    }
}
