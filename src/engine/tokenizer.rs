//! Keyword extraction for incoming questions.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;

/// Words never used as lookup keys.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "in", "on", "at", "to", "of", "for",
];

/// Tokens must be longer than this many characters to become keywords.
pub const MIN_KEYWORD_CHARS: usize = 2;

/// Deterministic keyword extractor.
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a new tokenizer with the default stop word list.
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Lowercased runs of word characters, in order, duplicates kept.
    pub fn extract_keywords(&self, question: &str) -> Vec<String> {
        question
            .to_lowercase()
            .split(|c: char| !is_word_char(c))
            .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
            .filter(|token| !self.stop_words.contains(token))
            .map(|s| s.to_string())
            .collect()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Letters, numbers and `_`. Combining marks split words even where Unicode
/// counts them as alphabetic (Devanagari vowel signs, viramas).
fn is_word_char(c: char) -> bool {
    c == '_' || (c.is_alphanumeric() && !is_combining_mark(c))
}
