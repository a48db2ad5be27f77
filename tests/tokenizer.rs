//! Keyword extraction tests.

use course_qa::engine::STOP_WORDS;
use course_qa::Tokenizer;

// ==================== Filtering ====================

#[test]
fn test_keywords_basic_question() {
    let tokenizer = Tokenizer::new();
    let keywords = tokenizer.extract_keywords("What does triumph mean?");
    assert_eq!(keywords, vec!["what", "does", "triumph", "mean"]);
}

#[test]
fn test_keywords_stop_words_removed() {
    let tokenizer = Tokenizer::new();
    // "the", "and", "for", "but" are stop words; "cat"/"dog"/"now" are long enough.
    let keywords = tokenizer.extract_keywords("the cat and the dog, but for now");
    assert_eq!(keywords, vec!["cat", "dog", "now"]);
}

#[test]
fn test_keywords_short_tokens_removed() {
    let tokenizer = Tokenizer::new();
    // Every token is two characters or fewer.
    assert!(tokenizer.extract_keywords("Go up, I am ok").is_empty());
    // Three characters is the shortest keyword.
    assert_eq!(tokenizer.extract_keywords("go now"), vec!["now"]);
}

#[test]
fn test_keywords_every_stop_word_is_ignored() {
    let tokenizer = Tokenizer::new();
    let question = STOP_WORDS.join(" ");
    assert!(tokenizer.extract_keywords(&question).is_empty());
    for word in STOP_WORDS {
        assert!(tokenizer.is_stop_word(word), "{word} should be a stop word");
    }
}

#[test]
fn test_keywords_empty_and_punctuation_only() {
    let tokenizer = Tokenizer::new();
    assert!(tokenizer.extract_keywords("").is_empty());
    assert!(tokenizer.extract_keywords("???").is_empty());
    assert!(tokenizer.extract_keywords("  ... !!! --- ").is_empty());
}

// ==================== Segmentation ====================

#[test]
fn test_keywords_lowercased() {
    let tokenizer = Tokenizer::new();
    let keywords = tokenizer.extract_keywords("PRESIDENT Speech");
    assert_eq!(keywords, vec!["president", "speech"]);
}

#[test]
fn test_keywords_punctuation_splits_words() {
    let tokenizer = Tokenizer::new();
    // The apostrophe splits "president's" and the trailing "s" is too short.
    let keywords = tokenizer.extract_keywords("the president's speech, please!");
    assert_eq!(keywords, vec!["president", "speech", "please"]);
}

#[test]
fn test_keywords_underscore_and_digits_are_word_chars() {
    let tokenizer = Tokenizer::new();
    let keywords = tokenizer.extract_keywords("snake_case Unit 1 has 123 items");
    assert_eq!(keywords, vec!["snake_case", "unit", "has", "123", "items"]);
}

#[test]
fn test_keywords_length_counts_characters_not_bytes() {
    let tokenizer = Tokenizer::new();
    // "胜利" is two characters (six bytes) and must be dropped.
    let keywords = tokenizer.extract_keywords("胜利 是什么 Über");
    assert_eq!(keywords, vec!["是什么", "über"]);
}

#[test]
fn test_keywords_combining_marks_split_words() {
    let tokenizer = Tokenizer::new();
    // Vowel signs and the virama are combining marks, not word characters,
    // so only "नमस" survives as a run longer than two characters.
    assert_eq!(tokenizer.extract_keywords("नमस्ते दुनिया"), vec!["नमस"]);
    // Precomposed Latin letters stay whole.
    assert_eq!(tokenizer.extract_keywords("café naïve"), vec!["café", "naïve"]);
}

// ==================== Order ====================

#[test]
fn test_keywords_duplicates_preserved_in_order() {
    let tokenizer = Tokenizer::new();
    let keywords = tokenizer.extract_keywords("Alarm clock? alarm, ALARM clock");
    assert_eq!(keywords, vec!["alarm", "clock", "alarm", "alarm", "clock"]);
}

#[test]
fn test_keywords_deterministic() {
    let tokenizer = Tokenizer::default();
    let question = "Why does the president mention an alarm clock?";
    assert_eq!(
        tokenizer.extract_keywords(question),
        tokenizer.extract_keywords(question)
    );
    assert_eq!(
        tokenizer.extract_keywords(question),
        vec!["why", "does", "president", "mention", "alarm", "clock"]
    );
}
