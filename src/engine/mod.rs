//! Query engine: keyword extraction and answer selection.

pub mod answer;
pub mod tokenizer;

pub use answer::{
    Answer, AnswerSource, Answerer, Matches, MAX_PARAGRAPHS, NOT_UNDERSTOOD, NO_MATCH,
};
pub use tokenizer::{Tokenizer, STOP_WORDS};
