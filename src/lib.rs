//! Keyword-indexed question answering over an English course unit.
//!
//! A question is tokenized into keywords, each keyword is looked up in a
//! precomputed inverted index, and a single answer is chosen by fixed content
//! priority: curated Q&A, then vocabulary, then course paragraphs.

pub mod config;
pub mod engine;
pub mod index;
pub mod store;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use engine::{Answer, AnswerSource, Answerer, Matches, Tokenizer};
pub use index::{IndexStats, SearchIndex};
pub use store::{ContentStore, KnowledgeBase};
pub use types::{ContentItem, ContentKind, QaError, QaResult};
