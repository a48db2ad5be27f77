//! Keyword lookup and fixed-priority answer selection.

use log::debug;
use serde::Serialize;

use crate::engine::tokenizer::Tokenizer;
use crate::index::SearchIndex;
use crate::types::{ContentItem, ContentKind};

/// Returned when a question yields no keywords.
pub const NOT_UNDERSTOOD: &str = "抱歉，我没理解您的问题。请换一种方式提问。";

/// Returned when no recognized item matched any keyword.
pub const NO_MATCH: &str = "抱歉，我没有找到相关内容。您可以尝试询问与Unit 1课文相关的问题，例如：\n\
- What is the main idea of the president's speech?\n\
- What does 'triumph' mean?\n\
- Why does the president mention an alarm clock?";

/// Paragraph answers include at most this many passages.
pub const MAX_PARAGRAPHS: usize = 2;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Qa,
    Vocabulary,
    Paragraph,
    /// The question produced no keywords.
    NotUnderstood,
    /// Keywords were found but nothing recognized matched.
    NoMatch,
}

impl From<ContentKind> for AnswerSource {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Qa => AnswerSource::Qa,
            ContentKind::Vocabulary => AnswerSource::Vocabulary,
            ContentKind::Paragraph => AnswerSource::Paragraph,
        }
    }
}

/// A selected answer together with the keywords that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub keywords: Vec<String>,
    pub source: AnswerSource,
    pub text: String,
}

/// Matched items grouped by kind, each group in insertion order.
#[derive(Debug, Default)]
pub struct Matches<'a> {
    qa: Vec<&'a str>,
    /// (word, definition)
    vocabulary: Vec<(&'a str, &'a str)>,
    paragraph: Vec<&'a str>,
    unrecognized: usize,
}

impl<'a> Matches<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to its kind's group. Unrecognized items are only counted.
    pub fn push(&mut self, item: &'a ContentItem) {
        match item {
            ContentItem::Qa { answer } => self.qa.push(answer.as_str()),
            ContentItem::Vocabulary { word, definition } => {
                self.vocabulary.push((word.as_str(), definition.as_str()))
            }
            ContentItem::Paragraph { content } => self.paragraph.push(content.as_str()),
            ContentItem::Unrecognized => self.unrecognized += 1,
        }
    }

    pub fn qa(&self) -> &[&'a str] {
        &self.qa
    }

    pub fn vocabulary(&self) -> &[(&'a str, &'a str)] {
        &self.vocabulary
    }

    pub fn paragraph(&self) -> &[&'a str] {
        &self.paragraph
    }

    pub fn len(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Qa => self.qa.len(),
            ContentKind::Vocabulary => self.vocabulary.len(),
            ContentKind::Paragraph => self.paragraph.len(),
        }
    }

    /// True when no recognized item matched.
    pub fn is_empty(&self) -> bool {
        ContentKind::PRIORITY.iter().all(|&kind| self.len(kind) == 0)
    }

    /// Number of matched items with an unrecognized type.
    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    /// Render the highest-priority non-empty group, if any.
    fn select(&self) -> Option<(ContentKind, String)> {
        if let Some(answer) = self.qa.first() {
            return Some((ContentKind::Qa, answer.to_string()));
        }
        if let Some((word, definition)) = self.vocabulary.first() {
            return Some((
                ContentKind::Vocabulary,
                format!("{word} 的意思是：{definition}"),
            ));
        }
        if !self.paragraph.is_empty() {
            let shown = self.paragraph.len().min(MAX_PARAGRAPHS);
            return Some((
                ContentKind::Paragraph,
                self.paragraph[..shown].join(PARAGRAPH_SEPARATOR),
            ));
        }
        None
    }
}

/// Answers questions against a borrowed, immutable index.
pub struct Answerer<'a> {
    index: &'a SearchIndex,
    tokenizer: Tokenizer,
}

impl<'a> Answerer<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self {
            index,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Group every indexed item for `keywords` by kind.
    ///
    /// Keywords are visited in order, repeats included; items keep the order
    /// of their posting list.
    pub fn search_knowledge<S: AsRef<str>>(&self, keywords: &[S]) -> Matches<'a> {
        let mut matches = Matches::new();
        for keyword in keywords {
            for item in self.index.get(keyword.as_ref()) {
                matches.push(item);
            }
        }
        matches
    }

    /// Answer a question, reporting which policy branch produced the text.
    pub fn answer(&self, question: &str) -> Answer {
        let keywords = self.tokenizer.extract_keywords(question);
        debug!("keywords for {question:?}: {keywords:?}");

        if keywords.is_empty() {
            return Answer {
                keywords,
                source: AnswerSource::NotUnderstood,
                text: NOT_UNDERSTOOD.to_string(),
            };
        }

        let matches = self.search_knowledge(&keywords);
        debug!(
            "matches: qa={} vocabulary={} paragraph={} unrecognized={}",
            matches.len(ContentKind::Qa),
            matches.len(ContentKind::Vocabulary),
            matches.len(ContentKind::Paragraph),
            matches.unrecognized()
        );

        let (source, text) = match matches.select() {
            Some((kind, text)) => (kind.into(), text),
            None => (AnswerSource::NoMatch, NO_MATCH.to_string()),
        };

        Answer {
            keywords,
            source,
            text,
        }
    }

    /// Answer a question with plain text.
    pub fn generate_answer(&self, question: &str) -> String {
        self.answer(question).text
    }
}
