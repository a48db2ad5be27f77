//! Inverted index mapping keywords to ordered content item lists.

use std::collections::HashMap;

use log::warn;
use serde::Serialize;
use serde_json::Value;

use crate::types::{ContentItem, ContentKind, QaError, QaResult};

/// Keyword → content items, in the order the index document lists them.
///
/// Immutable once built; lookups never allocate.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    postings: HashMap<String, Vec<ContentItem>>,
    /// Items dropped at load time because they lacked a usable `type` or a
    /// field their kind requires.
    skipped: usize,
}

/// Counts reported by `course-qa stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub keywords: usize,
    pub qa: usize,
    pub vocabulary: usize,
    pub paragraph: usize,
    pub unrecognized: usize,
    pub skipped: usize,
}

impl SearchIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from already-typed entries. Repeated keywords append in
    /// iteration order.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<ContentItem>)>,
        K: Into<String>,
    {
        let mut index = Self::new();
        for (keyword, items) in entries {
            index
                .postings
                .entry(keyword.into())
                .or_default()
                .extend(items);
        }
        index
    }

    /// Build an index from a parsed index document.
    ///
    /// The document must be an object whose values are arrays. Malformed items
    /// inside an array are skipped and counted rather than failing the load.
    pub fn from_value(value: Value) -> QaResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(QaError::InvalidIndex(format!(
                    "expected a JSON object at the top level, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut index = Self::new();
        for (keyword, entries) in map {
            let entries = match entries {
                Value::Array(entries) => entries,
                other => {
                    return Err(QaError::InvalidIndex(format!(
                        "entry for keyword {keyword:?} must be an array, found {}",
                        json_kind(&other)
                    )))
                }
            };

            let mut items = Vec::with_capacity(entries.len());
            for (position, entry) in entries.into_iter().enumerate() {
                match serde_json::from_value::<ContentItem>(entry) {
                    Ok(item) => items.push(item),
                    Err(e) => {
                        warn!("skipping item {position} under keyword {keyword:?}: {e}");
                        index.skipped += 1;
                    }
                }
            }
            index.postings.insert(keyword, items);
        }

        Ok(index)
    }

    /// Parse an index document from a JSON string.
    pub fn from_json_str(json: &str) -> QaResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| QaError::InvalidIndex(format!("not valid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Look up a keyword. Unknown keywords yield an empty slice.
    pub fn get(&self, keyword: &str) -> &[ContentItem] {
        self.postings
            .get(keyword)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.postings.contains_key(keyword)
    }

    /// Number of distinct keywords.
    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of items dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Item counts per kind across all posting lists.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            keywords: self.postings.len(),
            skipped: self.skipped,
            ..IndexStats::default()
        };
        for item in self.postings.values().flatten() {
            match item.kind() {
                Some(ContentKind::Qa) => stats.qa += 1,
                Some(ContentKind::Vocabulary) => stats.vocabulary += 1,
                Some(ContentKind::Paragraph) => stats.paragraph += 1,
                None => stats.unrecognized += 1,
            }
        }
        stats
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
