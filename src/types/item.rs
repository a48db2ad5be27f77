//! Content items referenced by the search index.

use serde::{Deserialize, Serialize};

/// The content kinds the answer policy knows how to surface, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Qa,
    Vocabulary,
    Paragraph,
}

impl ContentKind {
    /// All kinds, highest priority first.
    pub const PRIORITY: [ContentKind; 3] = [
        ContentKind::Qa,
        ContentKind::Vocabulary,
        ContentKind::Paragraph,
    ];
}

/// One retrievable unit, tagged by its `type` field.
///
/// Fields beyond the ones each kind needs are ignored. Any tag outside the
/// known kinds deserializes to [`ContentItem::Unrecognized`], which the index
/// keeps but the answerer never surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A curated question/answer pair.
    Qa { answer: String },
    /// A word from the unit's vocabulary list.
    Vocabulary { word: String, definition: String },
    /// A passage of the course text.
    Paragraph { content: String },
    #[serde(other)]
    Unrecognized,
}

impl ContentItem {
    /// The kind of this item, or `None` for unrecognized tags.
    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            ContentItem::Qa { .. } => Some(ContentKind::Qa),
            ContentItem::Vocabulary { .. } => Some(ContentKind::Vocabulary),
            ContentItem::Paragraph { .. } => Some(ContentKind::Paragraph),
            ContentItem::Unrecognized => None,
        }
    }

    pub fn qa(answer: impl Into<String>) -> Self {
        ContentItem::Qa {
            answer: answer.into(),
        }
    }

    pub fn vocabulary(word: impl Into<String>, definition: impl Into<String>) -> Self {
        ContentItem::Vocabulary {
            word: word.into(),
            definition: definition.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        ContentItem::Paragraph {
            content: content.into(),
        }
    }
}
