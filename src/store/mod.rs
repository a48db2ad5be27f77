//! Loading the knowledge base and search index documents.
//!
//! Both documents are read fully into memory before the first question is
//! answered. Any failure here is fatal to the caller; nothing is retried and
//! no partially loaded store is ever returned.

use std::fs;
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::config::Config;
use crate::engine::Answerer;
use crate::index::SearchIndex;
use crate::types::{QaError, QaResult};

/// The course knowledge base. Its structure is opaque to the answer path.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    document: Value,
}

impl KnowledgeBase {
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    pub fn read_from_file(path: &Path) -> QaResult<Self> {
        read_json(path).map(Self::from_value)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }
}

/// Knowledge base plus index, immutable after loading.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    knowledge: KnowledgeBase,
    index: SearchIndex,
}

impl ContentStore {
    pub fn new(knowledge: KnowledgeBase, index: SearchIndex) -> Self {
        Self { knowledge, index }
    }

    /// Load both documents named by `config`.
    pub fn load(config: &Config) -> QaResult<Self> {
        let knowledge = KnowledgeBase::read_from_file(&config.knowledge_path)?;
        let index = read_index(&config.index_path)?;

        let stats = index.stats();
        info!(
            "loaded {} keywords ({} qa, {} vocabulary, {} paragraph, {} unrecognized, {} skipped)",
            stats.keywords,
            stats.qa,
            stats.vocabulary,
            stats.paragraph,
            stats.unrecognized,
            stats.skipped
        );

        Ok(Self::new(knowledge, index))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// An answerer borrowing this store's index.
    pub fn answerer(&self) -> Answerer<'_> {
        Answerer::new(&self.index)
    }
}

/// Read a search index document from disk.
pub fn read_index(path: &Path) -> QaResult<SearchIndex> {
    SearchIndex::from_value(read_json(path)?)
}

fn read_json(path: &Path) -> QaResult<Value> {
    let text = fs::read_to_string(path).map_err(|source| QaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| QaError::Json {
        path: path.to_path_buf(),
        source,
    })
}
