//! Runtime configuration: data file locations and the REPL prompt.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::{QaError, QaResult};

pub const DEFAULT_KNOWLEDGE_PATH: &str = "english_course_knowledge.json";
pub const DEFAULT_INDEX_PATH: &str = "english_course_search_index.json";
pub const DEFAULT_PROMPT: &str = "您的问题: ";

/// Settings for one run. Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub knowledge_path: PathBuf,
    pub index_path: PathBuf,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            knowledge_path: PathBuf::from(DEFAULT_KNOWLEDGE_PATH),
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> QaResult<Self> {
        toml::from_str(text).map_err(|e| QaError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn read_from_file(path: &Path) -> QaResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| QaError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&text).map_err(|e| QaError::Config(format!("{}: {e}", path.display())))
    }

    /// Defaults, or the given file when one is named.
    pub fn load(path: Option<&Path>) -> QaResult<Self> {
        match path {
            Some(path) => Self::read_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file/default values.
    pub fn with_overrides(mut self, knowledge: Option<PathBuf>, index: Option<PathBuf>) -> Self {
        if let Some(path) = knowledge {
            self.knowledge_path = path;
        }
        if let Some(path) = index {
            self.index_path = path;
        }
        self
    }
}
