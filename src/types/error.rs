//! Error type shared by the loader, config and CLI layers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing the content store or talking to the terminal.
///
/// Answering a question never fails: an empty keyword set or an index miss
/// produce fallback answers instead.
#[derive(Error, Debug)]
pub enum QaError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid search index: {0}")]
    InvalidIndex(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("readline error: {0}")]
    Readline(String),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type QaResult<T> = Result<T, QaError>;
