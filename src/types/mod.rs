//! Core data types: content items and errors.

pub mod error;
pub mod item;

pub use error::{QaError, QaResult};
pub use item::{ContentItem, ContentKind};
