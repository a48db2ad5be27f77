//! The keyword index the answerer reads from.

pub mod search_index;

pub use search_index::{IndexStats, SearchIndex};
