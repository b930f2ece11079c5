//! Fuzzy card search.

pub mod engine;
pub mod fuzzy;

pub use engine::{SearchEngine, SearchHit};
pub use fuzzy::{partial_ratio, partial_token_sort_ratio, token_sort};
