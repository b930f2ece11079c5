//! Core types shared by every component: errors, configuration, RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    LoaderConfig, RenderConfig, SearchConfig, DEFAULT_CHECK_INTERVAL_SECS, DEFAULT_FUZZY_THRESHOLD,
    DEFAULT_MANIFEST, DEFAULT_MAX_RESULTS, DEFAULT_WIKI_BASE,
};
pub use error::{
    CatalogError, CostResolutionError, FetchError, ListError, RollError, UnrecognizedCardError,
};
pub use rng::{DiceRng, DiceRngState};
