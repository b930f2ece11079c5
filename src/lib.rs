//! # squadron-codex
//!
//! A card knowledge base for X-Wing miniatures: catalog loading, fuzzy
//! card search, chat-ready card text, squad list summaries and dice.
//!
//! ## Design Principles
//!
//! 1. **One immutable snapshot**: a `CardIndex` is built once per catalog
//!    version and shared behind an `Arc`. Refreshes build a new index and
//!    swap it in whole.
//!
//! 2. **Arena, not graph**: cards refer to each other by `CardId`. A
//!    pilot knows its ship's id, never the ship itself.
//!
//! 3. **Placeholders out**: rendered text contains `{icon}` placeholders
//!    only. Front-ends resolve them with an `IconResolver`.
//!
//! ## Modules
//!
//! - `core`: errors, configuration, RNG
//! - `catalog`: manifest, document fetching, shared snapshot
//! - `cards`: typed cards and the `CardIndex`
//! - `search`: tiered fuzzy search
//! - `render`: card text, costs, dials, icons
//! - `squad`: XWS squad lists and legality
//! - `dice`: attack and defense dice

pub mod core;
pub mod cards;
pub mod catalog;
pub mod search;
pub mod render;
pub mod squad;
pub mod dice;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, CostResolutionError, FetchError, ListError, RollError, UnrecognizedCardError,
    DiceRng, LoaderConfig, RenderConfig, SearchConfig,
};

pub use crate::cards::{
    Card, CardBase, CardId, CardIndex, CardKind, Condition, CostSpec, Damage, Legality, Pilot,
    Ship, Upgrade,
};

pub use crate::catalog::{
    CatalogLoader, DocumentFetcher, FsFetcher, HttpFetcher, MemoryFetcher, RawCatalog,
    SharedCatalog, Source,
};

pub use crate::search::{SearchEngine, SearchHit};

pub use crate::render::{
    resolve_icons, select_label, IconResolver, IconTable, RenderContext, Renderable, SelectLabel,
};

pub use crate::squad::{
    fetch_squad, xws_endpoint, LegalityTracker, ListParser, SquadDocument, SquadSummary,
};

pub use crate::dice::{DiceRoll, DieKind};
