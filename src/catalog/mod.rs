//! Catalog ingestion: manifest, transport, loader and the shared snapshot.
//!
//! ## Key Types
//!
//! - `Manifest`: The versioned root document naming every other document
//! - `Source`: Remote base URL or local directory, picked by URL scheme
//! - `DocumentFetcher`: Transport seam (`HttpFetcher`, `FsFetcher`, `MemoryFetcher`)
//! - `CatalogLoader`: Fetches a `RawCatalog` and detects version changes
//! - `SharedCatalog`: The current `CardIndex`, swapped whole on rebuild

pub mod loader;
pub mod manifest;
pub mod snapshot;
pub mod source;

pub use loader::CatalogLoader;
pub use manifest::{DocumentRef, Manifest, RawCatalog};
pub use snapshot::SharedCatalog;
pub use source::{DocumentFetcher, FsFetcher, HttpFetcher, MemoryFetcher, Source};
