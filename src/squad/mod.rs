//! Squad lists: XWS documents, legality and text rendering.
//!
//! ## Key Types
//!
//! - `SquadDocument`: A decoded XWS export
//! - `ListParser`: Renders a squad against a `CardIndex`
//! - `LegalityTracker`: Aggregate legality, which only ever gets looser

pub mod document;
pub mod legality;
pub mod link;
pub mod parser;

pub use document::{SquadDocument, SquadPilot, VendorInfo, DEFAULT_SQUAD_NAME};
pub use legality::LegalityTracker;
pub use link::{clean_link, display_link, fetch_squad, xws_endpoint, Builder, ListLink};
pub use parser::{ListParser, SquadSummary};
