//! Card and list rendering.
//!
//! Renderers produce plain text with `{iconname}` placeholders and a little
//! markdown. Mapping placeholders to glyphs is left to the front-end through
//! an `IconResolver`.
//!
//! ## Key Types
//!
//! - `Renderable`: Full text of a card
//! - `RenderContext`: The index and config a renderer reads from
//! - `IconTable`: A name to glyph table implementing `IconResolver`

pub mod card;
pub mod cost;
pub mod dial;
pub mod icons;
pub mod markup;
pub mod restrictions;
pub mod stats;
pub mod text;

pub use card::{
    pilot_label, pilot_line, select_label, upgrade_cost_label, RenderContext, Renderable,
    SelectLabel,
};
pub use cost::{cost_label, cost_or_zero, resolve_cost};
pub use dial::dial_rows;
pub use icons::{resolve_icons, IconResolver, IconTable};
pub use restrictions::restrictions_line;
