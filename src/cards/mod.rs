//! Card system: the typed data model and the index that owns it.
//!
//! ## Key Types
//!
//! - `CardId`: Position of a card in its `CardIndex`
//! - `Card`: One of `Ship`, `Pilot`, `Upgrade`, `Damage` or `Condition`
//! - `CardBase`: Attributes every kind shares, including the unique key
//! - `Legality`: Strictest format a card may be played in
//! - `CardIndex`: Immutable arena of cards plus lookups
//!
//! ## Back-references
//!
//! A pilot names its ship by `CardId` and a ship lists its pilots the same
//! way. Resolve either through the `CardIndex` that built them.

pub mod attributes;
pub mod condition;
pub mod damage;
pub mod definition;
pub mod legality;
pub mod pilot;
pub mod registry;
pub mod restrictions;
pub mod ship;
pub mod upgrade;

pub use attributes::{ActionSpec, AttackSpec, ChargeStat, Grant, ShipAbility, Stat, StatType};
pub use condition::Condition;
pub use damage::Damage;
pub use definition::{Card, CardBase, CardId, CardKind, CostSpec};
pub use legality::Legality;
pub use pilot::Pilot;
pub use registry::{CardIndex, Faction, SearchText};
pub use restrictions::RestrictionGroup;
pub use ship::{Difficulty, Direction, Maneuver, Ship};
pub use upgrade::{Device, Side, Upgrade};
