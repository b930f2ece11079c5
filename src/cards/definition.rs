//! Card definitions - the typed, immutable card graph.
//!
//! Every card kind embeds a `CardBase` with the attributes all kinds share
//! and the unique key computed when the card was built. `Card` is the
//! closed set of kinds the catalog contains.
//!
//! Cards refer to each other by `CardId`, an index into the owning
//! `CardIndex`. A pilot's ship is one such non-owning reference.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::damage::Damage;
use super::legality::Legality;
use super::pilot::Pilot;
use super::restrictions::RestrictionGroup;
use super::ship::Ship;
use super::upgrade::Upgrade;

/// Position of a card inside its `CardIndex`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Discriminates the card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Ship,
    Pilot,
    Upgrade,
    Damage,
    Condition,
}

impl CardKind {
    /// Suffix used in unique keys.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            CardKind::Ship => "ship",
            CardKind::Pilot => "pilot",
            CardKind::Upgrade => "upgrade",
            CardKind::Damage => "damage",
            CardKind::Condition => "condition",
        }
    }
}

/// Point cost of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostSpec {
    /// Cost depends on an attribute of the equipping pilot or ship.
    Variable {
        variable: String,
        values: IndexMap<String, i64>,
    },
    /// `{"value": n}` form used by upgrades.
    Value { value: i64 },
    /// Bare integer form used by pilots.
    Fixed(i64),
}

impl Default for CostSpec {
    fn default() -> Self {
        CostSpec::Fixed(0)
    }
}

impl CostSpec {
    /// Build a variable cost from `(key, value)` pairs.
    pub fn variable(
        variable: impl Into<String>,
        values: impl IntoIterator<Item = (impl Into<String>, i64)>,
    ) -> Self {
        CostSpec::Variable {
            variable: variable.into(),
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// The cost when it does not depend on anything.
    #[must_use]
    pub fn fixed_value(&self) -> Option<i64> {
        match self {
            CostSpec::Fixed(value) | CostSpec::Value { value } => Some(*value),
            CostSpec::Variable { .. } => None,
        }
    }

    /// True for variable costs.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, CostSpec::Variable { .. })
    }
}

/// Attributes shared by every card kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBase {
    /// Globally unique key (short id + name + kind discriminator).
    pub key: String,

    /// Short id. Not unique across kinds or factions.
    pub xws: String,

    /// Display name.
    pub name: String,

    pub caption: Option<String>,

    /// Number of copies allowed in a squad (0 = unlimited).
    pub limited: u8,

    pub cost: CostSpec,

    pub restrictions: Vec<RestrictionGroup>,

    pub legality: Legality,

    /// Game text.
    pub ability: Option<String>,

    /// Flavor text.
    pub text: Option<String>,

    pub keywords: Vec<String>,

    /// Alternate names players search by.
    pub nicknames: Vec<String>,

    pub image: Option<String>,
}

impl CardBase {
    /// Create a base with just a short id and name.
    pub fn new(xws: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            xws: xws.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name as it appears inside unique keys.
    #[must_use]
    pub fn key_name(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// Start of every unique key: `{xws}%{name}`.
    #[must_use]
    pub fn key_prefix(&self) -> String {
        format!("{}%{}", self.xws, self.key_name())
    }

    /// Tooltip shown on links: flavor text, falling back to game text.
    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.text.as_deref().or(self.ability.as_deref())
    }
}

/// A card of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Card {
    Ship(Ship),
    Pilot(Pilot),
    Upgrade(Upgrade),
    Damage(Damage),
    Condition(Condition),
}

impl Card {
    /// Shared attributes.
    #[must_use]
    pub fn base(&self) -> &CardBase {
        match self {
            Card::Ship(c) => &c.base,
            Card::Pilot(c) => &c.base,
            Card::Upgrade(c) => &c.base,
            Card::Damage(c) => &c.base,
            Card::Condition(c) => &c.base,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Ship(_) => CardKind::Ship,
            Card::Pilot(_) => CardKind::Pilot,
            Card::Upgrade(_) => CardKind::Upgrade,
            Card::Damage(_) => CardKind::Damage,
            Card::Condition(_) => CardKind::Condition,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.base().key
    }

    #[must_use]
    pub fn xws(&self) -> &str {
        &self.base().xws
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.base().name
    }

    #[must_use]
    pub fn legality(&self) -> Legality {
        self.base().legality
    }

    #[must_use]
    pub fn as_ship(&self) -> Option<&Ship> {
        match self {
            Card::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pilot(&self) -> Option<&Pilot> {
        match self {
            Card::Pilot(pilot) => Some(pilot),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_upgrade(&self) -> Option<&Upgrade> {
        match self {
            Card::Upgrade(upgrade) => Some(upgrade),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Card::Condition(condition) => Some(condition),
            _ => None,
        }
    }
}
