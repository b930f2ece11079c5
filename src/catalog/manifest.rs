//! Raw catalog records, exactly as the JSON documents spell them.
//!
//! `Manifest` names every other document. The loader decodes those
//! documents into the `Raw*` records below and bundles them into a
//! `RawCatalog`, which `CardIndex::build` turns into typed cards.

use serde::{Deserialize, Serialize};

use crate::cards::attributes::{ActionSpec, AttackSpec, ChargeStat, Grant, ShipAbility, Stat};
use crate::cards::definition::CostSpec;
use crate::cards::restrictions::RestrictionGroup;

/// A manifest entry naming one document or several.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentRef {
    One(String),
    Many(Vec<String>),
}

impl Default for DocumentRef {
    fn default() -> Self {
        DocumentRef::Many(Vec::new())
    }
}

impl DocumentRef {
    /// Referenced paths, in manifest order.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        match self {
            DocumentRef::One(path) => std::slice::from_ref(path),
            DocumentRef::Many(paths) => paths,
        }
    }
}

/// Ship documents of one faction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionShipsRef {
    pub faction: String,
    #[serde(default)]
    pub ships: DocumentRef,
}

/// The versioned root document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    #[serde(default)]
    pub factions: DocumentRef,
    #[serde(default)]
    pub stats: DocumentRef,
    #[serde(default)]
    pub actions: DocumentRef,
    #[serde(default)]
    pub damagedecks: DocumentRef,
    #[serde(default)]
    pub pilots: Vec<FactionShipsRef>,
    #[serde(default)]
    pub upgrades: DocumentRef,
    #[serde(default)]
    pub conditions: DocumentRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFaction {
    pub name: String,
    pub xws: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Entry of the stat and action reference tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawReference {
    pub name: String,
    #[serde(default)]
    pub xws: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn one() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDamage {
    pub title: String,
    #[serde(default = "one")]
    pub amount: u32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Decoded damage deck document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDamageDeckDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub cards: Vec<RawDamage>,
}

/// A damage deck labelled with the deck it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDamageDeck {
    pub deck: String,
    pub cards: Vec<RawDamage>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPilot {
    pub name: String,
    pub xws: String,
    pub caption: Option<String>,
    pub initiative: i64,
    pub limited: u8,
    pub cost: CostSpec,
    pub loadout: Option<i64>,
    pub engagement: Option<i64>,
    pub ability: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub slots: Vec<String>,
    pub charges: Option<ChargeStat>,
    pub force: Option<ChargeStat>,
    #[serde(rename = "shipAbility")]
    pub ship_ability: Option<ShipAbility>,
    #[serde(rename = "shipActions")]
    pub ship_actions: Option<Vec<ActionSpec>>,
    pub keywords: Vec<String>,
    pub nicknames: Vec<String>,
    pub conditions: Vec<String>,
    pub standard: bool,
    pub wildspace: bool,
    pub epic: bool,
    #[serde(rename = "standardLoadout")]
    pub standard_loadout: Vec<String>,
    /// Pilots are single-sided; present only in malformed data.
    pub sides: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawShip {
    pub name: String,
    pub xws: String,
    pub size: Option<String>,
    /// Dial codes: speed digit, direction letter, difficulty letter.
    pub dial: Vec<String>,
    pub stats: Vec<Stat>,
    pub actions: Vec<ActionSpec>,
    pub slots: Vec<String>,
    pub keywords: Vec<String>,
    pub icon: Option<String>,
    pub standard: bool,
    pub wildspace: bool,
    pub epic: bool,
    #[serde(rename = "standardLoadoutOnly")]
    pub standard_loadout_only: bool,
    pub pilots: Vec<RawPilot>,
}

/// Ships of one faction, in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFactionShips {
    pub faction: String,
    pub ships: Vec<RawShip>,
}

/// A device printed on an upgrade side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDevice {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub effect: Option<String>,
    pub xws: Option<String>,
    /// Remotes carry full card faces.
    pub sides: Vec<RawSide>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSide {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ability: Option<String>,
    pub text: Option<String>,
    pub slots: Vec<String>,
    pub attack: Option<AttackSpec>,
    pub charges: Option<ChargeStat>,
    pub force: Option<ChargeStat>,
    pub grants: Vec<Grant>,
    pub device: Option<RawDevice>,
    pub conditions: Vec<String>,
    #[serde(rename = "shipAbility")]
    pub ship_ability: Option<ShipAbility>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawUpgrade {
    pub name: String,
    pub xws: String,
    pub caption: Option<String>,
    pub limited: u8,
    pub cost: CostSpec,
    pub sides: Vec<RawSide>,
    pub restrictions: Vec<RestrictionGroup>,
    pub keywords: Vec<String>,
    pub nicknames: Vec<String>,
    pub standard: bool,
    pub wildspace: bool,
    pub epic: bool,
    #[serde(rename = "standardLoadoutOnly")]
    pub standard_loadout_only: bool,
}

/// Upgrades decoded from one slot document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUpgradeGroup {
    /// Document the upgrades came from.
    pub document: String,
    pub upgrades: Vec<RawUpgrade>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCondition {
    pub name: String,
    pub xws: String,
    pub ability: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
}

/// Everything one catalog version contains, still untyped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCatalog {
    pub version: String,
    pub factions: Vec<RawFaction>,
    pub stats: Vec<RawReference>,
    pub actions: Vec<RawReference>,
    pub damage_decks: Vec<RawDamageDeck>,
    pub ships: Vec<RawFactionShips>,
    pub upgrades: Vec<RawUpgradeGroup>,
    pub conditions: Vec<RawCondition>,
}
