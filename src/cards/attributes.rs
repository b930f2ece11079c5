//! Typed card attributes shared by several card kinds.
//!
//! These mirror the catalog's JSON schema field for field. Optional
//! fields default to empty/absent rather than being looked up at runtime.
//!
//! ## Types
//!
//! - `StatType` / `Stat`: entries of a ship's stat block
//! - `ChargeStat`: charge and force pools on pilots and upgrade sides
//! - `ActionSpec`: an action bar entry, optionally linked to a second action
//! - `AttackSpec`: a secondary weapon printed on an upgrade side
//! - `Grant`: stats, actions or slots an upgrade adds to its ship
//! - `ShipAbility`: a named ship ability

use serde::{Deserialize, Serialize};

/// Kind of value in a stat block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    Attack,
    Agility,
    Hull,
    #[serde(rename = "shields", alias = "shield")]
    Shield,
    Charge,
    #[serde(alias = "force")]
    ForceCharge,
    Initiative,
    Energy,
}

impl StatType {
    /// Name used in icon placeholders (`shields` becomes `shield`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            StatType::Attack => "attack",
            StatType::Agility => "agility",
            StatType::Hull => "hull",
            StatType::Shield => "shield",
            StatType::Charge => "charge",
            StatType::ForceCharge => "forcecharge",
            StatType::Initiative => "initiative",
            StatType::Energy => "energy",
        }
    }

    /// Fixed icon colour for this stat.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            StatType::Attack => "red",
            StatType::Agility => "green",
            StatType::Hull | StatType::Charge => "yellow",
            StatType::Shield => "blue",
            StatType::ForceCharge => "purple",
            StatType::Initiative => "orange",
            StatType::Energy => "magenta",
        }
    }

    /// Parse a stat name as it appears in cost variables and grants.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "attack" => Some(StatType::Attack),
            "agility" => Some(StatType::Agility),
            "hull" => Some(StatType::Hull),
            "shield" | "shields" => Some(StatType::Shield),
            "charge" | "charges" => Some(StatType::Charge),
            "force" | "forcecharge" => Some(StatType::ForceCharge),
            "initiative" => Some(StatType::Initiative),
            "energy" => Some(StatType::Energy),
            _ => None,
        }
    }
}

/// One entry of a stat block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(rename = "type")]
    pub kind: StatType,

    pub value: i64,

    /// Firing arc, for attack stats.
    #[serde(default)]
    pub arc: Option<String>,

    /// Printed with a "plus" marker.
    #[serde(default)]
    pub plus: bool,

    /// Amount recovered each round (negative loses).
    #[serde(default)]
    pub recovers: i64,
}

impl Stat {
    /// Create a stat with no arc, marker or recovery.
    pub fn new(kind: StatType, value: i64) -> Self {
        Self {
            kind,
            value,
            arc: None,
            plus: false,
            recovers: 0,
        }
    }
}

/// A charge or force pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeStat {
    pub value: i64,

    #[serde(default)]
    pub recovers: i64,

    /// Force sides (light/dark) the pool belongs to.
    #[serde(default)]
    pub side: Vec<String>,
}

impl ChargeStat {
    /// View this pool as a stat of the given kind.
    #[must_use]
    pub fn as_stat(&self, kind: StatType, plus: bool) -> Stat {
        Stat {
            kind,
            value: self.value,
            arc: None,
            plus,
            recovers: self.recovers,
        }
    }
}

fn white() -> String {
    "White".to_string()
}

fn one() -> i64 {
    1
}

/// An action bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default = "white")]
    pub difficulty: String,

    /// Action that may be performed immediately after this one.
    #[serde(default)]
    pub linked: Option<Box<ActionSpec>>,
}

impl ActionSpec {
    /// Create a white action.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            difficulty: white(),
            linked: None,
        }
    }

    /// Set the difficulty (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Chain a linked action (builder pattern).
    #[must_use]
    pub fn linked_to(mut self, action: ActionSpec) -> Self {
        self.linked = Some(Box::new(action));
        self
    }

    /// True for the default (white) difficulty.
    #[must_use]
    pub fn is_white(&self) -> bool {
        self.difficulty.eq_ignore_ascii_case("white")
    }
}

/// Secondary weapon printed on an upgrade side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackSpec {
    pub arc: String,
    pub value: i64,
    pub minrange: i64,
    pub maxrange: i64,
    #[serde(default)]
    pub ordnance: bool,
}

/// Something an upgrade side adds to the ship that equips it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Grant {
    Slot {
        value: String,
        #[serde(default = "one")]
        amount: i64,
    },
    Action {
        value: ActionSpec,
        #[serde(default = "one")]
        amount: i64,
    },
    Stat {
        value: StatType,
        amount: i64,
    },
    /// Grant kinds the renderer has no summary for.
    #[serde(other)]
    Other,
}

/// A named ship ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipAbility {
    pub name: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_type_slug_and_color() {
        assert_eq!(StatType::Shield.slug(), "shield");
        assert_eq!(StatType::Shield.color(), "blue");
        assert_eq!(StatType::ForceCharge.color(), "purple");
        assert_eq!(StatType::Charge.color(), "yellow");
    }

    #[test]
    fn test_stat_type_from_name() {
        assert_eq!(StatType::from_name("Agility"), Some(StatType::Agility));
        assert_eq!(StatType::from_name("shields"), Some(StatType::Shield));
        assert_eq!(StatType::from_name("size"), None);
    }

    #[test]
    fn test_stat_deserialize_shields() {
        let stat: Stat = serde_json::from_str(r#"{"type": "shields", "value": 2}"#).unwrap();
        assert_eq!(stat.kind, StatType::Shield);
        assert_eq!(stat.value, 2);
        assert!(!stat.plus);
        assert_eq!(stat.recovers, 0);
    }

    #[test]
    fn test_action_defaults_to_white() {
        let action: ActionSpec = serde_json::from_str(
            r#"{"type": "Barrel Roll", "linked": {"type": "Lock", "difficulty": "Red"}}"#,
        )
        .unwrap();
        assert!(action.is_white());
        let linked = action.linked.unwrap();
        assert_eq!(linked.kind, "Lock");
        assert!(!linked.is_white());
    }

    #[test]
    fn test_grant_variants() {
        let grants: Vec<Grant> = serde_json::from_str(
            r#"[
                {"type": "slot", "value": "Crew"},
                {"type": "action", "value": {"type": "Calculate"}},
                {"type": "stat", "value": "shields", "amount": -1},
                {"type": "force", "value": "whatever"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            grants[0],
            Grant::Slot {
                value: "Crew".into(),
                amount: 1
            }
        );
        assert!(matches!(grants[1], Grant::Action { amount: 1, .. }));
        assert_eq!(
            grants[2],
            Grant::Stat {
                value: StatType::Shield,
                amount: -1
            }
        );
        assert_eq!(grants[3], Grant::Other);
    }
}
