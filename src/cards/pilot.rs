//! Pilot cards.

use super::attributes::{ActionSpec, ChargeStat, ShipAbility};
use super::definition::{CardBase, CardId};

/// A pilot flying one ship chassis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pilot {
    pub base: CardBase,

    /// The chassis this pilot flies. Non-owning.
    pub ship: CardId,

    /// Faction short id, copied from the ship.
    pub faction: String,

    pub initiative: i64,

    pub engagement: Option<i64>,

    /// Loadout value for upgrade points.
    pub loadout: Option<i64>,

    pub slots: Vec<String>,

    pub charges: Option<ChargeStat>,

    pub force: Option<ChargeStat>,

    /// Replaces the chassis' ship ability for this pilot.
    pub ship_ability: Option<ShipAbility>,

    /// Replaces the chassis' action bar for this pilot.
    pub ship_actions: Option<Vec<ActionSpec>>,

    /// Condition short ids this pilot brings.
    pub conditions: Vec<String>,

    /// Upgrades fixed by a standard loadout.
    pub standard_loadout: Vec<String>,
}

impl Pilot {
    pub fn new(base: CardBase, ship: CardId, faction: impl Into<String>) -> Self {
        Self {
            base,
            ship,
            faction: faction.into(),
            initiative: 0,
            engagement: None,
            loadout: None,
            slots: Vec::new(),
            charges: None,
            force: None,
            ship_ability: None,
            ship_actions: None,
            conditions: Vec::new(),
            standard_loadout: Vec::new(),
        }
    }

    /// Unique key: `{xws}%{name}-{faction}-pilot`.
    #[must_use]
    pub fn unique_key(&self) -> String {
        format!("{}-{}-pilot", self.base.key_prefix(), self.faction)
    }

    /// Set initiative (builder pattern).
    #[must_use]
    pub fn with_initiative(mut self, initiative: i64) -> Self {
        self.initiative = initiative;
        self
    }

    /// Pilot attribute a variable cost can key on.
    ///
    /// Returns `None` for names that are not pilot attributes, or that
    /// this pilot does not have.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "initiative" => Some(self.initiative.to_string()),
            "engagement" => self.engagement.map(|v| v.to_string()),
            "loadout" => self.loadout.map(|v| v.to_string()),
            "limited" => Some(self.base.limited.to_string()),
            "cost" => self.base.cost.fixed_value().map(|v| v.to_string()),
            _ => None,
        }
    }

    /// Base point cost. Pilots always carry a fixed cost.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.base.cost.fixed_value().unwrap_or(0)
    }

    /// Pilots fielded through a standard loadout.
    #[must_use]
    pub fn is_standard_loadout(&self) -> bool {
        !self.standard_loadout.is_empty()
    }
}
