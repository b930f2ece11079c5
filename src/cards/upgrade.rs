//! Upgrade cards and their sides.
//!
//! An upgrade has one printed face per `Side`. A side may carry a device:
//! remotes are full cards in their own right and are kept as a nested
//! `Upgrade` that never enters the index; every other device is a short
//! named effect.

use super::attributes::{AttackSpec, ChargeStat, Grant, ShipAbility};
use super::definition::CardBase;

/// One face of an upgrade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Side {
    pub title: String,

    /// Slot type printed on the face (Talent, Crew, ...).
    pub kind: String,

    pub ability: Option<String>,

    pub text: Option<String>,

    /// Slots the upgrade occupies.
    pub slots: Vec<String>,

    pub attack: Option<AttackSpec>,

    pub charges: Option<ChargeStat>,

    pub force: Option<ChargeStat>,

    pub grants: Vec<Grant>,

    pub device: Option<Device>,

    /// Condition short ids brought along by this side.
    pub conditions: Vec<String>,

    /// Replacement ship ability (configurations).
    pub ship_ability: Option<ShipAbility>,

    pub image: Option<String>,
}

impl Side {
    pub fn new(title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set ability text (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    /// Set occupied slots (builder pattern).
    #[must_use]
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.slots = slots.into_iter().map(Into::into).collect();
        self
    }
}

/// A device dropped or launched by an upgrade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Device {
    /// Remotes render as full cards.
    Remote(Box<Upgrade>),
    /// Bombs, mines and the like.
    Other {
        name: String,
        kind: String,
        effect: Option<String>,
    },
}

/// An upgrade card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upgrade {
    pub base: CardBase,

    /// Printed faces, front first. Never empty once built.
    pub sides: Vec<Side>,

    /// Only fielded as part of a standard loadout.
    pub standard_loadout_only: bool,
}

impl Upgrade {
    pub fn new(base: CardBase, sides: Vec<Side>) -> Self {
        Self {
            base,
            sides,
            standard_loadout_only: false,
        }
    }

    /// The front face.
    #[must_use]
    pub fn front(&self) -> Option<&Side> {
        self.sides.first()
    }

    /// Slot type of the front face.
    #[must_use]
    pub fn slot_type(&self) -> &str {
        self.front().map_or("", |side| side.kind.as_str())
    }

    /// Unique key: `{xws}%{name}-{type}-{slots}-upgrade`.
    ///
    /// Slots are lowercased and joined with `-`. The same card printed for
    /// different slots (e.g. a crew and a gunner version) gets distinct keys.
    #[must_use]
    pub fn unique_key(&self) -> String {
        let slots = self
            .front()
            .map(|side| side.slots.join("-").to_lowercase())
            .unwrap_or_default();
        format!(
            "{}-{}-{}-upgrade",
            self.base.key_prefix(),
            self.slot_type(),
            slots
        )
    }

    /// Titles of every side.
    pub fn side_titles(&self) -> impl Iterator<Item = &str> {
        self.sides
            .iter()
            .map(|side| side.title.as_str())
            .filter(|title| !title.is_empty())
    }

    #[must_use]
    pub fn is_double_sided(&self) -> bool {
        self.sides.len() > 1
    }
}
