//! Damage deck cards.

use super::definition::CardBase;

/// One damage card and how many copies its deck holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Damage {
    /// `name` holds the card title.
    pub base: CardBase,

    /// Deck the card belongs to ("core", "epic", ...).
    pub deck: String,

    pub amount: u32,

    /// Pilot or Ship.
    pub kind: Option<String>,
}

impl Damage {
    pub fn new(base: CardBase, deck: impl Into<String>, amount: u32) -> Self {
        Self {
            base,
            deck: deck.into(),
            amount,
            kind: None,
        }
    }

    /// Unique key: `{xws}%{name}-{deck}-damage`.
    #[must_use]
    pub fn unique_key(&self) -> String {
        format!("{}-{}-damage", self.base.key_prefix(), self.deck)
    }
}
