//! Rule-set eligibility.
//!
//! Tiers are ordered `Standard < Wildspace < Epic < Banned`. A card legal
//! at one tier is legal at every looser tier, so a card's tier is simply
//! the strictest format whose flag it carries.

use serde::{Deserialize, Serialize};

/// Legality tier of a card or squad.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Legality {
    Standard,
    Wildspace,
    Epic,
    /// Cards with no format flag at all.
    #[default]
    Banned,
}

impl Legality {
    /// Every tier, strictest first.
    pub const ALL: [Legality; 4] = [
        Legality::Standard,
        Legality::Wildspace,
        Legality::Epic,
        Legality::Banned,
    ];

    /// Derive a tier from the catalog's per-format flags.
    #[must_use]
    pub const fn from_flags(standard: bool, wildspace: bool, epic: bool) -> Self {
        if standard {
            Legality::Standard
        } else if wildspace {
            Legality::Wildspace
        } else if epic {
            Legality::Epic
        } else {
            Legality::Banned
        }
    }

    /// Can a card of this tier be played in `format`?
    #[must_use]
    pub fn is_legal_in(self, format: Legality) -> bool {
        format != Legality::Banned && self <= format
    }

    /// The looser of two tiers.
    #[must_use]
    pub fn worst(self, other: Legality) -> Legality {
        self.max(other)
    }

    /// Bracketed tag printed in card headers. Banned cards get none.
    #[must_use]
    pub const fn mode_tag(self) -> &'static str {
        match self {
            Legality::Standard => "[Standard]",
            Legality::Wildspace => "[Wild Space]",
            Legality::Epic => "[Epic]",
            Legality::Banned => "",
        }
    }
}

impl std::fmt::Display for Legality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Legality::Standard => "Standard",
            Legality::Wildspace => "Wild Space",
            Legality::Epic => "Epic",
            Legality::Banned => "Banned",
        };
        f.write_str(name)
    }
}
