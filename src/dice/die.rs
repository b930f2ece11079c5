//! Attack and defense dice.

use std::fmt;

use crate::core::rng::DiceRng;

/// A face showing on a die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Hit,
    Crit,
    Evade,
    Focus,
    Blank,
}

impl Face {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Hit => "hit",
            Face::Crit => "crit",
            Face::Evade => "evade",
            Face::Focus => "focus",
            Face::Blank => "blank",
        }
    }
}

const ATTACK_FACES: [Face; 8] = [
    Face::Hit,
    Face::Hit,
    Face::Hit,
    Face::Crit,
    Face::Blank,
    Face::Blank,
    Face::Focus,
    Face::Focus,
];

const DEFENSE_FACES: [Face; 8] = [
    Face::Evade,
    Face::Evade,
    Face::Evade,
    Face::Blank,
    Face::Blank,
    Face::Blank,
    Face::Focus,
    Face::Focus,
];

/// Red attack dice or green defense dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DieKind {
    Attack,
    Defense,
}

impl DieKind {
    /// The eight faces of this die.
    #[must_use]
    pub const fn faces(self) -> &'static [Face; 8] {
        match self {
            DieKind::Attack => &ATTACK_FACES,
            DieKind::Defense => &DEFENSE_FACES,
        }
    }

    /// What a focus result turns into.
    #[must_use]
    pub const fn focused(self) -> Face {
        match self {
            DieKind::Attack => Face::Hit,
            DieKind::Defense => Face::Evade,
        }
    }

    /// Faces that are kept when rerolling.
    #[must_use]
    pub fn is_positive(self, face: Face) -> bool {
        match self {
            DieKind::Attack => matches!(face, Face::Hit | Face::Crit),
            DieKind::Defense => face == Face::Evade,
        }
    }

    /// Prefix of this die's icon names.
    #[must_use]
    pub const fn icon_prefix(self) -> &'static str {
        match self {
            DieKind::Attack => "atk",
            DieKind::Defense => "def",
        }
    }
}

/// One rolled die.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Die {
    kind: DieKind,
    face: Face,
}

impl Die {
    /// A die only reaches the table by being rolled.
    pub fn roll(kind: DieKind, rng: &mut DiceRng) -> Self {
        let mut die = Self {
            kind,
            face: Face::Blank,
        };
        die.reroll_unchecked(rng);
        die
    }

    /// A die showing a chosen face.
    #[must_use]
    pub const fn showing(kind: DieKind, face: Face) -> Self {
        Self { kind, face }
    }

    #[must_use]
    pub const fn kind(&self) -> DieKind {
        self.kind
    }

    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    fn reroll_unchecked(&mut self, rng: &mut DiceRng) {
        if let Some(&face) = rng.choose(self.kind.faces()) {
            self.face = face;
        }
    }

    /// Reroll unless the die already shows a positive result.
    pub fn reroll(&mut self, rng: &mut DiceRng) -> bool {
        if self.kind.is_positive(self.face) {
            return false;
        }
        self.reroll_unchecked(rng);
        true
    }

    /// Spend a focus: a focus result becomes a hit or an evade.
    pub fn focus(&mut self) -> bool {
        if self.face != Face::Focus {
            return false;
        }
        self.face = self.kind.focused();
        true
    }

    /// Spend an evade token. Only defense dice take one.
    pub fn evade(&mut self) -> bool {
        if self.kind != DieKind::Defense || self.kind.is_positive(self.face) {
            return false;
        }
        self.face = Face::Evade;
        true
    }

    pub fn set_to_blank(&mut self) -> bool {
        if self.face == Face::Blank {
            return false;
        }
        self.face = Face::Blank;
        true
    }

    pub fn set_to_focus(&mut self) -> bool {
        if self.face == Face::Focus {
            return false;
        }
        self.face = Face::Focus;
        true
    }
}

impl fmt::Display for Die {
    /// `{atkhit}`, `{defevade}`, ...
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}{}}}", self.kind.icon_prefix(), self.face.name())
    }
}
