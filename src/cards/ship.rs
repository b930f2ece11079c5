//! Ship chassis cards and their maneuver dials.
//!
//! Dial entries use the three-character dialgen code: speed digit,
//! direction letter, difficulty letter (`"3KR"` is a red speed-3 k-turn).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attributes::{ActionSpec, Stat, StatType};
use super::definition::{CardBase, CardId};

/// Maneuver template direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    TurnLeft,
    BankLeft,
    Straight,
    BankRight,
    TurnRight,
    KTurn,
    SloopLeft,
    SloopRight,
    TrollLeft,
    TrollRight,
    ReverseBankLeft,
    ReverseStraight,
    ReverseBankRight,
    Stationary,
}

impl Direction {
    /// Dial columns left to right. `Stationary` shares the straight column.
    pub const CANONICAL: [Direction; 13] = [
        Direction::TurnLeft,
        Direction::BankLeft,
        Direction::Straight,
        Direction::BankRight,
        Direction::TurnRight,
        Direction::KTurn,
        Direction::SloopLeft,
        Direction::SloopRight,
        Direction::TrollLeft,
        Direction::TrollRight,
        Direction::ReverseBankLeft,
        Direction::ReverseStraight,
        Direction::ReverseBankRight,
    ];

    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let direction = match code {
            'T' => Direction::TurnLeft,
            'B' => Direction::BankLeft,
            'F' => Direction::Straight,
            'N' => Direction::BankRight,
            'Y' => Direction::TurnRight,
            'K' => Direction::KTurn,
            'L' => Direction::SloopLeft,
            'P' => Direction::SloopRight,
            'E' => Direction::TrollLeft,
            'R' => Direction::TrollRight,
            'A' => Direction::ReverseBankLeft,
            'S' => Direction::ReverseStraight,
            'D' => Direction::ReverseBankRight,
            'O' => Direction::Stationary,
            _ => return None,
        };
        Some(direction)
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Direction::TurnLeft => 'T',
            Direction::BankLeft => 'B',
            Direction::Straight => 'F',
            Direction::BankRight => 'N',
            Direction::TurnRight => 'Y',
            Direction::KTurn => 'K',
            Direction::SloopLeft => 'L',
            Direction::SloopRight => 'P',
            Direction::TrollLeft => 'E',
            Direction::TrollRight => 'R',
            Direction::ReverseBankLeft => 'A',
            Direction::ReverseStraight => 'S',
            Direction::ReverseBankRight => 'D',
            Direction::Stationary => 'O',
        }
    }

    /// Icon name of the template.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Direction::TurnLeft => "turnleft",
            Direction::BankLeft => "bankleft",
            Direction::Straight => "straight",
            Direction::BankRight => "bankright",
            Direction::TurnRight => "turnright",
            Direction::KTurn => "kturn",
            Direction::SloopLeft => "sloopleft",
            Direction::SloopRight => "sloopright",
            Direction::TrollLeft => "trollleft",
            Direction::TrollRight => "trollright",
            Direction::ReverseBankLeft => "reversebankleft",
            Direction::ReverseStraight => "reversestraight",
            Direction::ReverseBankRight => "reversebankright",
            Direction::Stationary => "stop",
        }
    }
}

/// Maneuver difficulty colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Red,
    White,
    Green,
    Blue,
    Purple,
}

impl Difficulty {
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(Difficulty::Red),
            'W' => Some(Difficulty::White),
            'G' => Some(Difficulty::Green),
            'B' => Some(Difficulty::Blue),
            'P' => Some(Difficulty::Purple),
            _ => None,
        }
    }

    /// Prefix for the maneuver icon. White maneuvers use the bare icon.
    #[must_use]
    pub const fn icon_prefix(self) -> &'static str {
        match self {
            Difficulty::Red => "red",
            Difficulty::White => "",
            Difficulty::Green => "green",
            Difficulty::Blue => "blue",
            Difficulty::Purple => "purple",
        }
    }
}

/// One entry of a maneuver dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Maneuver {
    pub speed: u8,
    pub direction: Direction,
    pub difficulty: Difficulty,
}

impl Maneuver {
    #[must_use]
    pub const fn new(speed: u8, direction: Direction, difficulty: Difficulty) -> Self {
        Self {
            speed,
            direction,
            difficulty,
        }
    }

    /// Parse a dialgen code such as `"1TW"`.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let speed = chars.next()?.to_digit(10)?;
        let direction = Direction::from_code(chars.next()?)?;
        let difficulty = Difficulty::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(speed as u8, direction, difficulty))
    }
}

/// A ship chassis of one faction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    pub base: CardBase,

    /// Faction short id.
    pub faction: String,

    /// Base size (Small, Medium, Large, Huge).
    pub size: Option<String>,

    pub dial: Vec<Maneuver>,

    pub stats: Vec<Stat>,

    pub actions: Vec<ActionSpec>,

    pub slots: Vec<String>,

    pub standard_loadout_only: bool,

    /// Pilots flying this chassis, by pilot short id.
    pub pilots: IndexMap<String, CardId>,
}

impl Ship {
    /// Create a ship with no stats, dial or pilots.
    pub fn new(base: CardBase, faction: impl Into<String>) -> Self {
        Self {
            base,
            faction: faction.into(),
            size: None,
            dial: Vec::new(),
            stats: Vec::new(),
            actions: Vec::new(),
            slots: Vec::new(),
            standard_loadout_only: false,
            pilots: IndexMap::new(),
        }
    }

    /// Unique key: `{xws}%{name}-{faction}-ship`.
    #[must_use]
    pub fn unique_key(&self) -> String {
        format!("{}-{}-ship", self.base.key_prefix(), self.faction)
    }

    /// Set the base size (builder pattern).
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Add a stat block entry (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, stat: Stat) -> Self {
        self.stats.push(stat);
        self
    }

    /// Add a dial entry (builder pattern).
    #[must_use]
    pub fn with_maneuver(mut self, maneuver: Maneuver) -> Self {
        self.dial.push(maneuver);
        self
    }

    /// Value of the first stat of `kind`.
    #[must_use]
    pub fn stat(&self, kind: StatType) -> Option<i64> {
        self.stats.iter().find(|s| s.kind == kind).map(|s| s.value)
    }

    /// Speeds present on the dial, highest first.
    #[must_use]
    pub fn speeds(&self) -> Vec<u8> {
        let mut speeds: Vec<u8> = self.dial.iter().map(|m| m.speed).collect();
        speeds.sort_unstable_by(|a, b| b.cmp(a));
        speeds.dedup();
        speeds
    }

    /// Dial entry at `speed` in the given column.
    #[must_use]
    pub fn maneuver(&self, speed: u8, direction: Direction) -> Option<&Maneuver> {
        self.dial
            .iter()
            .find(|m| m.speed == speed && m.direction == direction)
    }

    /// Does any dial entry use this column?
    #[must_use]
    pub fn uses_column(&self, direction: Direction) -> bool {
        self.dial.iter().any(|m| {
            m.direction == direction
                || (direction == Direction::Straight && m.direction == Direction::Stationary)
        })
    }
}
