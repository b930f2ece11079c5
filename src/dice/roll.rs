//! Dice queries: "3 red", "2 green", "d10", "scenario".

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use super::die::{Die, DieKind, Face};
use crate::core::error::RollError;
use crate::core::rng::DiceRng;

/// Most dice one roll may contain.
pub const MAX_DICE: usize = 10;

/// Scenarios `roll_scenario` picks from.
pub const SCENARIOS: [&str; 9] = [
    "Probing Problem",
    "Sabotage",
    "Escort",
    "VIP",
    "Emplacements",
    "Holocron",
    "Contraband",
    "Hyperspace Telemetry",
    "Black Box",
];

/// Help text for the dice query syntax.
pub const SYNTAX: [&str; 3] = [
    "To roll dice, give the number and color of dice, e.g. `3 red` or `2 green`.",
    "Attack dice are red (or `attack`), defense dice are green (or `defense`).",
    "You can also roll a numbered die with `d10` or pick a scenario with `scenario`.",
];

static COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+)\b").expect("count pattern compiles"));

static ATTACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(red|attack|atk)\b").expect("attack pattern compiles"));

static DEFENSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(green|defen[cs]e|def)\b").expect("defense pattern compiles")
});

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bd(\d+)\b").expect("numeric pattern compiles"));

static SCENARIO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(scenario|mission)\b").expect("scenario pattern compiles"));

static HELP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(syntax|help)\b").expect("help pattern compiles"));

/// A rolled set of dice of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceRoll {
    kind: DieKind,
    dice: SmallVec<[Die; MAX_DICE]>,
}

impl DiceRoll {
    /// Roll `count` dice. Between 1 and `MAX_DICE` dice may be rolled.
    pub fn new(kind: DieKind, count: usize, rng: &mut DiceRng) -> Result<Self, RollError> {
        if count == 0 || count > MAX_DICE {
            return Err(RollError::TooMany {
                requested: count,
                max: MAX_DICE,
            });
        }
        let dice = (0..count).map(|_| Die::roll(kind, rng)).collect();
        Ok(Self { kind, dice })
    }

    /// Work out how many dice of which kind a query asks for.
    pub fn parse(query: &str) -> Result<(usize, DieKind), RollError> {
        let count = COUNT
            .captures(query)
            .and_then(|caps| caps[1].parse::<usize>().ok())
            .ok_or_else(|| RollError::MissingCount(query.to_string()))?;
        let kind = match (ATTACK.is_match(query), DEFENSE.is_match(query)) {
            (true, false) => DieKind::Attack,
            (false, true) => DieKind::Defense,
            (true, true) => return Err(RollError::MixedColors(query.to_string())),
            (false, false) => return Err(RollError::MissingColor(query.to_string())),
        };
        Ok((count, kind))
    }

    /// Parse a query and roll it.
    pub fn roll(query: &str, rng: &mut DiceRng) -> Result<Self, RollError> {
        let (count, kind) = Self::parse(query)?;
        Self::new(kind, count, rng)
    }

    #[must_use]
    pub const fn kind(&self) -> DieKind {
        self.kind
    }

    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn dice_mut(&mut self) -> &mut [Die] {
        &mut self.dice
    }

    /// Number of dice showing `face`.
    #[must_use]
    pub fn count(&self, face: Face) -> usize {
        self.dice.iter().filter(|die| die.face() == face).count()
    }

    /// Spend focus on every die. Returns how many changed.
    pub fn focus_all(&mut self) -> usize {
        self.dice
            .iter_mut()
            .map(Die::focus)
            .filter(|&changed| changed)
            .count()
    }

    /// Reroll up to `limit` dice that did not come up positive.
    pub fn reroll(&mut self, limit: usize, rng: &mut DiceRng) -> usize {
        let mut rerolled = 0;
        for die in self.dice.iter_mut() {
            if rerolled == limit {
                break;
            }
            if die.reroll(rng) {
                rerolled += 1;
            }
        }
        rerolled
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for die in &self.dice {
            write!(f, "{die}")?;
        }
        Ok(())
    }
}

/// Roll the numbered die in a query such as `d10`. Returns `1..=N`.
pub fn roll_numeric(query: &str, rng: &mut DiceRng) -> Result<u32, RollError> {
    let sides = NUMERIC
        .captures(query)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .ok_or_else(|| RollError::MissingCount(query.to_string()))?;
    if sides == 0 {
        return Err(RollError::NoSides);
    }
    Ok(rng.gen_range_inclusive(1, sides))
}

/// Pick a scenario at random.
pub fn roll_scenario(rng: &mut DiceRng) -> &'static str {
    rng.choose(&SCENARIOS).copied().unwrap_or(SCENARIOS[0])
}

/// Answer any dice query, one output line per entry.
pub fn answer(query: &str, rng: &mut DiceRng) -> Result<Vec<String>, RollError> {
    if HELP.is_match(query) {
        Ok(SYNTAX.iter().map(|line| (*line).to_string()).collect())
    } else if NUMERIC.is_match(query) {
        Ok(vec![roll_numeric(query, rng)?.to_string()])
    } else if SCENARIO.is_match(query) {
        Ok(vec![roll_scenario(rng).to_string()])
    } else {
        Ok(vec![DiceRoll::roll(query, rng)?.to_string()])
    }
}
