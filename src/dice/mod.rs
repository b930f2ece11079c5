//! Attack and defense dice roller.
//!
//! Rolls use a `DiceRng`, so seeded rolls are reproducible.

pub mod die;
pub mod roll;

pub use die::{Die, DieKind, Face};
pub use roll::{answer, roll_numeric, roll_scenario, DiceRoll, MAX_DICE, SCENARIOS, SYNTAX};
