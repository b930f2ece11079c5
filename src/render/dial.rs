//! Maneuver dial rendering.
//!
//! One row per speed, highest first. Columns follow the canonical
//! template order, and a column is shown only if some speed uses it. At
//! speed 0 the straight column holds the stationary maneuver.

use smallvec::SmallVec;

use super::markup::iconify;
use crate::cards::{Direction, Maneuver, Ship};

fn maneuver_icon(maneuver: &Maneuver) -> String {
    iconify(&format!(
        "{}{}",
        maneuver.difficulty.icon_prefix(),
        maneuver.direction.icon()
    ))
}

/// Dial rows, highest speed first: `` `3` {straight}{redkturn} ``.
#[must_use]
pub fn dial_rows(ship: &Ship) -> Vec<String> {
    let columns: SmallVec<[Direction; 13]> = Direction::CANONICAL
        .into_iter()
        .filter(|&direction| ship.uses_column(direction))
        .collect();
    let blank = iconify("blank");

    ship.speeds()
        .into_iter()
        .map(|speed| {
            let mut row = format!("`{speed}` ");
            for &column in &columns {
                let direction = if speed == 0 && column == Direction::Straight {
                    Direction::Stationary
                } else {
                    column
                };
                match ship.maneuver(speed, direction) {
                    Some(maneuver) => row.push_str(&maneuver_icon(maneuver)),
                    None => row.push_str(&blank),
                }
            }
            row
        })
        .collect()
}
