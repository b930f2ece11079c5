//! Point costs, including costs that vary with the equipping pilot.

use tracing::warn;

use crate::cards::{CostSpec, Pilot, Ship, StatType};
use crate::core::error::CostResolutionError;

/// Ship attribute a variable cost can key on.
fn ship_attribute(ship: &Ship, name: &str) -> Option<String> {
    match name {
        "size" => ship.size.clone(),
        "xws" => Some(ship.base.xws.clone()),
        "name" => Some(ship.base.name.clone()),
        "faction" => Some(ship.faction.clone()),
        _ => None,
    }
}

/// Resolve a cost for a card equipped by `pilot` flying `ship`.
///
/// A variable cost's key is looked up on the pilot, then on the ship,
/// then in the ship's stat block. The first source that knows the
/// variable decides the key into the cost table.
pub fn resolve_cost(cost: &CostSpec, pilot: &Pilot, ship: &Ship) -> Result<i64, CostResolutionError> {
    let (variable, values) = match cost {
        CostSpec::Variable { variable, values } => (variable, values),
        fixed => return Ok(fixed.fixed_value().unwrap_or(0)),
    };

    let key = pilot
        .attribute(variable)
        .or_else(|| ship_attribute(ship, variable))
        .or_else(|| {
            StatType::from_name(variable)
                .and_then(|kind| ship.stat(kind))
                .map(|value| value.to_string())
        })
        .ok_or_else(|| CostResolutionError::UnknownVariable(variable.clone()))?;

    values
        .get(&key)
        .copied()
        .ok_or_else(|| CostResolutionError::MissingValue {
            variable: variable.clone(),
            key,
        })
}

/// `resolve_cost`, logging failures and counting them as 0.
#[must_use]
pub fn cost_or_zero(card: &str, cost: &CostSpec, pilot: &Pilot, ship: &Ship) -> i64 {
    resolve_cost(cost, pilot, ship).unwrap_or_else(|err| {
        warn!(card, pilot = %pilot.base.xws, %err, "could not resolve cost");
        0
    })
}

/// Cost as printed in card headers: `[5]`, or `[initiative 3:2/6:4]`.
#[must_use]
pub fn cost_label(cost: &CostSpec) -> String {
    match cost {
        CostSpec::Variable { variable, values } => {
            let table = values
                .iter()
                .map(|(key, value)| format!("{key}:{value}"))
                .collect::<Vec<_>>()
                .join("/");
            format!("[{variable} {table}]")
        }
        fixed => format!("[{}]", fixed.fixed_value().unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardBase, CardId, Stat};

    fn ship() -> Ship {
        Ship::new(CardBase::new("t65xwing", "T-65 X-wing"), "rebelalliance")
            .with_size("Small")
            .with_stat(Stat::new(StatType::Agility, 2))
            .with_stat(Stat::new(StatType::Shield, 2))
    }

    fn pilot(initiative: i64) -> Pilot {
        Pilot::new(CardBase::new("p", "P"), CardId::new(0), "rebelalliance").with_initiative(initiative)
    }

    #[test]
    fn test_fixed_costs() {
        assert_eq!(resolve_cost(&CostSpec::Fixed(5), &pilot(1), &ship()), Ok(5));
        assert_eq!(resolve_cost(&CostSpec::Value { value: 3 }, &pilot(1), &ship()), Ok(3));
    }

    #[test]
    fn test_pilot_attribute() {
        let cost = CostSpec::variable("initiative", [("3", 2), ("6", 4)]);
        assert_eq!(resolve_cost(&cost, &pilot(6), &ship()), Ok(4));
        assert_eq!(resolve_cost(&cost, &pilot(3), &ship()), Ok(2));
    }

    #[test]
    fn test_ship_attribute_and_stat() {
        let by_size = CostSpec::variable("size", [("Small", 1), ("Large", 6)]);
        assert_eq!(resolve_cost(&by_size, &pilot(1), &ship()), Ok(1));

        let by_agility = CostSpec::variable("agility", [("0", 1), ("2", 5)]);
        assert_eq!(resolve_cost(&by_agility, &pilot(1), &ship()), Ok(5));

        let by_shields = CostSpec::variable("shields", [("2", 7)]);
        assert_eq!(resolve_cost(&by_shields, &pilot(1), &ship()), Ok(7));
    }

    #[test]
    fn test_unknown_variable() {
        let cost = CostSpec::variable("hyperdrive", [("1", 2)]);
        assert_eq!(
            resolve_cost(&cost, &pilot(1), &ship()),
            Err(CostResolutionError::UnknownVariable("hyperdrive".into()))
        );
        assert_eq!(cost_or_zero("x", &cost, &pilot(1), &ship()), 0);
    }

    #[test]
    fn test_missing_table_entry() {
        let cost = CostSpec::variable("initiative", [("3", 2), ("6", 4)]);
        assert!(matches!(
            resolve_cost(&cost, &pilot(4), &ship()),
            Err(CostResolutionError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_missing_stat_is_unknown() {
        let cost = CostSpec::variable("hull", [("3", 2)]);
        assert!(matches!(
            resolve_cost(&cost, &pilot(1), &ship()),
            Err(CostResolutionError::UnknownVariable(_))
        ));
    }

    #[test]
    fn test_cost_label() {
        assert_eq!(cost_label(&CostSpec::Fixed(62)), "[62]");
        assert_eq!(
            cost_label(&CostSpec::variable("initiative", [("3", 2), ("6", 4)])),
            "[initiative 3:2/6:4]"
        );
    }
}
