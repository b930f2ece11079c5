//! Stat, action, slot and grant icon strings.

use smallvec::SmallVec;

use super::markup::iconify;
use crate::cards::{ActionSpec, AttackSpec, ChargeStat, Grant, Pilot, Ship, Side, Stat, StatType};

/// Icon pair for one stat: coloured stat icon, then the value icon.
///
/// `{redfrontarc}{attack3}`, `{blueshield}{shield2}`,
/// `{yellowcharge}{charge2recurring}`.
#[must_use]
pub fn stat_token(stat: &Stat) -> String {
    let slug = stat.kind.slug();
    let mut out = match stat.kind {
        StatType::Attack => iconify(&format!("red{}", stat.arc.as_deref().unwrap_or(""))),
        kind => iconify(&format!("{}{slug}", kind.color())),
    };
    let plus = if stat.plus { "plus" } else { "" };
    let recurring = match stat.recovers {
        0 => String::new(),
        1 => "recurring".to_string(),
        n if n < 0 => "losing".to_string(),
        n => format!("recurring{n}"),
    };
    out.push_str(&iconify(&format!("{slug}{plus}{}{recurring}", stat.value)));
    out
}

/// A charge or force pool as a stat token.
#[must_use]
pub fn charge_token(charge: &ChargeStat, force: bool, plus: bool) -> String {
    let kind = if force {
        StatType::ForceCharge
    } else {
        StatType::Charge
    };
    stat_token(&charge.as_stat(kind, plus))
}

/// `{redboost}`, `{focus}{linked}{redboost}`.
#[must_use]
pub fn action_token(action: &ActionSpec) -> String {
    let difficulty = if action.is_white() {
        ""
    } else {
        action.difficulty.as_str()
    };
    let mut out = iconify(&format!("{difficulty}{}", action.kind));
    if let Some(linked) = &action.linked {
        out.push_str(&iconify("linked"));
        out.push_str(&action_token(linked));
    }
    out
}

/// Action bar, pipe separated.
#[must_use]
pub fn actions_line(actions: &[ActionSpec]) -> String {
    actions
        .iter()
        .map(action_token)
        .collect::<SmallVec<[String; 6]>>()
        .join("|")
}

#[must_use]
pub fn slots_line(slots: &[String]) -> String {
    slots.iter().map(|slot| iconify(slot)).collect()
}

/// Summary of what an upgrade side adds to its ship. Slot grants are
/// shown by the slot bar, so they are skipped here.
#[must_use]
pub fn grants_token(grants: &[Grant]) -> Option<String> {
    let mut out = String::new();
    for grant in grants {
        match grant {
            Grant::Action { value, amount } => {
                let token = action_token(value);
                for _ in 0..(*amount).max(0) {
                    out.push_str(&token);
                }
            }
            Grant::Stat { value, amount } => {
                let symbol = if *amount < 0 { "minus" } else { "plus" };
                out.push_str(&iconify(&format!("{}{}", value.color(), value.slug())));
                out.push_str(&iconify(&format!(
                    "{}{symbol}{}",
                    value.slug(),
                    amount.unsigned_abs()
                )));
            }
            Grant::Slot { .. } | Grant::Other => {}
        }
    }
    (!out.is_empty()).then_some(out)
}

/// `{redfrontarc}{attack3}{redrangebonusindicator}2-3`.
#[must_use]
pub fn attack_token(attack: &AttackSpec) -> String {
    let ranges = if attack.minrange == attack.maxrange {
        attack.minrange.to_string()
    } else {
        format!("{}-{}", attack.minrange, attack.maxrange)
    };
    let ordnance = if attack.ordnance {
        iconify("redrangebonusindicator")
    } else {
        String::new()
    };
    format!(
        "{}{}{ordnance}{ranges}",
        iconify(&format!("red{}", attack.arc)),
        iconify(&format!("attack{}", attack.value))
    )
}

fn trailer(
    attack: Option<&AttackSpec>,
    charges: Option<&ChargeStat>,
    force: Option<&ChargeStat>,
    grants: &[Grant],
) -> String {
    let parts: SmallVec<[String; 4]> = [
        attack.map(attack_token),
        charges.map(|c| charge_token(c, false, false)),
        force.map(|f| charge_token(f, true, true)),
        grants_token(grants),
    ]
    .into_iter()
    .flatten()
    .collect();
    parts.join(" | ")
}

/// Last line of an upgrade side: attack, charges, force and grants.
#[must_use]
pub fn side_trailer(side: &Side) -> String {
    trailer(
        side.attack.as_ref(),
        side.charges.as_ref(),
        side.force.as_ref(),
        &side.grants,
    )
}

/// Last line of a pilot card: its charges and force, pipe separated.
#[must_use]
pub fn pilot_trailer(pilot: &Pilot) -> String {
    trailer(None, pilot.charges.as_ref(), pilot.force.as_ref(), &[])
}

/// Stat block, action bar and slot bar of a ship, or of a pilot flying it.
///
/// Pilots add initiative, engagement (when 0 or 1), charges and force to
/// the stat line, may override the action bar, and show their own slots
/// instead of the chassis slots. Ends with a newline.
#[must_use]
pub fn ship_stats(ship: &Ship, pilot: Option<&Pilot>) -> String {
    let mut stats = iconify(&ship.faction);
    if let Some(pilot) = pilot {
        stats.push_str(&iconify(&format!("initiative{}", pilot.initiative)));
        if let Some(engagement @ (0 | 1)) = pilot.engagement {
            stats.push_str(&iconify(&format!("engagement{engagement}")));
        }
    }
    for stat in &ship.stats {
        stats.push_str(&stat_token(stat));
    }
    if let Some(pilot) = pilot {
        if let Some(charges) = &pilot.charges {
            stats.push_str(&charge_token(charges, false, false));
        }
        if let Some(force) = &pilot.force {
            stats.push_str(&charge_token(force, true, false));
        }
    }

    let mut lines: SmallVec<[String; 3]> = SmallVec::new();
    lines.push(stats);

    let actions = pilot
        .and_then(|p| p.ship_actions.as_deref())
        .unwrap_or(ship.actions.as_slice());
    if !actions.is_empty() {
        lines.push(actions_line(actions));
    }

    let slots = match pilot {
        Some(pilot) => &pilot.slots,
        None => &ship.slots,
    };
    if !slots.is_empty() {
        lines.push(slots_line(slots));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardBase, CardId};

    #[test]
    fn test_stat_tokens() {
        let mut attack = Stat::new(StatType::Attack, 3);
        attack.arc = Some("Front Arc".into());
        assert_eq!(stat_token(&attack), "{redfrontarc}{attack3}");

        assert_eq!(stat_token(&Stat::new(StatType::Shield, 2)), "{blueshield}{shield2}");

        let mut charge = Stat::new(StatType::Charge, 2);
        charge.recovers = 1;
        assert_eq!(stat_token(&charge), "{yellowcharge}{charge2recurring}");
        charge.recovers = 2;
        assert_eq!(stat_token(&charge), "{yellowcharge}{charge2recurring2}");
        charge.recovers = -1;
        assert_eq!(stat_token(&charge), "{yellowcharge}{charge2losing}");

        let mut hull = Stat::new(StatType::Hull, 4);
        hull.plus = true;
        assert_eq!(stat_token(&hull), "{yellowhull}{hullplus4}");
    }

    #[test]
    fn test_force_token() {
        let force = ChargeStat {
            value: 2,
            recovers: 1,
            side: vec!["light".into()],
        };
        assert_eq!(
            charge_token(&force, true, true),
            "{purpleforcecharge}{forcechargeplus2recurring}"
        );
    }

    #[test]
    fn test_action_tokens() {
        let action = ActionSpec::new("Focus").linked_to(ActionSpec::new("Boost").with_difficulty("Red"));
        assert_eq!(action_token(&action), "{focus}{linked}{redboost}");
        assert_eq!(
            actions_line(&[ActionSpec::new("Lock"), ActionSpec::new("Barrel Roll")]),
            "{lock}|{barrelroll}"
        );
    }

    #[test]
    fn test_grants() {
        let grants = vec![
            Grant::Slot {
                value: "Crew".into(),
                amount: 1,
            },
            Grant::Stat {
                value: StatType::Shield,
                amount: -1,
            },
            Grant::Action {
                value: ActionSpec::new("Calculate"),
                amount: 2,
            },
        ];
        assert_eq!(
            grants_token(&grants).unwrap(),
            "{blueshield}{shieldminus1}{calculate}{calculate}"
        );
        assert_eq!(grants_token(&grants[..1]), None);
    }

    #[test]
    fn test_attack_and_trailer() {
        let mut side = Side::new("Proton Torpedoes", "Torpedo");
        side.attack = Some(AttackSpec {
            arc: "Front Arc".into(),
            value: 4,
            minrange: 2,
            maxrange: 3,
            ordnance: true,
        });
        side.charges = Some(ChargeStat {
            value: 2,
            recovers: 0,
            side: Vec::new(),
        });
        assert_eq!(
            side_trailer(&side),
            "{redfrontarc}{attack4}{redrangebonusindicator}2-3 | {yellowcharge}{charge2}"
        );
        assert_eq!(side_trailer(&Side::new("Plain", "Talent")), "");
    }

    #[test]
    fn test_pilot_trailer() {
        let mut pilot = Pilot::new(CardBase::new("p", "P"), CardId::new(0), "rebelalliance");
        assert_eq!(pilot_trailer(&pilot), "");
        pilot.charges = Some(ChargeStat {
            value: 1,
            recovers: 0,
            side: Vec::new(),
        });
        pilot.force = Some(ChargeStat {
            value: 2,
            recovers: 1,
            side: Vec::new(),
        });
        assert_eq!(
            pilot_trailer(&pilot),
            "{yellowcharge}{charge1} | {purpleforcecharge}{forcechargeplus2recurring}"
        );
    }

    #[test]
    fn test_pilot_overrides_actions() {
        let mut ship = Ship::new(CardBase::new("t65xwing", "T-65 X-wing"), "rebelalliance");
        ship.actions = vec![ActionSpec::new("Focus")];
        ship.slots = vec!["Astromech".into()];
        let mut pilot = Pilot::new(CardBase::new("p", "P"), CardId::new(0), "rebelalliance").with_initiative(3);
        pilot.engagement = Some(1);
        pilot.ship_actions = Some(vec![ActionSpec::new("Calculate")]);
        pilot.slots = vec!["Talent".into()];

        assert_eq!(
            ship_stats(&ship, Some(&pilot)),
            "{rebelalliance}{initiative3}{engagement1}\n{calculate}\n{talent}\n"
        );
        assert_eq!(ship_stats(&ship, None), "{rebelalliance}\n{focus}\n{astromech}\n");
    }
}
