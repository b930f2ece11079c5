//! `*Restrictions: ...*` lines.

use super::markup::{iconify, italics};
use super::stats::action_token;
use crate::cards::{CardIndex, RestrictionGroup};

/// Short faction labels used in restriction lines.
const FACTION_LABELS: [(&str, &str); 7] = [
    ("galacticempire", "Imperial"),
    ("rebelalliance", "Rebel"),
    ("scumandvillainy", "Scum"),
    ("separatistalliance", "Separatist"),
    ("galacticrepublic", "Republic"),
    ("firstorder", "First Order"),
    ("resistance", "Resistance"),
];

/// Short label for a faction, else its display name, else its short id.
fn faction_label(xws: &str, index: &CardIndex) -> String {
    FACTION_LABELS
        .iter()
        .find(|(id, _)| *id == xws)
        .map(|(_, label)| (*label).to_string())
        .or_else(|| index.faction(xws).map(|faction| faction.name.clone()))
        .unwrap_or_else(|| xws.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Clauses of one group, in display order.
fn clauses(group: &RestrictionGroup, index: &CardIndex) -> Vec<String> {
    let mut ors = Vec::new();
    if let Some(action) = &group.action {
        ors.push(action_token(action));
    }
    ors.extend(group.factions.iter().map(|xws| faction_label(xws, index)));
    // Ships sharing a short id across factions share a name too.
    ors.extend(group.ships.iter().map(|xws| {
        index
            .ships(xws)
            .first()
            .map_or_else(|| xws.clone(), |ship| ship.base.name.clone())
    }));
    if !group.sizes.is_empty() {
        ors.push(format!("{} ship", group.sizes.join(" or ")));
    }
    if !group.names.is_empty() {
        ors.push(format!("squad including {}", group.names.join(" or ")));
    }
    ors.extend(group.arcs.iter().map(|arc| iconify(arc)));
    if group.solitary {
        ors.push("Solitary".to_string());
    }
    if group.non_limited {
        ors.push("Non-Limited".to_string());
    }
    if !group.equipped.is_empty() {
        let slots: String = group.equipped.iter().map(|slot| iconify(slot)).collect();
        ors.push(format!("Equipped {slots}"));
    }
    ors.extend(group.force_side.iter().map(|side| format!("{} side", capitalize(side))));
    if group.standardized {
        ors.push("standardized".to_string());
    }
    ors.extend(group.ship_ability.iter().map(|ability| title_case(ability)));
    ors.extend(group.keywords.iter().cloned());
    ors
}

/// Restriction line for a card, or an empty string when it has none.
///
/// Clauses inside a group are alternatives (` or `); groups must all hold
/// and are joined with `, `.
#[must_use]
pub fn restrictions_line(groups: &[RestrictionGroup], index: &CardIndex) -> String {
    let ands: Vec<String> = groups
        .iter()
        .map(|group| clauses(group, index))
        .filter(|ors| !ors.is_empty())
        .map(|ors| ors.join(" or "))
        .collect();
    if ands.is_empty() {
        return String::new();
    }
    italics(&format!("Restrictions: {}", ands.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ActionSpec;

    #[test]
    fn test_empty() {
        assert_eq!(restrictions_line(&[], &CardIndex::new()), "");
        assert_eq!(restrictions_line(&[RestrictionGroup::default()], &CardIndex::new()), "");
    }

    #[test]
    fn test_groups_and_clauses() {
        let index = CardIndex::new();
        let groups = vec![
            RestrictionGroup::default().with_sizes(["Small", "Medium"]),
            RestrictionGroup {
                action: Some(ActionSpec::new("Barrel Roll").with_difficulty("Red")),
                solitary: true,
                ..RestrictionGroup::default()
            },
        ];
        assert_eq!(
            restrictions_line(&groups, &index),
            "*Restrictions: Small or Medium ship, {redbarrelroll} or Solitary*"
        );
    }

    #[test]
    fn test_unknown_factions_and_ships_fall_back_to_ids() {
        let group = RestrictionGroup {
            ships: vec!["t65xwing".into()],
            ..RestrictionGroup::default().with_factions(["mandalorianclans"])
        };
        assert_eq!(
            restrictions_line(&[group], &CardIndex::new()),
            "*Restrictions: mandalorianclans or t65xwing*"
        );
    }

    #[test]
    fn test_factions_use_short_labels() {
        let group = RestrictionGroup::default().with_factions([
            "rebelalliance",
            "galacticempire",
            "scumandvillainy",
            "separatistalliance",
            "firstorder",
        ]);
        assert_eq!(
            restrictions_line(&[group], &CardIndex::new()),
            "*Restrictions: Rebel or Imperial or Scum or Separatist or First Order*"
        );
    }

    #[test]
    fn test_misc_clauses() {
        let group = RestrictionGroup {
            names: vec!["Han Solo".into(), "Chewbacca".into()],
            arcs: vec!["Rear Arc".into()],
            equipped: vec!["Crew".into(), "Gunner".into()],
            force_side: vec!["dark".into()],
            ship_ability: vec!["tail gun".into()],
            keywords: vec!["Droid".into()],
            standardized: true,
            non_limited: true,
            ..RestrictionGroup::default()
        };
        assert_eq!(
            restrictions_line(&[group], &CardIndex::new()),
            "*Restrictions: squad including Han Solo or Chewbacca or {reararc} or Non-Limited \
             or Equipped {crew}{gunner} or Dark side or standardized or Tail Gun or Droid*"
        );
    }
}
