//! Squad lists to text.
//!
//! The first line is the squad title; every pilot gets one more line.
//! Costs come from the index, never from the document, and unknown cards
//! are marked on their own line without stopping the rest of the list.

use tracing::warn;

use super::document::{SquadDocument, SquadPilot};
use super::legality::LegalityTracker;
use super::link::display_link;
use crate::cards::{CardIndex, Legality};
use crate::core::error::{ListError, UnrecognizedCardError};
use crate::render::markup::{bold, iconify, italics, link};
use crate::render::{cost_or_zero, pilot_line, RenderContext};

/// A rendered squad and the figures behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquadSummary {
    /// Title line first, then one line per pilot.
    pub lines: Vec<String>,
    pub total: i64,
    pub legality: Legality,
    /// Entries that could not be resolved, in list order.
    pub unrecognized: Vec<UnrecognizedCardError>,
}

/// Renders XWS squad documents against one card index.
#[derive(Clone, Debug)]
pub struct ListParser<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> ListParser<'a> {
    #[must_use]
    pub fn new(index: &'a CardIndex) -> Self {
        Self {
            ctx: RenderContext::new(index),
        }
    }

    #[must_use]
    pub fn with_context(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Decode `json` and render it. Nothing is rendered if decoding fails.
    pub fn parse(&self, json: &str) -> Result<Vec<String>, ListError> {
        let squad = SquadDocument::from_json(json)?;
        Ok(self.summarize(&squad, None).lines)
    }

    /// Render a decoded squad. `url` is where the squad came from, used
    /// when the document has no vendor link of its own.
    #[must_use]
    pub fn summarize(&self, squad: &SquadDocument, url: Option<&str>) -> SquadSummary {
        if squad.vendor.len() > 1 {
            warn!(vendors = ?squad.vendor.keys().collect::<Vec<_>>(), "more than one vendor found");
        }

        let mut legality = LegalityTracker::new();
        let mut unrecognized = Vec::new();
        let mut lines = vec![String::new()];
        let mut total = 0;

        for entry in &squad.pilots {
            match self.pilot_entry(entry, &squad.faction, &mut legality, &mut unrecognized) {
                Some((line, points)) => {
                    lines.push(line);
                    total += points;
                }
                None => {
                    let xws = entry.xws();
                    lines.push(format!(
                        "{} {}",
                        iconify("question").repeat(2),
                        italics(&format!("Unrecognized Pilot: {xws}"))
                    ));
                    unrecognized.push(UnrecognizedCardError::Pilot(xws.to_string()));
                }
            }
        }

        lines[0] = self.title(squad, url, total, legality.current());
        SquadSummary {
            lines,
            total,
            legality: legality.current(),
            unrecognized,
        }
    }

    fn title(&self, squad: &SquadDocument, url: Option<&str>, total: i64, legality: Legality) -> String {
        let name = squad.display_name();
        let name = match squad.vendor_link().or(url) {
            Some(url) => link(&display_link(url), name, None),
            None => name.to_string(),
        };
        let mut title = format!(
            "{} {} {}",
            iconify(&squad.faction),
            bold(&name),
            bold(&format!("[{total}]"))
        );
        if legality != Legality::Banned {
            title.push(' ');
            title.push_str(&bold(&format!("[{legality}]")));
        }
        title
    }

    /// Line and points for one pilot, or `None` if the pilot is unknown.
    fn pilot_entry(
        &self,
        entry: &SquadPilot,
        faction: &str,
        legality: &mut LegalityTracker,
        unrecognized: &mut Vec<UnrecognizedCardError>,
    ) -> Option<(String, i64)> {
        let index = self.ctx.index;
        let pilot = index.pilot(entry.xws(), Some(faction))?;
        let ship = index.ship_of(pilot);
        legality.update(pilot.base.legality);

        let mut points = pilot.points();
        let mut upgrades = Vec::new();
        for xws in entry.upgrade_ids() {
            let Some(upgrade) = index.upgrade(xws) else {
                upgrades.push(bold("Unrecognized Upgrade"));
                unrecognized.push(UnrecognizedCardError::Upgrade(xws.to_string()));
                continue;
            };
            legality.update(upgrade.base.legality);
            let cost = match ship {
                Some(ship) => cost_or_zero(xws, &upgrade.base.cost, pilot, ship),
                None => upgrade.base.cost.fixed_value().unwrap_or(0),
            };
            upgrades.push(format!("{}({cost})", self.ctx.name_link(&upgrade.base)));
            points += cost;
        }

        let mut line = pilot_line(pilot, &self.ctx);
        if !upgrades.is_empty() {
            line.push_str(": ");
            line.push_str(&upgrades.join(", "));
        }
        line.push(' ');
        line.push_str(&bold(&format!("[{points}]")));
        Some((line, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawCatalog;

    fn index() -> CardIndex {
        let raw: RawCatalog = serde_json::from_value(serde_json::json!({
            "version": "1.0.0",
            "factions": [
                {"name": "Rebel Alliance", "xws": "rebelalliance"},
                {"name": "Scum and Villainy", "xws": "scumandvillainy"}
            ],
            "stats": [], "actions": [], "damage_decks": [], "conditions": [],
            "ships": [
                {"faction": "rebelalliance", "ships": [{
                    "name": "T-65 X-wing", "xws": "t65xwing", "standard": true,
                    "pilots": [{"name": "Wedge Antilles", "xws": "wedgeantilles",
                                "initiative": 4, "cost": 45, "standard": true}]
                }]},
                {"faction": "scumandvillainy", "ships": [{
                    "name": "Z-95 Headhunter", "xws": "z95af4headhunter",
                    "pilots": [{"name": "Wedge Antilles", "xws": "wedgeantilles",
                                "initiative": 4, "cost": 30, "epic": true}]
                }]}
            ],
            "upgrades": [{"document": "talent.json", "upgrades": [
                {"name": "Outmaneuver", "xws": "outmaneuver", "standard": true,
                 "cost": {"variable": "initiative", "values": {"1": 3, "4": 6}},
                 "sides": [{"title": "Outmaneuver", "type": "Talent", "slots": ["Talent"]}]},
                {"name": "Hyperspace Tracker", "xws": "hyperspacetracker", "wildspace": true,
                 "cost": {"variable": "hyperdrive", "values": {"1": 3}},
                 "sides": [{"title": "Hyperspace Tracker", "type": "Crew", "slots": ["Crew"]}]},
                {"name": "Contraband Cybernetics", "xws": "contrabandcybernetics",
                 "cost": {"value": 5},
                 "sides": [{"title": "Contraband Cybernetics", "type": "Illicit", "slots": ["Illicit"]}]}
            ]}]
        }))
        .unwrap();
        CardIndex::build(raw).unwrap()
    }

    #[test]
    fn test_title_and_totals() {
        let index = index();
        let lines = ListParser::new(&index)
            .parse(
                r#"{"faction": "rebelalliance", "name": "Red Squadron",
                    "pilots": [{"id": "wedgeantilles", "upgrades": {"talent": ["outmaneuver"]}}]}"#,
            )
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "{rebelalliance} **Red Squadron** **[51]** **[Standard]**");
        assert!(lines[1].starts_with("{t65xwing}{initiative4} [Wedge Antilles]("));
        assert!(lines[1].ends_with(" [45]: [Outmaneuver](https://xwingtmgwiki.com/Outmaneuver)(6) **[51]**"));
    }

    #[test]
    fn test_faction_picks_pilot() {
        let index = index();
        let squad = SquadDocument::from_json(
            r#"{"faction": "scumandvillainy", "pilots": [{"id": "wedgeantilles"}]}"#,
        )
        .unwrap();
        let summary = ListParser::new(&index).summarize(&squad, None);
        assert_eq!(summary.total, 30);
        assert_eq!(summary.legality, Legality::Epic);
        assert!(summary.lines[1].starts_with("{z95af4headhunter}"));
    }

    #[test]
    fn test_unrecognized_cards() {
        let index = index();
        let squad = SquadDocument::from_json(
            r#"{"faction": "rebelalliance", "pilots": [
                {"id": "nobody"},
                {"id": "wedgeantilles", "upgrades": {"crew": ["ghost", "hyperspacetracker"]}}
            ]}"#,
        )
        .unwrap();
        let summary = ListParser::new(&index).summarize(&squad, Some("https://yasb.app/?f=x"));
        assert_eq!(summary.lines[1], "{question}{question} *Unrecognized Pilot: nobody*");
        assert!(summary.lines[2].contains(": **Unrecognized Upgrade**, [Hyperspace Tracker]("));
        assert!(summary.lines[2].ends_with("(0) **[45]**"));
        assert_eq!(summary.total, 45);
        assert_eq!(summary.legality, Legality::Wildspace);
        assert_eq!(
            summary.unrecognized,
            vec![
                UnrecognizedCardError::Pilot("nobody".into()),
                UnrecognizedCardError::Upgrade("ghost".into()),
            ]
        );
        assert_eq!(
            summary.lines[0],
            "{rebelalliance} **[Nameless Squadron](https://yasb.app/?f=x)** **[45]** **[Wild Space]**"
        );
    }

    #[test]
    fn test_empty_squad_is_standard() {
        let index = index();
        let squad = SquadDocument::from_json(
            r#"{"faction": "rebelalliance", "name": "Empty", "pilots": []}"#,
        )
        .unwrap();
        let summary = ListParser::new(&index).summarize(&squad, None);
        assert_eq!(summary.lines, vec!["{rebelalliance} **Empty** **[0]** **[Standard]**"]);
    }

    #[test]
    fn test_banned_title_has_no_tag() {
        let index = index();
        let epic = SquadDocument::from_json(
            r#"{"faction": "scumandvillainy", "pilots": [{"id": "wedgeantilles",
                "upgrades": {"talent": ["outmaneuver"]}}]}"#,
        )
        .unwrap();
        let summary = ListParser::new(&index).summarize(&epic, None);
        assert_eq!(summary.legality, Legality::Epic);
        assert!(summary.lines[0].ends_with("**[36]** **[Epic]**"));

        let banned = SquadDocument::from_json(
            r#"{"faction": "scumandvillainy", "pilots": [{"id": "wedgeantilles",
                "upgrades": {"talent": ["outmaneuver"], "illicit": ["contrabandcybernetics"]}}]}"#,
        )
        .unwrap();
        let summary = ListParser::new(&index).summarize(&banned, None);
        assert_eq!(summary.legality, Legality::Banned);
        assert!(summary.lines[0].ends_with("**[41]**"));
    }

    #[test]
    fn test_decode_failure_yields_no_lines() {
        let index = index();
        assert!(matches!(
            ListParser::new(&index).parse("{\"name\": 3}"),
            Err(ListError::Decode(_))
        ));
    }
}
