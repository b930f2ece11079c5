//! Restriction clauses.
//!
//! A card carries a list of `RestrictionGroup`s. Every group must be met
//! (AND); inside a group any one clause is enough (OR).

use serde::{Deserialize, Serialize};

use super::attributes::ActionSpec;

/// One OR-group of restriction clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictionGroup {
    /// Ship must have this action on its bar.
    pub action: Option<ActionSpec>,

    /// Faction short ids.
    pub factions: Vec<String>,

    /// Ship short ids.
    pub ships: Vec<String>,

    /// Base sizes (Small, Medium, ...).
    pub sizes: Vec<String>,

    /// Squad must include a card with one of these names.
    pub names: Vec<String>,

    /// Ship must have one of these arcs.
    pub arcs: Vec<String>,

    pub solitary: bool,

    #[serde(rename = "non-limited")]
    pub non_limited: bool,

    /// Ship must have these slots equipped.
    pub equipped: Vec<String>,

    /// Pilot must be on one of these force sides.
    pub force_side: Vec<String>,

    pub standardized: bool,

    /// Ship must have one of these ship abilities.
    #[serde(rename = "shipAbility")]
    pub ship_ability: Vec<String>,

    pub keywords: Vec<String>,
}

impl RestrictionGroup {
    /// A group with no clauses at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Restrict to factions (builder pattern).
    #[must_use]
    pub fn with_factions(mut self, factions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.factions = factions.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to base sizes (builder pattern).
    #[must_use]
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_groups() {
        let groups: Vec<RestrictionGroup> = serde_json::from_str(
            r#"[
                {"factions": ["rebelalliance", "resistance"]},
                {"sizes": ["Small"], "non-limited": true},
                {"force_side": ["light"], "shipAbility": ["Tail Gun"]}
            ]"#,
        )
        .unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].factions, vec!["rebelalliance", "resistance"]);
        assert!(groups[1].non_limited);
        assert_eq!(groups[2].ship_ability, vec!["Tail Gun"]);
        assert!(groups.iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn test_empty_group() {
        assert!(RestrictionGroup::default().is_empty());
        assert!(!RestrictionGroup::default().with_sizes(["Large"]).is_empty());
    }
}
