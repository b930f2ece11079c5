//! The card index: every card of one catalog version plus its lookups.
//!
//! `CardIndex::build` turns a `RawCatalog` into typed cards stored in a
//! single arena. Cards point at each other by `CardId`; nothing in the
//! index owns another card. The index is immutable once built and is
//! replaced wholesale when the catalog changes.
//!
//! ## Lookups
//!
//! - unique key → card (exactly one entry per card)
//! - short id → every card with that id, in insertion order
//! - per-kind short id maps for pilots, upgrades, conditions and ships
//! - faction short id → faction record
//! - per-card search text, walked in search order

use std::borrow::Cow;

use indexmap::IndexMap;
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::condition::Condition;
use super::damage::Damage;
use super::definition::{Card, CardBase, CardId, CardKind};
use super::legality::Legality;
use super::pilot::Pilot;
use super::ship::{Maneuver, Ship};
use super::upgrade::{Device, Side, Upgrade};
use crate::catalog::manifest::{
    RawCatalog, RawCondition, RawDamage, RawDevice, RawFaction, RawPilot, RawShip, RawSide,
    RawUpgrade,
};
use crate::core::error::{CatalogError, Result};

/// A playable faction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faction {
    pub xws: String,
    pub name: String,
    pub icon: Option<String>,
}

impl From<RawFaction> for Faction {
    fn from(raw: RawFaction) -> Self {
        Self {
            xws: raw.xws,
            name: raw.name,
            icon: raw.icon,
        }
    }
}

/// Text a card is searched by.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchText {
    /// Name, short id, ability, keywords, nicknames and similar.
    pub composite: String,
    /// Lowercased name, side titles and nicknames.
    pub name: String,
}

/// Immutable index of every card in one catalog version.
#[derive(Clone, Debug, Default)]
pub struct CardIndex {
    version: String,
    cards: Vec<Card>,
    search_texts: Vec<SearchText>,
    search_order: Vec<CardId>,
    by_key: FxHashMap<String, CardId>,
    by_xws: FxHashMap<String, Vec<CardId>>,
    pilots: FxHashMap<String, Vec<CardId>>,
    upgrades: FxHashMap<String, CardId>,
    conditions: FxHashMap<String, CardId>,
    ships: FxHashMap<String, Vec<CardId>>,
    factions: IndexMap<String, Faction>,
    highlighter: Option<Regex>,
}

impl CardIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build typed cards and lookups from raw catalog records.
    ///
    /// Ships come first, each followed by its pilots, then upgrades,
    /// conditions and damage cards. Fails on duplicate unique keys and on
    /// records that cannot be typed.
    ///
    /// ## Example
    ///
    /// ```
    /// use squadron_codex::cards::CardIndex;
    /// use squadron_codex::catalog::RawCatalog;
    ///
    /// let index = CardIndex::build(RawCatalog::default()).unwrap();
    /// assert!(index.is_empty());
    /// ```
    pub fn build(raw: RawCatalog) -> Result<Self> {
        let mut index = Self {
            version: raw.version,
            factions: raw
                .factions
                .into_iter()
                .map(|f| (f.xws.clone(), Faction::from(f)))
                .collect(),
            ..Self::default()
        };

        let mut pilot_ids = Vec::new();
        let mut upgrade_ids = Vec::new();
        let mut condition_ids = Vec::new();
        let mut damage_ids = Vec::new();
        let mut ship_ids = Vec::new();

        for group in raw.ships {
            for raw_ship in group.ships {
                let (ship, pilots) = build_ship(raw_ship, &group.faction, index.next_id())?;
                ship_ids.push(index.insert(Card::Ship(ship))?);
                for pilot in pilots {
                    pilot_ids.push(index.insert(Card::Pilot(pilot))?);
                }
            }
        }

        for group in raw.upgrades {
            debug!(document = %group.document, count = group.upgrades.len(), "indexing upgrades");
            for raw_upgrade in group.upgrades {
                let upgrade = build_upgrade(raw_upgrade)?;
                upgrade_ids.push(index.insert(Card::Upgrade(upgrade))?);
            }
        }

        for raw_condition in raw.conditions {
            let condition = build_condition(raw_condition);
            condition_ids.push(index.insert(Card::Condition(condition))?);
        }

        for deck in raw.damage_decks {
            for raw_damage in deck.cards {
                let damage = build_damage(raw_damage, &deck.deck);
                damage_ids.push(index.insert(Card::Damage(damage))?);
            }
        }

        index.search_order = upgrade_ids
            .into_iter()
            .chain(pilot_ids)
            .chain(condition_ids)
            .chain(damage_ids)
            .chain(ship_ids)
            .collect();
        index.highlighter = index.build_highlighter();

        debug!(
            version = %index.version,
            cards = index.cards.len(),
            "card index built"
        );
        Ok(index)
    }

    fn next_id(&self) -> CardId {
        CardId::new(self.cards.len() as u32)
    }

    /// Add a card, registering it in every lookup.
    fn insert(&mut self, card: Card) -> Result<CardId> {
        let id = self.next_id();
        let key = card.key().to_string();
        if self.by_key.contains_key(&key) {
            return Err(CatalogError::DuplicateKey(key));
        }
        self.by_key.insert(key, id);

        let xws = card.xws().to_string();
        self.by_xws.entry(xws.clone()).or_default().push(id);
        match card.kind() {
            CardKind::Pilot => self.pilots.entry(xws).or_default().push(id),
            CardKind::Ship => self.ships.entry(xws).or_default().push(id),
            CardKind::Upgrade => {
                self.upgrades.entry(xws).or_insert(id);
            }
            CardKind::Condition => {
                self.conditions.entry(xws).or_insert(id);
            }
            CardKind::Damage => {}
        }

        self.search_texts.push(search_text(&card));
        self.cards.push(card);
        Ok(id)
    }

    /// Regex matching every pilot and condition name, longest first.
    fn build_highlighter(&self) -> Option<Regex> {
        let mut names: Vec<&str> = self
            .cards
            .iter()
            .filter(|card| matches!(card.kind(), CardKind::Pilot | CardKind::Condition))
            .map(Card::name)
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return None;
        }
        names.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();
        let pattern = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(%err, "card names will not be highlighted");
                None
            }
        }
    }

    /// Catalog version this index was built from.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// All cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardId::new(i as u32), card))
    }

    /// Cards with their search text, in search order.
    pub fn search_entries(&self) -> impl Iterator<Item = (CardId, &Card, &SearchText)> {
        self.search_order
            .iter()
            .map(move |&id| (id, &self.cards[id.index()], &self.search_texts[id.index()]))
    }

    #[must_use]
    pub fn search_text(&self, id: CardId) -> Option<&SearchText> {
        self.search_texts.get(id.index())
    }

    /// Look up a card by unique key.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&Card> {
        self.by_key.get(key).and_then(|&id| self.get(id))
    }

    /// Every card with this short id, in insertion order.
    pub fn by_xws<'a>(&'a self, xws: &str) -> impl Iterator<Item = &'a Card> + 'a {
        self.by_xws
            .get(xws)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(move |&id| self.get(id))
    }

    /// Look up a pilot by short id, preferring one of `faction`.
    ///
    /// Pilot short ids recur across factions (the same pilot flying for
    /// two sides); without a match in `faction` the first pilot wins.
    #[must_use]
    pub fn pilot(&self, xws: &str, faction: Option<&str>) -> Option<&Pilot> {
        let mut pilots = self
            .pilots
            .get(xws)?
            .iter()
            .filter_map(|&id| self.get(id).and_then(Card::as_pilot));
        match faction {
            Some(faction) => {
                let candidates: Vec<&Pilot> = pilots.collect();
                candidates
                    .iter()
                    .find(|p| p.faction == faction)
                    .or_else(|| candidates.first())
                    .copied()
            }
            None => pilots.next(),
        }
    }

    #[must_use]
    pub fn upgrade(&self, xws: &str) -> Option<&Upgrade> {
        self.upgrades
            .get(xws)
            .and_then(|&id| self.get(id))
            .and_then(Card::as_upgrade)
    }

    #[must_use]
    pub fn condition(&self, xws: &str) -> Option<&Condition> {
        self.conditions
            .get(xws)
            .and_then(|&id| self.get(id))
            .and_then(Card::as_condition)
    }

    /// Ships with this short id. Chassis shared by several factions
    /// return one ship per faction.
    #[must_use]
    pub fn ships(&self, xws: &str) -> Vec<&Ship> {
        self.ships
            .get(xws)
            .map(|ids| {
                ids.iter()
                    .filter_map(|&id| self.get(id).and_then(Card::as_ship))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The chassis a pilot flies.
    #[must_use]
    pub fn ship_of(&self, pilot: &Pilot) -> Option<&Ship> {
        self.get(pilot.ship).and_then(Card::as_ship)
    }

    #[must_use]
    pub fn faction(&self, xws: &str) -> Option<&Faction> {
        self.factions.get(xws)
    }

    pub fn factions(&self) -> impl Iterator<Item = &Faction> {
        self.factions.values()
    }

    /// Bold every known pilot and condition name in `text`.
    #[must_use]
    pub fn highlight_names<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.highlighter {
            Some(re) => re.replace_all(text, "**$0**"),
            None => Cow::Borrowed(text),
        }
    }

    /// A ship's pilots grouped for selection menus.
    ///
    /// Groups named after a pilot-specific ship ability come first, then
    /// `Standard`, `Left-Side Legal` and `Standard Loadout`. Pilots within
    /// a group are ordered by initiative, then cost, highest first. Empty
    /// groups are dropped.
    #[must_use]
    pub fn grouped_pilots(&self, ship: &Ship) -> Vec<(String, Vec<&Pilot>)> {
        let mut by_ability: IndexMap<String, Vec<&Pilot>> = IndexMap::new();
        let mut standard = Vec::new();
        let mut left_side = Vec::new();
        let mut loadout = Vec::new();

        for pilot in ship
            .pilots
            .values()
            .filter_map(|&id| self.get(id).and_then(Card::as_pilot))
        {
            if pilot.is_standard_loadout() {
                loadout.push(pilot);
            } else if pilot.base.xws.contains("-lsl") {
                left_side.push(pilot);
            } else if let Some(ability) = &pilot.ship_ability {
                by_ability.entry(ability.name.clone()).or_default().push(pilot);
            } else {
                standard.push(pilot);
            }
        }

        // Later ability groups are shown ahead of earlier ones.
        by_ability.reverse();
        by_ability
            .into_iter()
            .chain([
                ("Standard".to_string(), standard),
                ("Left-Side Legal".to_string(), left_side),
                ("Standard Loadout".to_string(), loadout),
            ])
            .filter(|(_, pilots)| !pilots.is_empty())
            .map(|(name, mut pilots)| {
                pilots.sort_by_key(|p| std::cmp::Reverse(p.initiative * 100 + p.points()));
                (name, pilots)
            })
            .collect()
    }
}

fn legality(standard: bool, wildspace: bool, epic: bool) -> Legality {
    Legality::from_flags(standard, wildspace, epic)
}

/// Short id for records that carry none.
fn slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

fn build_ship(raw: RawShip, faction: &str, id: CardId) -> Result<(Ship, Vec<Pilot>)> {
    let mut base = CardBase::new(raw.xws, raw.name);
    base.keywords = raw.keywords;
    base.legality = legality(raw.standard, raw.wildspace, raw.epic);

    let dial = raw
        .dial
        .iter()
        .map(|code| {
            Maneuver::parse(code).ok_or_else(|| CatalogError::Malformed {
                xws: base.xws.clone(),
                reason: format!("bad dial code {code:?}"),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut ship = Ship::new(base, faction);
    ship.size = raw.size;
    ship.dial = dial;
    ship.stats = raw.stats;
    ship.actions = raw.actions;
    ship.slots = raw.slots;
    ship.standard_loadout_only = raw.standard_loadout_only;

    let mut pilots = Vec::with_capacity(raw.pilots.len());
    for (offset, raw_pilot) in raw.pilots.into_iter().enumerate() {
        let pilot = build_pilot(raw_pilot, id, faction)?;
        let pilot_id = CardId::new(id.raw() + 1 + offset as u32);
        ship.pilots.insert(pilot.base.xws.clone(), pilot_id);
        pilots.push(pilot);
    }
    ship.base.key = ship.unique_key();
    Ok((ship, pilots))
}

fn build_pilot(raw: RawPilot, ship: CardId, faction: &str) -> Result<Pilot> {
    if raw.sides.is_some() {
        return Err(CatalogError::Malformed {
            xws: raw.xws,
            reason: "pilot cards have a single side".to_string(),
        });
    }
    let mut base = CardBase::new(raw.xws, raw.name);
    base.caption = raw.caption;
    base.limited = raw.limited;
    base.cost = raw.cost;
    base.legality = legality(raw.standard, raw.wildspace, raw.epic);
    base.ability = raw.ability;
    base.text = raw.text;
    base.keywords = raw.keywords;
    base.nicknames = raw.nicknames;
    base.image = raw.image;

    let mut pilot = Pilot::new(base, ship, faction).with_initiative(raw.initiative);
    pilot.engagement = raw.engagement;
    pilot.loadout = raw.loadout;
    pilot.slots = raw.slots;
    pilot.charges = raw.charges;
    pilot.force = raw.force;
    pilot.ship_ability = raw.ship_ability;
    pilot.ship_actions = raw.ship_actions;
    pilot.conditions = raw.conditions;
    pilot.standard_loadout = raw.standard_loadout;
    pilot.base.key = pilot.unique_key();
    Ok(pilot)
}

fn build_side(raw: RawSide) -> Side {
    let device = raw.device.map(build_device);
    Side {
        title: raw.title,
        kind: raw.kind,
        ability: raw.ability,
        text: raw.text,
        slots: raw.slots,
        attack: raw.attack,
        charges: raw.charges,
        force: raw.force,
        grants: raw.grants,
        device,
        conditions: raw.conditions,
        ship_ability: raw.ship_ability,
        image: raw.image,
    }
}

fn build_device(raw: RawDevice) -> Device {
    if raw.kind != "Remote" {
        return Device::Other {
            name: raw.name,
            kind: raw.kind,
            effect: raw.effect,
        };
    }
    let xws = raw.xws.unwrap_or_else(|| slug(&raw.name));
    let mut base = CardBase::new(xws, raw.name.clone());
    base.ability = raw.effect.clone();
    let sides = if raw.sides.is_empty() {
        let mut side = Side::new(raw.name, "Remote");
        side.ability = raw.effect;
        vec![side]
    } else {
        raw.sides.into_iter().map(build_side).collect()
    };
    let mut remote = Upgrade::new(base, sides);
    remote.base.key = remote.unique_key();
    Device::Remote(Box::new(remote))
}

fn build_upgrade(raw: RawUpgrade) -> Result<Upgrade> {
    if raw.sides.is_empty() {
        return Err(CatalogError::Malformed {
            xws: raw.xws,
            reason: "upgrade has no sides".to_string(),
        });
    }
    let mut base = CardBase::new(raw.xws, raw.name);
    base.caption = raw.caption;
    base.limited = raw.limited;
    base.cost = raw.cost;
    base.restrictions = raw.restrictions;
    base.legality = legality(raw.standard, raw.wildspace, raw.epic);
    base.keywords = raw.keywords;
    base.nicknames = raw.nicknames;

    let sides: Vec<Side> = raw.sides.into_iter().map(build_side).collect();
    // Upgrade game text lives on the front face.
    if let Some(front) = sides.first() {
        base.ability = front.ability.clone();
        base.text = front.text.clone();
        base.image = front.image.clone();
    }

    let mut upgrade = Upgrade::new(base, sides);
    upgrade.standard_loadout_only = raw.standard_loadout_only;
    upgrade.base.key = upgrade.unique_key();
    Ok(upgrade)
}

fn build_condition(raw: RawCondition) -> Condition {
    let mut base = CardBase::new(raw.xws, raw.name);
    base.limited = 1;
    base.ability = raw.ability;
    base.text = raw.text;
    base.image = raw.image;
    let mut condition = Condition::new(base);
    condition.base.key = condition.unique_key();
    condition
}

fn build_damage(raw: RawDamage, deck: &str) -> Damage {
    let mut base = CardBase::new(slug(&raw.title), raw.title);
    base.text = raw.text;
    base.image = raw.image;
    let mut damage = Damage::new(base, deck, raw.amount);
    damage.kind = raw.kind;
    damage.base.key = damage.unique_key();
    damage
}

fn push_word(out: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

fn search_text(card: &Card) -> SearchText {
    let base = card.base();
    let mut composite = String::new();
    let mut name = base.name.clone();

    match card {
        Card::Upgrade(upgrade) => {
            push_word(&mut composite, &base.name);
            for nickname in &base.nicknames {
                push_word(&mut composite, nickname);
            }
            push_word(&mut composite, base.caption.as_deref().unwrap_or(""));
            for side in &upgrade.sides {
                push_word(&mut composite, &side.title);
                push_word(&mut composite, side.ability.as_deref().unwrap_or(""));
            }
            for title in upgrade.side_titles() {
                push_word(&mut name, title);
            }
        }
        _ => {
            push_word(&mut composite, &base.name);
            push_word(&mut composite, &base.xws);
            push_word(&mut composite, base.ability.as_deref().unwrap_or(""));
            if let Some(ability) = card.as_pilot().and_then(|p| p.ship_ability.as_ref()) {
                push_word(&mut composite, &ability.name);
                push_word(&mut composite, &ability.text);
            }
            for keyword in &base.keywords {
                push_word(&mut composite, keyword);
            }
            for nickname in &base.nicknames {
                push_word(&mut composite, nickname);
            }
        }
    }

    for nickname in &base.nicknames {
        push_word(&mut name, nickname);
    }

    SearchText {
        composite,
        name: name.to_lowercase().trim().to_string(),
    }
}
