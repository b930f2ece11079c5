//! Shared fixture catalog for the integration tests.
//!
//! The catalog is laid out the way a local checkout of the card data is:
//! a manifest under `data/` naming documents relative to the checkout
//! root. Everything is served from a `MemoryFetcher`.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use squadron_codex::{
    CardIndex, CatalogLoader, LoaderConfig, MemoryFetcher, SharedCatalog,
};

pub const MANIFEST: &str = "/xwing-data2/data/manifest.json";
pub const ROOT: &str = "/xwing-data2/";

pub fn manifest(version: &str) -> String {
    format!(
        r#"{{
            "version": "{version}",
            "factions": ["data/factions/factions.json"],
            "damagedecks": ["data/damage-decks/core.json"],
            "pilots": [
                {{"faction": "rebelalliance", "ships": ["data/pilots/rebel-alliance/t-65-x-wing.json"]}},
                {{"faction": "scumandvillainy", "ships": ["data/pilots/scum-and-villainy/z-95-af4-headhunter.json"]}}
            ],
            "upgrades": [
                "data/upgrades/astromech.json",
                "data/upgrades/talent.json",
                "data/upgrades/payload.json",
                "data/upgrades/configuration.json"
            ],
            "conditions": "data/conditions/conditions.json"
        }}"#
    )
}

const FACTIONS: &str = r#"[
    {"name": "Rebel Alliance", "xws": "rebelalliance", "icon": "https://example.org/rebel.png"},
    {"name": "Scum and Villainy", "xws": "scumandvillainy"}
]"#;

const XWING: &str = r#"{
    "name": "T-65 X-wing",
    "xws": "t65xwing",
    "size": "Small",
    "dial": ["1BW", "1FB", "2FB", "3FW", "3KR", "4FW"],
    "stats": [
        {"type": "attack", "arc": "Front Arc", "value": 3},
        {"type": "agility", "value": 2},
        {"type": "hull", "value": 4},
        {"type": "shields", "value": 2}
    ],
    "actions": [{"type": "Focus"}, {"type": "Lock"}],
    "slots": ["Astromech", "Torpedo"],
    "standard": true,
    "pilots": [
        {
            "name": "Wedge Antilles",
            "xws": "wedgeantilles",
            "caption": "Red Two",
            "initiative": 6,
            "limited": 1,
            "cost": 52,
            "ability": "While you perform an attack, the defender rolls 1 fewer defense die.",
            "slots": ["Talent", "Astromech"],
            "standard": true
        },
        {
            "name": "Luke Skywalker",
            "xws": "lukeskywalker",
            "caption": "Red Five",
            "initiative": 5,
            "limited": 1,
            "cost": 62,
            "ability": "After you become the defender, gain 1 [Focus] token.",
            "slots": ["Talent", "Astromech"],
            "force": {"value": 2, "recovers": 1},
            "conditions": ["hunted"],
            "standard": true
        },
        {
            "name": "Red Squadron Veteran",
            "xws": "redsquadronveteran",
            "initiative": 3,
            "cost": 42,
            "slots": ["Talent", "Astromech"],
            "wildspace": true
        }
    ]
}"#;

const HEADHUNTER: &str = r#"{
    "name": "Z-95-AF4 Headhunter",
    "xws": "z95af4headhunter",
    "size": "Small",
    "dial": ["1BW", "2FW", "3KR"],
    "stats": [
        {"type": "attack", "arc": "Front Arc", "value": 2},
        {"type": "agility", "value": 2},
        {"type": "hull", "value": 2},
        {"type": "shields", "value": 2}
    ],
    "actions": [{"type": "Focus"}],
    "pilots": [
        {
            "name": "Black Sun Soldier",
            "xws": "blacksunsoldier",
            "initiative": 3,
            "cost": 24,
            "epic": true
        }
    ]
}"#;

const ASTROMECH: &str = r#"[
    {
        "name": "R2-D2",
        "xws": "r2d2",
        "limited": 1,
        "cost": {"value": 8},
        "restrictions": [{"factions": ["rebelalliance"]}],
        "standard": true,
        "sides": [{
            "title": "R2-D2",
            "type": "Astromech",
            "slots": ["Astromech"],
            "ability": "Luke Skywalker's favourite droid repairs 1 shield.",
            "charges": {"value": 3, "recovers": 0}
        }]
    },
    {
        "name": "R2 Astromech",
        "xws": "r2astromech",
        "cost": {"value": 3},
        "standard": true,
        "sides": [{
            "title": "R2 Astromech",
            "type": "Astromech",
            "slots": ["Astromech"],
            "ability": "After you reveal your dial, you may spend 1 [Charge] to repair 1 shield.",
            "charges": {"value": 2, "recovers": 0}
        }]
    }
]"#;

const TALENT: &str = r#"[
    {
        "name": "Outmaneuver",
        "xws": "outmaneuver",
        "cost": {"variable": "initiative", "values": {"3": 2, "6": 4}},
        "standard": true,
        "sides": [{
            "title": "Outmaneuver",
            "type": "Talent",
            "slots": ["Talent"],
            "ability": "While you perform a [Front Arc] attack, if you are not in the defender's firing arc, the defender rolls 1 fewer defense die."
        }]
    },
    {
        "name": "Marksmanship",
        "xws": "marksmanship",
        "cost": {"value": 1},
        "epic": true,
        "sides": [{
            "title": "Marksmanship",
            "type": "Talent",
            "slots": ["Talent"],
            "ability": "While you perform an attack, if the defender is in your [Bullseye Arc], you may change 1 [Hit] result to a [Critical Hit] result."
        }]
    }
]"#;

const PAYLOAD: &str = r#"[
    {
        "name": "DRK-1 Probe Droids",
        "xws": "drk1probedroids",
        "cost": {"value": 3},
        "standard": true,
        "sides": [{
            "title": "DRK-1 Probe Droids",
            "type": "Payload",
            "slots": ["Payload"],
            "ability": "During the End Phase, you may spend 1 [Charge] to drop or launch 1 DRK-1 probe droid.",
            "charges": {"value": 2, "recovers": 0},
            "device": {
                "name": "DRK-1 Probe Droid",
                "type": "Remote",
                "effect": "While a friendly ship locks an object, it may measure range from this remote."
            }
        }]
    },
    {
        "name": "Proximity Mines",
        "xws": "proximitymines",
        "cost": {"value": 6},
        "standard": true,
        "sides": [{
            "title": "Proximity Mines",
            "type": "Payload",
            "slots": ["Payload"],
            "ability": "During the System Phase, you may spend 1 [Charge] to drop a Proximity Mine.",
            "charges": {"value": 2, "recovers": 0},
            "device": {
                "name": "Proximity Mine",
                "type": "Mine",
                "effect": "After a ship overlaps or moves through this device, it suffers 1 [Hit] damage."
            }
        }]
    }
]"#;

const CONFIGURATION: &str = r#"[
    {
        "name": "Servomotor S-foils",
        "xws": "servomotorsfoils",
        "cost": {"value": 0},
        "keywords": ["S-foil"],
        "restrictions": [{"ships": ["t65xwing"]}],
        "standard": true,
        "sides": [
            {
                "title": "Servomotor S-foils (Attack)",
                "type": "Configuration",
                "slots": ["Configuration"],
                "ability": "Before you activate, you may flip this card."
            },
            {
                "title": "Servomotor S-foils (Closed)",
                "type": "Configuration",
                "slots": ["Configuration"],
                "ability": "While you perform a primary attack, roll 1 fewer attack die."
            }
        ]
    }
]"#;

const CONDITIONS: &str = r#"[
    {"name": "Hunted", "xws": "hunted", "ability": "After you are destroyed, you must choose another friendly ship."}
]"#;

const DAMAGE: &str = r#"{
    "name": "Core Set",
    "cards": [
        {"title": "Direct Hit!", "amount": 5, "type": "Ship", "text": "Suffer 1 additional [Hit] damage."},
        {"title": "Blinded Pilot", "amount": 2, "type": "Pilot", "text": "You cannot perform attacks."}
    ]
}"#;

/// A fetcher serving the whole fixture catalog at `version`.
pub fn fetcher(version: &str) -> MemoryFetcher {
    let doc = |path: &str| format!("{ROOT}{path}");
    MemoryFetcher::new()
        .with_document(MANIFEST, manifest(version))
        .with_document(doc("data/factions/factions.json"), FACTIONS)
        .with_document(doc("data/pilots/rebel-alliance/t-65-x-wing.json"), XWING)
        .with_document(
            doc("data/pilots/scum-and-villainy/z-95-af4-headhunter.json"),
            HEADHUNTER,
        )
        .with_document(doc("data/upgrades/astromech.json"), ASTROMECH)
        .with_document(doc("data/upgrades/talent.json"), TALENT)
        .with_document(doc("data/upgrades/payload.json"), PAYLOAD)
        .with_document(doc("data/upgrades/configuration.json"), CONFIGURATION)
        .with_document(doc("data/conditions/conditions.json"), CONDITIONS)
        .with_document(doc("data/damage-decks/core.json"), DAMAGE)
}

/// A loader over `fetcher` that checks the version on every call.
pub fn loader(fetcher: MemoryFetcher) -> CatalogLoader {
    let config = LoaderConfig::new(MANIFEST).with_check_interval(Duration::ZERO);
    CatalogLoader::with_fetcher(config, fetcher).unwrap()
}

pub fn catalog() -> SharedCatalog {
    SharedCatalog::open(loader(fetcher("2.0.0"))).unwrap()
}

pub fn index() -> Arc<CardIndex> {
    catalog().current()
}
