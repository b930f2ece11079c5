//! XWS squad documents.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::error::ListError;

/// Name used when a squad has none.
pub const DEFAULT_SQUAD_NAME: &str = "Nameless Squadron";

/// Metadata a list builder attaches to its exports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorInfo {
    /// Link back to the list in the builder.
    #[serde(default)]
    pub link: Option<String>,
}

/// One pilot of a squad.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadPilot {
    pub id: Option<String>,
    /// Older exports name the pilot here instead of `id`.
    pub name: Option<String>,
    pub ship: Option<String>,
    /// Slot name to upgrade short ids, in document order.
    pub upgrades: IndexMap<String, Vec<String>>,
}

impl SquadPilot {
    /// The pilot's short id.
    #[must_use]
    pub fn xws(&self) -> &str {
        self.id.as_deref().or(self.name.as_deref()).unwrap_or("")
    }

    /// Every upgrade short id, slot by slot.
    pub fn upgrade_ids(&self) -> impl Iterator<Item = &str> {
        self.upgrades.values().flatten().map(String::as_str)
    }
}

/// A squad as exported by a list builder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadDocument {
    pub faction: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub vendor: IndexMap<String, VendorInfo>,

    #[serde(default)]
    pub pilots: Vec<SquadPilot>,
}

impl SquadDocument {
    pub fn from_json(json: &str) -> Result<Self, ListError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SQUAD_NAME)
    }

    /// Link from the first vendor that has one.
    #[must_use]
    pub fn vendor_link(&self) -> Option<&str> {
        self.vendor.values().next().and_then(|vendor| vendor.link.as_deref())
    }
}
