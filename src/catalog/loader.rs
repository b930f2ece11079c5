//! Fetches a catalog version: the manifest and every document it names.

use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::manifest::{
    DocumentRef, Manifest, RawCatalog, RawDamageDeck, RawDamageDeckDocument, RawFactionShips,
    RawUpgradeGroup,
};
use super::source::{DocumentFetcher, FsFetcher, HttpFetcher, Source};
use crate::core::config::LoaderConfig;
use crate::core::error::FetchError;

/// Loads raw catalogs and tracks which version was loaded last.
pub struct CatalogLoader {
    config: LoaderConfig,
    source: Source,
    fetcher: Box<dyn DocumentFetcher>,
    version: Option<String>,
    last_checked: Option<Instant>,
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("manifest", &self.config.manifest)
            .field("source", &self.source)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl CatalogLoader {
    /// Create a loader whose transport matches the manifest location.
    pub fn new(config: LoaderConfig) -> Result<Self, FetchError> {
        let source = Source::from_manifest(&config.manifest)?;
        let fetcher: Box<dyn DocumentFetcher> = if source.is_remote() {
            Box::new(HttpFetcher::new()?)
        } else {
            Box::new(FsFetcher)
        };
        Ok(Self::from_parts(config, source, fetcher))
    }

    /// Create a loader with an explicit transport.
    pub fn with_fetcher(
        config: LoaderConfig,
        fetcher: impl DocumentFetcher + 'static,
    ) -> Result<Self, FetchError> {
        let source = Source::from_manifest(&config.manifest)?;
        Ok(Self::from_parts(config, source, Box::new(fetcher)))
    }

    fn from_parts(config: LoaderConfig, source: Source, fetcher: Box<dyn DocumentFetcher>) -> Self {
        Self {
            config,
            source,
            fetcher,
            version: None,
            last_checked: None,
        }
    }

    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Version of the most recent successful load.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Fetch the manifest and every referenced document.
    pub fn load(&mut self) -> Result<RawCatalog, FetchError> {
        let manifest = self.fetch_manifest()?;
        info!(version = %manifest.version, manifest = %self.config.manifest, "loading catalog");

        let mut ships = Vec::with_capacity(manifest.pilots.len());
        for group in &manifest.pilots {
            ships.push(RawFactionShips {
                faction: group.faction.clone(),
                ships: self.fetch_records(&group.ships)?,
            });
        }

        let mut upgrades = Vec::new();
        for path in manifest.upgrades.paths() {
            upgrades.push(RawUpgradeGroup {
                document: path.clone(),
                upgrades: self.fetch_path_records(path)?,
            });
        }

        let mut damage_decks = Vec::new();
        for path in manifest.damagedecks.paths() {
            for document in self.fetch_path_records::<RawDamageDeckDocument>(path)? {
                damage_decks.push(RawDamageDeck {
                    deck: deck_label(path),
                    cards: document.cards,
                });
            }
        }

        let catalog = RawCatalog {
            factions: self.fetch_records(&manifest.factions)?,
            stats: self.fetch_records(&manifest.stats)?,
            actions: self.fetch_records(&manifest.actions)?,
            conditions: self.fetch_records(&manifest.conditions)?,
            damage_decks,
            ships,
            upgrades,
            version: manifest.version,
        };

        self.version = Some(catalog.version.clone());
        self.last_checked = Some(Instant::now());
        Ok(catalog)
    }

    /// Has the remote version moved on since the last load?
    ///
    /// Checks are rate limited by `min_check_interval`; calls inside the
    /// interval return `false` without fetching anything.
    pub fn check_version(&mut self) -> Result<bool, FetchError> {
        self.check_version_at(Instant::now())
    }

    /// `check_version` against an explicit clock reading.
    pub fn check_version_at(&mut self, now: Instant) -> Result<bool, FetchError> {
        let Some(current) = self.version.clone() else {
            return Ok(true);
        };
        if let Some(last) = self.last_checked {
            if now.saturating_duration_since(last) < self.config.min_check_interval {
                return Ok(false);
            }
        }

        debug!(%current, "checking for updated catalog");
        self.last_checked = Some(now);
        let latest = self.fetch_manifest()?.version;
        if latest == current {
            Ok(false)
        } else {
            info!(old = %current, new = %latest, "catalog version changed");
            Ok(true)
        }
    }

    fn fetch_manifest(&self) -> Result<Manifest, FetchError> {
        let location = &self.config.manifest;
        let location = location.strip_prefix("file://").unwrap_or(location);
        let body = self.fetcher.fetch(location)?;
        decode(location, serde_json::from_str(&body))
    }

    /// Fetch a document as JSON values. Top-level arrays are flattened.
    fn fetch_values(&self, path: &str) -> Result<(String, Vec<Value>), FetchError> {
        let location = self.source.locate(path)?;
        let body = self.fetcher.fetch(&location)?;
        let value: Value = decode(&location, serde_json::from_str(&body))?;
        let values = match value {
            Value::Array(items) => items,
            other => vec![other],
        };
        Ok((location, values))
    }

    fn fetch_path_records<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let (location, values) = self.fetch_values(path)?;
        values
            .into_iter()
            .map(|value| decode(&location, serde_json::from_value(value)))
            .collect()
    }

    fn fetch_records<T: DeserializeOwned>(&self, refs: &DocumentRef) -> Result<Vec<T>, FetchError> {
        let mut records = Vec::new();
        for path in refs.paths() {
            records.extend(self.fetch_path_records(path)?);
        }
        Ok(records)
    }
}

fn decode<T>(location: &str, result: serde_json::Result<T>) -> Result<T, FetchError> {
    result.map_err(|source| FetchError::Decode {
        location: location.to_string(),
        source,
    })
}

/// Deck name for a damage deck document: its file stem.
fn deck_label(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
