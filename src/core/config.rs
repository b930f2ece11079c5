//! Configuration types.
//!
//! Every tunable the engine relies on lives here with its default:
//! - `LoaderConfig`: where the manifest lives and how often to re-check it
//! - `SearchConfig`: fuzzy threshold and result cap
//! - `RenderConfig`: link targets used by the renderer
//!
//! All configs build with `Default` and adjust with `with_*` methods.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Manifest used when none is configured.
pub const DEFAULT_MANIFEST: &str =
    "https://raw.githubusercontent.com/guidokessels/xwing-data2/master/data/manifest.json";

/// Minimum seconds between two remote version checks.
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 600;

/// Minimum fuzzy ratio (0-100) for a card to be a search candidate.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 68;

/// Maximum number of cards a search returns.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Wiki that card names link to.
pub const DEFAULT_WIKI_BASE: &str = "https://xwingtmgwiki.com/";

/// Configuration for the catalog loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Manifest location: an `http(s)` URL or a local file path.
    pub manifest: String,

    /// Version checks closer together than this are skipped.
    pub min_check_interval: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_string(),
            min_check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
        }
    }
}

impl LoaderConfig {
    /// Create a config for the given manifest location.
    pub fn new(manifest: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            ..Self::default()
        }
    }

    /// Set the minimum interval between version checks.
    #[must_use]
    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.min_check_interval = interval;
        self
    }
}

/// Search ranking parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fuzzy ratio a card must reach to enter a fuzzy pool.
    pub threshold: u8,

    /// Results are truncated to this many cards.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Set the fuzzy threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the result cap.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Renderer parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Base URL card names link to. Must end with `/`.
    pub wiki_base: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wiki_base: DEFAULT_WIKI_BASE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Set the wiki base URL.
    #[must_use]
    pub fn with_wiki_base(mut self, base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.wiki_base = base;
        self
    }
}
