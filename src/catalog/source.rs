//! Where catalog documents come from and how they are fetched.
//!
//! A `Source` is derived from the manifest location: `http`/`https`
//! manifests are served remotely, anything else is a filesystem path.
//! Paths listed inside the manifest are resolved against the source root
//! and handed to a `DocumentFetcher`.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::debug;
use url::Url;

use crate::core::error::FetchError;

/// Root that manifest paths are resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Base URL ending in `/`.
    Remote(Url),
    /// Directory above the manifest's `data/` directory.
    Local(PathBuf),
}

impl Source {
    /// Derive the source root from a manifest location.
    ///
    /// Remote roots drop the file name and the `data/` directory from the
    /// manifest URL. Local roots are the manifest's grandparent directory.
    pub fn from_manifest(manifest: &str) -> Result<Self, FetchError> {
        match Url::parse(manifest) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                let mut base = url;
                base.set_query(None);
                base.set_fragment(None);
                base.path_segments_mut()
                    .map_err(|()| FetchError::InvalidSource(manifest.to_string()))?
                    .pop()
                    .pop()
                    .push("");
                Ok(Source::Remote(base))
            }
            Ok(url) if url.scheme() != "file" && url.scheme().len() > 1 => {
                Err(FetchError::InvalidSource(manifest.to_string()))
            }
            _ => {
                let path = Path::new(manifest.strip_prefix("file://").unwrap_or(manifest));
                let dir = path.parent().unwrap_or_else(|| Path::new(""));
                let root = match dir.parent() {
                    Some(root) => root.to_path_buf(),
                    None => dir.join(".."),
                };
                Ok(Source::Local(root))
            }
        }
    }

    /// Full location of a manifest-relative document path.
    pub fn locate(&self, path: &str) -> Result<String, FetchError> {
        match self {
            Source::Remote(base) => base
                .join(path)
                .map(String::from)
                .map_err(|err| FetchError::InvalidSource(format!("{path}: {err}"))),
            Source::Local(root) => Ok(root.join(path).to_string_lossy().into_owned()),
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }
}

/// Retrieves the body of one catalog document.
pub trait DocumentFetcher: Send + Sync {
    fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Fetches documents over HTTP.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("squadron-codex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| FetchError::Transport {
                location: String::new(),
                message: err.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        debug!(%location, "fetching document");
        let transport = |err: reqwest::Error| FetchError::Transport {
            location: location.to_string(),
            message: err.to_string(),
        };
        let response = self.client.get(location).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }
}

/// Reads documents from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsFetcher;

impl DocumentFetcher for FsFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        debug!(%location, "reading document");
        std::fs::read_to_string(location).map_err(|source| FetchError::Io {
            location: location.to_string(),
            source,
        })
    }
}

/// Serves documents from memory.
///
/// Clones share storage, so a test can keep a handle and change documents
/// after handing the fetcher to a loader.
#[derive(Clone, Debug, Default)]
pub struct MemoryFetcher {
    documents: Arc<RwLock<FxHashMap<String, String>>>,
    fetches: Arc<AtomicUsize>,
}

impl MemoryFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document (builder pattern).
    #[must_use]
    pub fn with_document(self, location: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(location, body);
        self
    }

    /// Add or replace a document.
    pub fn insert(&self, location: impl Into<String>, body: impl Into<String>) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(location.into(), body.into());
    }

    /// Number of fetches served so far, including misses.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DocumentFetcher for MemoryFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::Io {
                location: location.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such document"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_source_drops_file_and_data_dir() {
        let source = Source::from_manifest(
            "https://raw.githubusercontent.com/guidokessels/xwing-data2/master/data/manifest.json",
        )
        .unwrap();
        assert!(source.is_remote());
        assert_eq!(
            source.locate("data/factions/factions.json").unwrap(),
            "https://raw.githubusercontent.com/guidokessels/xwing-data2/master/data/factions/factions.json"
        );
    }

    #[test]
    fn test_local_source_uses_grandparent() {
        let source = Source::from_manifest("/srv/xwing-data2/data/manifest.json").unwrap();
        assert_eq!(source, Source::Local(PathBuf::from("/srv/xwing-data2")));
        assert_eq!(
            source.locate("data/conditions/conditions.json").unwrap(),
            "/srv/xwing-data2/data/conditions/conditions.json"
        );
    }

    #[test]
    fn test_unsupported_scheme() {
        assert!(matches!(
            Source::from_manifest("ftp://example.org/data/manifest.json"),
            Err(FetchError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_memory_fetcher_shares_storage() {
        let fetcher = MemoryFetcher::new().with_document("a", "1");
        let handle = fetcher.clone();
        handle.insert("a", "2");
        assert_eq!(fetcher.fetch("a").unwrap(), "2");
        assert!(matches!(fetcher.fetch("b"), Err(FetchError::Io { .. })));
        assert_eq!(handle.fetch_count(), 2);
    }

    #[test]
    fn test_fs_fetcher_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "[]").unwrap();
        let body = FsFetcher.fetch(&path.to_string_lossy()).unwrap();
        assert_eq!(body, "[]");
    }
}
