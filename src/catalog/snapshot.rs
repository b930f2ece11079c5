//! The current catalog snapshot, shared between readers.
//!
//! Readers take a cheap `Arc` clone of the current `CardIndex` and keep
//! using it for as long as they like. A refresh builds the next index
//! completely before swapping it in, so no reader ever sees a partly
//! built catalog.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::info;

use super::loader::CatalogLoader;
use crate::cards::CardIndex;
use crate::core::error::Result;

/// Atomically replaceable `CardIndex` plus the loader that feeds it.
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<CardIndex>>,
    loader: Mutex<CatalogLoader>,
}

impl SharedCatalog {
    /// Load and index the catalog the loader points at.
    pub fn open(mut loader: CatalogLoader) -> Result<Self> {
        let index = CardIndex::build(loader.load()?)?;
        info!(version = %index.version(), cards = index.len(), "catalog ready");
        Ok(Self::from_index(index, loader))
    }

    /// Wrap an index that was built elsewhere.
    #[must_use]
    pub fn from_index(index: CardIndex, loader: CatalogLoader) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
            loader: Mutex::new(loader),
        }
    }

    /// The index readers should use right now.
    #[must_use]
    pub fn current(&self) -> Arc<CardIndex> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Rebuild if the catalog version changed. Returns whether it did.
    ///
    /// Version checks are rate limited by the loader, so calling this on
    /// every request is fine.
    pub fn refresh(&self) -> Result<bool> {
        let mut loader = self.loader.lock().unwrap_or_else(PoisonError::into_inner);
        if !loader.check_version()? {
            return Ok(false);
        }
        self.rebuild(&mut loader)?;
        Ok(true)
    }

    /// Rebuild unconditionally.
    pub fn reload(&self) -> Result<()> {
        let mut loader = self.loader.lock().unwrap_or_else(PoisonError::into_inner);
        self.rebuild(&mut loader)
    }

    fn rebuild(&self, loader: &mut CatalogLoader) -> Result<()> {
        let index = Arc::new(CardIndex::build(loader.load()?)?);
        info!(version = %index.version(), cards = index.len(), "catalog rebuilt");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = index;
        Ok(())
    }
}
