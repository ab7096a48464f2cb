//! Local cache store: one persisted slot holding the serialized entry
//! collection.
//!
//! The cache is a derived mirror of the in-memory collection. It is read once
//! at startup for hydration and overwritten on every persisting action.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Entry;

/// Trait for the single-slot entry cache
pub trait CacheStore {
    /// Read the cached collection, `None` when the slot has never been written
    fn load(&self) -> Result<Option<Vec<Entry>>>;

    /// Overwrite the slot with the current collection
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

/// File-backed implementation of [`CacheStore`]: one JSON file holding the
/// entry array.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    /// Create a cache over the given slot file (not created until first save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the slot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStore for JsonFileCache {
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string(entries)?)?;
        Ok(())
    }
}
