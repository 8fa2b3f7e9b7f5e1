//! Persisted favorites store
//!
//! Accepted candidates land here as a deduplicated, insertion-ordered
//! list, stored as JSON in the XDG data directory. The store is restored
//! once at startup and written synchronously after every successful
//! insert, so contents survive process restarts.

use crate::constants::store::FAVORITES_FILE;
use crate::error::{Error, Result};
use crate::places::Candidate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const APP_DIR_NAME: &str = "cafe-swipe";

/// Persisted projection of an accepted candidate
///
/// Unique by id; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Resolved photo URL (boundary photo endpoint or placeholder)
    pub photo_url: String,
    pub short_address: String,
    pub saved_at: DateTime<Utc>,
}

impl FavoriteEntry {
    /// Project a candidate into a favorite, resolving its photo URL
    pub fn from_candidate(candidate: &Candidate, photo_url: String) -> Self {
        Self {
            id: candidate.id.clone(),
            display_name: candidate.display_name.clone(),
            rating: candidate.rating,
            photo_url,
            short_address: candidate.short_address.clone(),
            saved_at: Utc::now(),
        }
    }
}

/// Favorites storage manager
#[derive(Debug)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
    path: PathBuf,
}

impl FavoritesStore {
    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Store("Could not determine data directory".to_string()))
    }

    /// Get the favorites file path
    pub fn store_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(FAVORITES_FILE))
    }

    /// Restore the store from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::store_path()?)
    }

    /// Restore the store from a specific path (for testing)
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Store(format!("Failed to read favorites file: {}", e)))?;

            serde_json::from_str(&content)
                .map_err(|e| Error::Store(format!("Failed to parse favorites file: {}", e)))?
        } else {
            Vec::new()
        };

        Ok(Self { entries, path })
    }

    /// Insert a favorite unless one with the same id already exists
    ///
    /// Idempotent: a second accept of the same id is a no-op. Persists
    /// synchronously on every successful insert. Returns whether the entry
    /// was inserted.
    pub fn upsert(&mut self, entry: FavoriteEntry) -> Result<bool> {
        if self.contains(&entry.id) {
            debug!(id = %entry.id, "Favorite already saved, skipping");
            return Ok(false);
        }

        self.entries.push(entry);
        self.save()?;
        Ok(true)
    }

    /// All entries, in insertion order
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Whether an entry with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of saved favorites
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the store to disk
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("Failed to create data directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| Error::Store(format!("Failed to serialize favorites: {}", e)))?;

        fs::write(&self.path, content)
            .map_err(|e| Error::Store(format!("Failed to write favorites file: {}", e)))?;

        Ok(())
    }
}
