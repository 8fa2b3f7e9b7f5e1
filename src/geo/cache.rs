//! Cached-location persistence
//!
//! A successful device fix is written to a small JSON file and trusted for
//! a fixed freshness window, so repeated searches skip the permission
//! prompt and sensor latency. The cache is overwritten on every fresh
//! resolution and expires by policy rather than removal.

use crate::constants::location::{CACHE_FILE, FRESHNESS_WINDOW_MS};
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

const APP_DIR_NAME: &str = "cafe-swipe";

/// On-disk shape: `{lat, lng, timestamp}` with the timestamp in epoch
/// milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedFix {
    lat: f64,
    lng: f64,
    timestamp: u64,
}

/// File-backed location cache with a freshness window
#[derive(Debug)]
pub struct LocationCache {
    path: Option<PathBuf>,
}

impl LocationCache {
    /// Create a cache at the default XDG cache path
    pub fn new() -> Self {
        let path = dirs::cache_dir().map(|p| p.join(APP_DIR_NAME).join(CACHE_FILE));
        Self { path }
    }

    /// Create a cache at a specific path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Create a cache that never persists
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Current time in epoch milliseconds
    pub fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Return the cached fix if it is still within the freshness window
    /// at `now` (epoch milliseconds)
    pub fn fresh(&self, now: u64) -> Option<Coordinates> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return None;
        }

        let content = fs::read_to_string(path).ok()?;
        let cached: CachedFix = serde_json::from_str(&content).ok()?;

        if now.saturating_sub(cached.timestamp) < FRESHNESS_WINDOW_MS {
            Some(Coordinates::new(cached.lat, cached.lng))
        } else {
            None
        }
    }

    /// Overwrite the cache with a fresh fix taken at `now`
    pub fn store(&self, coords: Coordinates, now: u64) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("Failed to create cache directory: {}", e)))?;
        }

        let cached = CachedFix {
            lat: coords.lat,
            lng: coords.lng,
            timestamp: now,
        };

        let content = serde_json::to_string_pretty(&cached)
            .map_err(|e| Error::Store(format!("Failed to serialize cached location: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Store(format!("Failed to write location cache: {}", e)))?;

        Ok(())
    }
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINUTE_MS: u64 = 60 * 1000;

    fn temp_cache() -> (LocationCache, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_location.json");
        (LocationCache::with_path(path), temp_dir)
    }

    #[test]
    fn test_empty_cache() {
        let (cache, _temp) = temp_cache();
        assert!(cache.fresh(LocationCache::now_millis()).is_none());
    }

    #[test]
    fn test_store_and_load() {
        let (cache, _temp) = temp_cache();
        let now = LocationCache::now_millis();

        cache.store(Coordinates::new(23.26, 77.41), now).unwrap();

        let loaded = cache.fresh(now).unwrap();
        assert_eq!(loaded.lat, 23.26);
        assert_eq!(loaded.lng, 77.41);
    }

    #[test]
    fn test_fresh_within_window() {
        let (cache, _temp) = temp_cache();
        let now = LocationCache::now_millis();

        // Stored 9 minutes ago: still fresh
        cache
            .store(Coordinates::new(23.26, 77.41), now - 9 * MINUTE_MS)
            .unwrap();
        assert!(cache.fresh(now).is_some());
    }

    #[test]
    fn test_stale_past_window() {
        let (cache, _temp) = temp_cache();
        let now = LocationCache::now_millis();

        // Stored 11 minutes ago: a new device query is required
        cache
            .store(Coordinates::new(23.26, 77.41), now - 11 * MINUTE_MS)
            .unwrap();
        assert!(cache.fresh(now).is_none());
    }

    #[test]
    fn test_overwrite() {
        let (cache, _temp) = temp_cache();
        let now = LocationCache::now_millis();

        cache.store(Coordinates::new(1.0, 2.0), now).unwrap();
        cache.store(Coordinates::new(3.0, 4.0), now).unwrap();

        let loaded = cache.fresh(now).unwrap();
        assert_eq!(loaded.lat, 3.0);
        assert_eq!(loaded.lng, 4.0);
    }

    #[test]
    fn test_disabled_cache() {
        let cache = LocationCache::disabled();
        let now = LocationCache::now_millis();

        cache.store(Coordinates::new(1.0, 2.0), now).unwrap();
        assert!(cache.fresh(now).is_none());
    }
}
