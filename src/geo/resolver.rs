//! Location resolution pipeline
//!
//! Turns a raw input (device fix or free-text query) into coordinates plus
//! a human-readable label. Device resolution is cache-first; text queries
//! trust the geocoding boundary's ordering and take the first result.

use crate::error::{Error, Result};
use crate::geo::cache::LocationCache;
use crate::geo::{Coordinates, DeviceLocator, LocationSource, ResolvedLocation};
use crate::places::client::PlacesClient;
use tracing::debug;

/// Label used when the position came from the device rather than a query
const DEVICE_LABEL: &str = "Current location";

/// Resolves search inputs into coordinates
#[derive(Debug)]
pub struct LocationResolver {
    cache: LocationCache,
}

impl LocationResolver {
    /// Create a resolver with the default cache path
    pub fn new() -> Self {
        Self {
            cache: LocationCache::new(),
        }
    }

    /// Create a resolver with a specific cache (for testing)
    pub fn with_cache(cache: LocationCache) -> Self {
        Self { cache }
    }

    /// Resolve a location source
    ///
    /// - `Device`: returns the cached fix if still fresh, otherwise asks
    ///   the platform locator and overwrites the cache. Fails with
    ///   [`Error::PermissionDenied`] when the device refuses.
    /// - `Query`: geocodes the raw text via the boundary; zero results
    ///   fail with [`Error::NotFound`]. The cache is not touched.
    pub async fn resolve<D: DeviceLocator>(
        &self,
        source: &LocationSource,
        client: &PlacesClient,
        device: &D,
    ) -> Result<ResolvedLocation> {
        match source {
            LocationSource::Device => self.resolve_device(device).await,
            LocationSource::Query(text) => self.resolve_query(text, client).await,
        }
    }

    async fn resolve_device<D: DeviceLocator>(&self, device: &D) -> Result<ResolvedLocation> {
        let now = LocationCache::now_millis();

        if let Some(coords) = self.cache.fresh(now) {
            debug!("Using cached location fix");
            return Ok(ResolvedLocation {
                coords,
                label: DEVICE_LABEL.to_string(),
            });
        }

        let coords = device.current_position().await?;
        self.cache.store(coords, now)?;

        Ok(ResolvedLocation {
            coords,
            label: DEVICE_LABEL.to_string(),
        })
    }

    /// Resolve a free-text query without involving the device
    pub async fn resolve_query(&self, text: &str, client: &PlacesClient) -> Result<ResolvedLocation> {
        // The boundary's ordering is trusted: first result wins
        client
            .geocode(text)
            .await?
            .ok_or_else(|| Error::NotFound(text.to_string()))
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Device stub that counts how often it is queried
    struct CountingDevice {
        coords: Coordinates,
        calls: AtomicUsize,
    }

    impl CountingDevice {
        fn at(lat: f64, lng: f64) -> Self {
            Self {
                coords: Coordinates::new(lat, lng),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DeviceLocator for CountingDevice {
        async fn current_position(&self) -> Result<Coordinates> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.coords)
        }
    }

    /// Device stub that always refuses
    struct DeniedDevice;

    impl DeviceLocator for DeniedDevice {
        async fn current_position(&self) -> Result<Coordinates> {
            Err(Error::PermissionDenied("user denied".to_string()))
        }
    }

    fn temp_resolver() -> (LocationResolver, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let cache = LocationCache::with_path(temp_dir.path().join("loc.json"));
        (LocationResolver::with_cache(cache), temp_dir)
    }

    fn test_client() -> PlacesClient {
        PlacesClient::new("http://127.0.0.1:1").unwrap()
    }

    #[tokio::test]
    async fn test_device_fix_is_cached() {
        let (resolver, _temp) = temp_resolver();
        let client = test_client();
        let device = CountingDevice::at(23.26, 77.41);

        let first = resolver
            .resolve(&LocationSource::Device, &client, &device)
            .await
            .unwrap();
        assert_relative_eq!(first.coords.lat, 23.26);
        assert_eq!(device.call_count(), 1);

        // Second resolve within the freshness window reuses the cache
        let second = resolver
            .resolve(&LocationSource::Device, &client, &device)
            .await
            .unwrap();
        assert_relative_eq!(second.coords.lng, 77.41);
        assert_eq!(device.call_count(), 1);
    }

    #[tokio::test]
    async fn test_device_denied() {
        let (resolver, _temp) = temp_resolver();
        let client = test_client();

        let err = resolver
            .resolve(&LocationSource::Device, &client, &DeniedDevice)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_stale_cache_requeries_device() {
        let temp_dir = TempDir::new().unwrap();
        let cache = LocationCache::with_path(temp_dir.path().join("loc.json"));
        let now = LocationCache::now_millis();

        // Seed an 11-minute-old fix, past the freshness window
        cache
            .store(Coordinates::new(1.0, 2.0), now - 11 * 60 * 1000)
            .unwrap();

        let resolver = LocationResolver::with_cache(cache);
        let client = test_client();
        let device = CountingDevice::at(23.26, 77.41);

        let loc = resolver
            .resolve(&LocationSource::Device, &client, &device)
            .await
            .unwrap();
        assert_relative_eq!(loc.coords.lat, 23.26);
        assert_eq!(device.call_count(), 1);
    }

    #[tokio::test]
    async fn test_query_does_not_touch_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("loc.json");
        let resolver =
            LocationResolver::with_cache(LocationCache::with_path(cache_path.clone()));
        let client = test_client();
        let device = CountingDevice::at(0.0, 0.0);

        // Unreachable boundary: the geocode call fails, but either way the
        // cache file must not be created by a text query.
        let _ = resolver
            .resolve(
                &LocationSource::Query("Bhopal".to_string()),
                &client,
                &device,
            )
            .await;

        assert!(!cache_path.exists());
        assert_eq!(device.call_count(), 0);
    }
}
