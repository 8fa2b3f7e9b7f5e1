//! Geographic types and location resolution
//!
//! This module handles:
//! - Coordinate and resolved-location types
//! - Platform device location (IP-based implementation)
//! - Cached-location persistence with a freshness window
//! - The resolve pipeline that turns a device fix or free-text query
//!   into coordinates plus a human-readable label

pub mod cache;
pub mod device;
pub mod resolver;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
///
/// Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(Error::Config(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(Error::Config(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// A resolved location: coordinates plus a display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coords: Coordinates,
    /// Human-readable label (formatted address or description)
    pub label: String,
}

/// The raw input a search starts from
#[derive(Debug, Clone)]
pub enum LocationSource {
    /// Use the platform location service (cache-first)
    Device,
    /// Geocode a free-text query
    Query(String),
}

/// Trait for platform location services
///
/// A browser front end would back this with the geolocation API; the CLI
/// uses an IP-based locator. Tests substitute a fake.
pub trait DeviceLocator: Send + Sync {
    /// Get the device's current position
    ///
    /// Fails with [`Error::PermissionDenied`] when access is refused or
    /// the service is unavailable.
    fn current_position(&self) -> impl std::future::Future<Output = Result<Coordinates>> + Send;
}
