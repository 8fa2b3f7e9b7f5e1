//! Centralized constants for the cafe-swipe crate
//!
//! The search, swipe, and detail parameters are contract constants, not
//! user-configurable settings: the boundary proxy and the card UI both
//! assume these exact values.

/// Nearby-search parameters
pub mod search {
    /// Fixed search radius in meters
    pub const RADIUS_METERS: u32 = 10_000;

    /// Fixed search keyword
    pub const KEYWORD: &str = "cafe";
}

/// Swipe gesture parameters
pub mod swipe {
    /// Horizontal displacement (in pointer distance units) a drag must
    /// strictly exceed at release for the card to commit
    pub const COMMIT_THRESHOLD: f64 = 100.0;

    /// Delay before the queue advances after a commit, so the exit
    /// animation can finish before the next card mounts
    pub const EXIT_DELAY_MS: u64 = 300;
}

/// Location caching
pub mod location {
    /// How long a cached location fix is trusted without re-querying
    /// the device (10 minutes)
    pub const FRESHNESS_WINDOW_MS: u64 = 10 * 60 * 1000;

    /// Cached location file name
    pub const CACHE_FILE: &str = "location.json";
}

/// Place-detail fetch parameters
pub mod details {
    /// Fixed attribute set requested from the details endpoint. Bounds
    /// provider cost and response size; not caller-supplied.
    pub const FIELDS: &str = "name,formatted_phone_number,website,opening_hours,formatted_address";
}

/// Photo resolution
pub mod photo {
    /// Maximum photo width requested from the boundary
    pub const MAX_WIDTH: u32 = 400;

    /// Shown when a candidate carries no photo reference
    pub const PLACEHOLDER_URL: &str = "https://placehold.co/400x300/6d4c41/f4f1ea?text=No+Image";
}

/// Favorites persistence
pub mod store {
    /// Favorites file name
    pub const FAVORITES_FILE: &str = "favorites.json";
}
