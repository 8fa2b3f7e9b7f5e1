//! Error types for cafe-swipe

use thiserror::Error;

/// Main error type for cafe-swipe operations
#[derive(Error, Debug)]
pub enum Error {
    /// Geolocation was refused or the platform locator is unavailable
    #[error("Location permission denied: {0}")]
    PermissionDenied(String),

    /// A text query produced zero geocode results
    #[error("Location not found: {0}")]
    NotFound(String),

    /// The boundary returned an explicit error payload (quota, credential
    /// misconfiguration, bad request). Distinct from a transport failure.
    #[error("Provider error ({status}): {message}")]
    Provider { message: String, status: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for cafe-swipe operations
pub type Result<T> = std::result::Result<T, Error>;
