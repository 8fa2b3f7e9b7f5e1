//! Server shared state
//!
//! Holds the upstream HTTP client and the provider credential. The
//! credential comes from the process environment (falling back to the
//! config file) and never leaves this module except inside upstream URLs.

use crate::config::Config;
use std::env;

/// Environment variable carrying the provider credential
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Default upstream provider base URL
const DEFAULT_UPSTREAM: &str = "https://maps.googleapis.com";

/// Shared state for the proxy server
pub struct AppState {
    /// Client for server-to-server provider requests
    pub http: reqwest::Client,
    api_key: String,
    upstream: String,
}

impl AppState {
    /// Create state for the production provider
    ///
    /// The credential is read from the environment first, then from the
    /// config file. An empty value means "not configured"; handlers answer
    /// requests with an error rather than failing startup.
    pub fn new(config: &Config) -> Self {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| config.api_keys.google.clone());

        Self {
            http: reqwest::Client::new(),
            api_key,
            upstream: DEFAULT_UPSTREAM.to_string(),
        }
    }

    /// Create state with an explicit key and upstream (for testing)
    pub fn with_upstream(api_key: &str, upstream: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            upstream: upstream.trim_end_matches('/').to_string(),
        }
    }

    /// The configured credential, or `None` when unset
    pub fn api_key(&self) -> Option<&str> {
        if self.api_key.is_empty() {
            None
        } else {
            Some(&self.api_key)
        }
    }

    /// Upstream provider base URL
    pub fn upstream(&self) -> &str {
        &self.upstream
    }
}
