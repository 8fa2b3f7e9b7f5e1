//! IP-based device location
//!
//! Uses ip-api.com as the platform location service for the CLI front end.
//! No caching here: the freshness window lives in the resolver's
//! [`LocationCache`](crate::geo::cache::LocationCache).

use crate::error::{Error, Result};
use crate::geo::{Coordinates, DeviceLocator};
use serde::Deserialize;

const IP_API_URL: &str = "http://ip-api.com/json";

/// IP geolocation service
#[derive(Debug)]
pub struct IpLocator {
    client: reqwest::Client,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpLocator {
    /// Create a new IP locator
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceLocator for IpLocator {
    async fn current_position(&self) -> Result<Coordinates> {
        let response = self
            .client
            .get(IP_API_URL)
            .send()
            .await
            .map_err(|e| Error::PermissionDenied(format!("IP location request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::PermissionDenied(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: IpApiResponse = response.json().await.map_err(|e| {
            Error::PermissionDenied(format!("Failed to parse IP location response: {}", e))
        })?;

        if data.status != "success" {
            return Err(Error::PermissionDenied(
                "IP location lookup failed".to_string(),
            ));
        }

        let lat = data
            .lat
            .ok_or_else(|| Error::PermissionDenied("No latitude in response".to_string()))?;
        let lng = data
            .lon
            .ok_or_else(|| Error::PermissionDenied("No longitude in response".to_string()))?;

        Ok(Coordinates::new(lat, lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_creation() {
        let locator = IpLocator::new();
        assert!(format!("{:?}", locator).contains("IpLocator"));
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"status":"success","lat":23.26,"lon":77.41,"city":"Bhopal"}"#;
        let parsed: IpApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.lat, Some(23.26));
    }

    #[tokio::test]
    #[ignore = "Requires network access to ip-api.com"]
    async fn test_locate() {
        let locator = IpLocator::new();
        let coords = locator.current_position().await.unwrap();
        assert!(coords.validate().is_ok());
    }
}
