//! Places boundary types
//!
//! The shapes the core consumes from the places/geocoding boundary. Only
//! the fields actually used are modeled; everything else the provider
//! returns is ignored.

pub mod client;

pub use client::PlacesClient;

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// A place returned by a nearby search, pending a swipe decision
///
/// Immutable after creation. Owned by the card queue while undecided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque provider-assigned id, unique within a result set
    pub id: String,
    pub display_name: String,
    pub coords: Coordinates,
    pub rating: Option<f64>,
    /// Short address line ("vicinity")
    pub short_address: String,
    /// Reference token for the boundary photo endpoint
    pub photo_reference: Option<String>,
}

/// Extended attributes fetched on demand for the details view
///
/// Not cached; discarded when the view closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// One line per weekday, in the provider's order
    pub weekday_hours: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_serialization() {
        let candidate = Candidate {
            id: "place-1".to_string(),
            display_name: "Cafe Aroma".to_string(),
            coords: Coordinates::new(23.26, 77.41),
            rating: Some(4.5),
            short_address: "MP Nagar, Bhopal".to_string(),
            photo_reference: None,
        };

        let json = serde_json::to_string(&candidate).unwrap();
        let parsed: Candidate = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, "place-1");
        assert_eq!(parsed.rating, Some(4.5));
        assert!(parsed.photo_reference.is_none());
    }

    #[test]
    fn test_detail_optional_fields() {
        let detail = PlaceDetail {
            name: "Cafe Aroma".to_string(),
            address: None,
            phone: None,
            website: None,
            weekday_hours: None,
        };

        let json = serde_json::to_string(&detail).unwrap();
        let parsed: PlaceDetail = serde_json::from_str(&json).unwrap();
        assert!(parsed.address.is_none());
    }
}
