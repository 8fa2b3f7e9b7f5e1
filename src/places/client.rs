//! HTTP client for the places boundary
//!
//! Talks to the already-authenticated proxy (see [`crate::server`]); the
//! core never sees or handles the provider credential. All three endpoints
//! share one request helper and one provider-envelope check, so transport
//! failures, HTTP errors, and provider error payloads surface uniformly as
//! [`Error`] variants.

use crate::constants::photo;
use crate::error::{Error, Result};
use crate::geo::{Coordinates, ResolvedLocation};
use crate::places::{Candidate, PlaceDetail};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = "cafe-swipe/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the places boundary
///
/// Point `base_url` at the proxy for production, or at a mock server in
/// tests.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: reqwest::Client,
    base_url: String,
}

// Wire shapes: only the consumed fields, everything else ignored.

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
    formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    #[serde(default)]
    results: Vec<NearbyPlace>,
}

#[derive(Debug, Deserialize)]
struct NearbyPlace {
    place_id: String,
    name: String,
    geometry: Geometry,
    rating: Option<f64>,
    vicinity: Option<String>,
    photos: Option<Vec<PhotoRef>>,
}

#[derive(Debug, Deserialize)]
struct PhotoRef {
    photo_reference: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<DetailsResult>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    name: String,
    formatted_address: Option<String>,
    formatted_phone_number: Option<String>,
    website: Option<String>,
    opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    weekday_text: Vec<String>,
}

impl PlacesClient {
    /// Create a client pointed at the given boundary base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Geocode a free-text query
    ///
    /// Returns the first result (the boundary's ordering is trusted), or
    /// `None` when the query matched nothing.
    pub async fn geocode(&self, query: &str) -> Result<Option<ResolvedLocation>> {
        let body = self
            .get_json(&format!("/api/coords?query={}", urlencoding::encode(query)))
            .await?;
        let parsed: GeocodeResponse = serde_json::from_value(body)?;

        match parsed.results.into_iter().next() {
            Some(r) => {
                let coords = Coordinates::new(r.geometry.location.lat, r.geometry.location.lng);
                coords.validate()?;
                Ok(Some(ResolvedLocation {
                    coords,
                    label: r.formatted_address,
                }))
            }
            None => Ok(None),
        }
    }

    /// Fetch cafe candidates near a coordinate
    ///
    /// Radius and keyword are contract constants applied by the boundary.
    /// An empty result set is a valid terminal state, not an error.
    pub async fn nearby_search(&self, coords: Coordinates) -> Result<Vec<Candidate>> {
        let body = self
            .get_json(&format!(
                "/api/cafes?lat={}&lng={}",
                coords.lat, coords.lng
            ))
            .await?;
        let parsed: NearbyResponse = serde_json::from_value(body)?;

        debug!(count = parsed.results.len(), "Nearby search returned");

        parsed
            .results
            .into_iter()
            .map(|p| {
                let coords = Coordinates::new(p.geometry.location.lat, p.geometry.location.lng);
                coords.validate()?;
                Ok(Candidate {
                    id: p.place_id,
                    display_name: p.name,
                    coords,
                    rating: p.rating,
                    short_address: p.vicinity.unwrap_or_default(),
                    photo_reference: p
                        .photos
                        .and_then(|ps| ps.into_iter().next())
                        .map(|r| r.photo_reference),
                })
            })
            .collect()
    }

    /// Fetch extended attributes for one place
    ///
    /// Requests the fixed field set; no retry on failure.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetail> {
        let body = self
            .get_json(&format!(
                "/api/details?place_id={}",
                urlencoding::encode(place_id)
            ))
            .await?;
        let parsed: DetailsResponse = serde_json::from_value(body)?;

        let result = parsed.result.ok_or_else(|| Error::Provider {
            message: "details response carried no result".to_string(),
            status: "MISSING_RESULT".to_string(),
        })?;

        Ok(PlaceDetail {
            name: result.name,
            address: result.formatted_address,
            phone: result.formatted_phone_number,
            website: result.website,
            weekday_hours: result.opening_hours.map(|h| h.weekday_text),
        })
    }

    /// URL for a candidate's photo, or the placeholder when it has none
    pub fn photo_url(&self, photo_reference: Option<&str>) -> String {
        match photo_reference {
            Some(reference) => format!(
                "{}/api/photo?maxwidth={}&ref={}",
                self.base_url,
                photo::MAX_WIDTH,
                urlencoding::encode(reference)
            ),
            None => photo::PLACEHOLDER_URL.to_string(),
        }
    }

    /// Single boundary-calling helper: transport, HTTP status, JSON decode,
    /// and provider-envelope check in one place.
    async fn get_json(&self, path_and_query: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let response = self.client.get(&url).send().await?;
        let http_status = response.status();
        let body: Value = response.json().await?;

        if !http_status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("boundary request failed")
                .to_string();
            return Err(Error::Provider {
                message,
                status: http_status.as_u16().to_string(),
            });
        }

        Self::check_envelope(&body)?;
        Ok(body)
    }

    /// Reject provider-level error payloads so they are never mistaken for
    /// zero results. `ZERO_RESULTS` is a valid empty response.
    fn check_envelope(body: &Value) -> Result<()> {
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(Error::Provider {
                message: message.to_string(),
                status: "PROXY_ERROR".to_string(),
            });
        }

        match body.get("status").and_then(Value::as_str) {
            None | Some("OK") | Some("ZERO_RESULTS") => Ok(()),
            Some(status) => {
                let message = body
                    .get("error_message")
                    .and_then(Value::as_str)
                    .unwrap_or(status)
                    .to_string();
                Err(Error::Provider {
                    message,
                    status: status.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PlacesClient {
        PlacesClient::new(&server.uri()).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = PlacesClient::new("http://boundary.test/").unwrap();
        assert_eq!(
            client.photo_url(Some("abc")),
            "http://boundary.test/api/photo?maxwidth=400&ref=abc"
        );
    }

    #[test]
    fn test_photo_url_placeholder() {
        let client = PlacesClient::new("http://boundary.test").unwrap();
        assert!(client.photo_url(None).contains("placehold.co"));
    }

    #[test]
    fn test_envelope_accepts_ok_and_zero_results() {
        assert!(PlacesClient::check_envelope(&json!({"status": "OK"})).is_ok());
        assert!(PlacesClient::check_envelope(&json!({"status": "ZERO_RESULTS"})).is_ok());
        assert!(PlacesClient::check_envelope(&json!({"results": []})).is_ok());
    }

    #[test]
    fn test_envelope_rejects_provider_errors() {
        let err = PlacesClient::check_envelope(&json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }))
        .unwrap_err();

        match err {
            Error::Provider { message, status } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert!(message.contains("API key"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_geocode_first_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/coords"))
            .and(query_param("query", "Bhopal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [
                    {
                        "formatted_address": "Bhopal, Madhya Pradesh, India",
                        "geometry": {"location": {"lat": 23.26, "lng": 77.41}}
                    },
                    {
                        "formatted_address": "Bhopal Junction",
                        "geometry": {"location": {"lat": 23.27, "lng": 77.43}}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let location = client_for(&server)
            .geocode("Bhopal")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(location.label, "Bhopal, Madhya Pradesh, India");
        assert_eq!(location.coords.lat, 23.26);
        assert_eq!(location.coords.lng, 77.41);
    }

    #[tokio::test]
    async fn test_geocode_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/coords"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ZERO_RESULTS",
                "results": []
            })))
            .mount(&server)
            .await;

        let location = client_for(&server).geocode("xyzzy").await.unwrap();
        assert!(location.is_none());
    }

    #[tokio::test]
    async fn test_nearby_search_maps_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cafes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [
                    {
                        "place_id": "p1",
                        "name": "Cafe Aroma",
                        "geometry": {"location": {"lat": 23.25, "lng": 77.40}},
                        "rating": 4.5,
                        "vicinity": "MP Nagar",
                        "photos": [{"photo_reference": "ref-1"}]
                    },
                    {
                        "place_id": "p2",
                        "name": "Brew House",
                        "geometry": {"location": {"lat": 23.27, "lng": 77.42}}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let candidates = client_for(&server)
            .nearby_search(Coordinates::new(23.26, 77.41))
            .await
            .unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, "p1");
        assert_eq!(candidates[0].rating, Some(4.5));
        assert_eq!(candidates[0].photo_reference.as_deref(), Some("ref-1"));
        assert_eq!(candidates[1].display_name, "Brew House");
        assert_eq!(candidates[1].short_address, "");
        assert!(candidates[1].photo_reference.is_none());
    }

    #[tokio::test]
    async fn test_geocode_rejects_out_of_range_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/coords"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [{
                    "formatted_address": "Nowhere",
                    "geometry": {"location": {"lat": 95.0, "lng": 77.41}}
                }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).geocode("Nowhere").await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_nearby_search_rejects_out_of_range_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cafes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [{
                    "place_id": "p1",
                    "name": "Cafe Aroma",
                    "geometry": {"location": {"lat": 23.25, "lng": -200.0}}
                }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .nearby_search(Coordinates::new(23.26, 77.41))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_nearby_search_empty_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cafes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ZERO_RESULTS",
                "results": []
            })))
            .mount(&server)
            .await;

        let candidates = client_for(&server)
            .nearby_search(Coordinates::new(0.0, 0.0))
            .await
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_nearby_search_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cafes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OVER_QUERY_LIMIT",
                "error_message": "You have exceeded your daily request quota."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .nearby_search(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Provider { ref status, .. } if status == "OVER_QUERY_LIMIT"));
    }

    #[tokio::test]
    async fn test_place_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/details"))
            .and(query_param("place_id", "p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "result": {
                    "name": "Cafe Aroma",
                    "formatted_address": "12 MP Nagar, Bhopal",
                    "formatted_phone_number": "075 5123 4567",
                    "website": "https://cafearoma.example",
                    "opening_hours": {
                        "weekday_text": ["Monday: 8 AM – 10 PM", "Tuesday: 8 AM – 10 PM"]
                    }
                }
            })))
            .mount(&server)
            .await;

        let detail = client_for(&server).place_details("p1").await.unwrap();
        assert_eq!(detail.name, "Cafe Aroma");
        assert_eq!(detail.address.as_deref(), Some("12 MP Nagar, Bhopal"));
        assert_eq!(detail.weekday_hours.as_ref().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_place_details_missing_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/details"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "OK"})))
            .mount(&server)
            .await;

        let err = client_for(&server).place_details("p1").await.unwrap_err();
        assert!(matches!(err, Error::Provider { .. }));
    }

    #[tokio::test]
    async fn test_proxy_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cafes"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "API key is not configured."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .nearby_search(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();

        match err {
            Error::Provider { message, status } => {
                assert_eq!(status, "500");
                assert!(message.contains("API key"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }
}
