//! Proxy API routes
//!
//! Each route forwards one provider endpoint server-to-server, injecting
//! the credential so the front end never sees it. Provider JSON bodies are
//! passed back verbatim; only transport failures and a missing credential
//! produce proxy-shaped `{"error": ...}` bodies.

use crate::constants::{details, photo, search};
use crate::server::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the proxy router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/coords", get(coords_handler))
        .route("/api/cafes", get(cafes_handler))
        .route("/api/details", get(details_handler))
        .route("/api/photo", get(photo_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct CoordsParams {
    query: String,
}

#[derive(Debug, Deserialize)]
struct CafesParams {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct DetailsParams {
    place_id: String,
}

#[derive(Debug, Deserialize)]
struct PhotoParams {
    #[serde(rename = "ref")]
    reference: String,
    maxwidth: Option<u32>,
}

fn missing_key_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "API key is not configured."})),
    )
        .into_response()
}

/// Forward one provider request and pass its JSON body back verbatim
///
/// The upstream URL contains the credential and must never be logged.
async fn proxy_get(state: &AppState, url: String, failure_message: &str) -> Response {
    let result = async {
        let response = state.http.get(&url).send().await?;
        response.json::<Value>().await
    }
    .await;

    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            warn!(error = %e.without_url(), "Upstream provider request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": failure_message})),
            )
                .into_response()
        }
    }
}

/// Geocode a location query
///
/// GET /api/coords?query=
async fn coords_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CoordsParams>,
) -> Response {
    let Some(key) = state.api_key() else {
        return missing_key_response();
    };

    let url = format!(
        "{}/maps/api/geocode/json?address={}&key={}",
        state.upstream(),
        urlencoding::encode(&params.query),
        key
    );

    proxy_get(&state, url, "Failed to connect to the Geocoding API.").await
}

/// Nearby cafe search with the fixed radius and keyword
///
/// GET /api/cafes?lat=&lng=
async fn cafes_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CafesParams>,
) -> Response {
    let Some(key) = state.api_key() else {
        return missing_key_response();
    };

    let url = format!(
        "{}/maps/api/place/nearbysearch/json?location={},{}&radius={}&keyword={}&key={}",
        state.upstream(),
        params.lat,
        params.lng,
        search::RADIUS_METERS,
        search::KEYWORD,
        key
    );

    proxy_get(&state, url, "Failed to fetch data from Google Maps API.").await
}

/// Place details with the fixed field list
///
/// GET /api/details?place_id=
async fn details_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetailsParams>,
) -> Response {
    let Some(key) = state.api_key() else {
        return missing_key_response();
    };

    let url = format!(
        "{}/maps/api/place/details/json?place_id={}&fields={}&key={}",
        state.upstream(),
        urlencoding::encode(&params.place_id),
        details::FIELDS,
        key
    );

    proxy_get(&state, url, "Failed to connect to the Place Details API.").await
}

/// Redirect to the provider photo endpoint
///
/// GET /api/photo?ref=&maxwidth=
async fn photo_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PhotoParams>,
) -> Response {
    let Some(key) = state.api_key() else {
        return missing_key_response();
    };

    let url = format!(
        "{}/maps/api/place/photo?maxwidth={}&photoreference={}&key={}",
        state.upstream(),
        params.maxwidth.unwrap_or(photo::MAX_WIDTH),
        urlencoding::encode(&params.reference),
        key
    );

    Redirect::temporary(&url).into_response()
}
