//! cafe-swipe: Swipe-based nearby cafe discovery
//!
//! A library and CLI for finding cafes around a location and triaging them
//! one card at a time: swipe right to save a favorite, left to dismiss.
//!
//! ## Features
//!
//! - Location resolution from the device position (cached) or a text query
//! - Nearby cafe search through an already-authenticated boundary
//! - Swipe gesture interpretation with a fixed commit threshold
//! - Durable favorites with idempotent saves
//! - Boundary proxy server that keeps the provider credential server-side
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cafe_swipe::favorites::FavoritesStore;
//! use cafe_swipe::geo::resolver::LocationResolver;
//! use cafe_swipe::places::PlacesClient;
//! use cafe_swipe::session::Session;
//!
//! # async fn demo() -> cafe_swipe::Result<()> {
//! let client = PlacesClient::new("http://127.0.0.1:7878")?;
//! let mut session = Session::new(client, LocationResolver::new(), FavoritesStore::load()?);
//!
//! session.search_text("Bhopal").await?;
//! if let Some(card) = session.current_card() {
//!     println!("First up: {}", card.display_name);
//! }
//!
//! // Swipe the head card right to save it
//! session.drag_start(0.0, 0.0);
//! session.drag_move(180.0, -12.0);
//! let outcome = session.finish_drag().await?;
//! println!("Outcome: {:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod favorites;
pub mod geo;
pub mod places;
pub mod server;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use deck::swipe::{SwipeGesture, SwipeOutcome};
pub use error::{Error, Result};
pub use favorites::{FavoriteEntry, FavoritesStore};
pub use geo::{Coordinates, LocationSource, ResolvedLocation};
pub use places::{Candidate, PlaceDetail, PlacesClient};
pub use session::{Session, Status};
