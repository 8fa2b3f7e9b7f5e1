//! Application-state controller
//!
//! One [`Session`] owns all mutable state: the places client, the location
//! resolver, the card queue, the in-flight gesture, the favorites store,
//! and the status reflected to the presentation layer. Everything runs on
//! a single cooperative task; a request token guards the queue against
//! late-arriving stale fetch responses.

use crate::constants::swipe::EXIT_DELAY_MS;
use crate::deck::swipe::{CardVisual, SwipeGesture, SwipeOutcome};
use crate::deck::CardQueue;
use crate::error::{Error, Result};
use crate::favorites::{FavoriteEntry, FavoritesStore};
use crate::geo::resolver::LocationResolver;
use crate::geo::{DeviceLocator, LocationSource, ResolvedLocation};
use crate::places::client::PlacesClient;
use crate::places::{Candidate, PlaceDetail};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

// User-facing status strings
const MSG_FINDING_LOCATION: &str = "Finding your location...";
const MSG_FINDING_CAFES: &str = "Finding nearby cafes...";
const MSG_NO_CAFES: &str = "No cafes found nearby.";
const MSG_ALL_SEEN: &str = "You've seen all the cafes! Try a new search.";
const MSG_LOCATION_DENIED: &str = "Location access denied or unavailable.";
const MSG_LOCATION_ERROR: &str = "Error fetching location data.";
const MSG_CAFES_ERROR: &str = "Error fetching cafes.";

/// State reflected into the card area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing requested yet
    Idle,
    /// A resolve or fetch is in flight
    Loading(String),
    /// Cards are available; the head of the queue is interactive
    Browsing,
    /// A valid but empty state (zero results, or deck exhausted)
    Empty(String),
    /// A resolve/fetch failed; retried only by a new user action
    Error(String),
}

/// The swipe-discovery session
pub struct Session {
    client: PlacesClient,
    resolver: LocationResolver,
    favorites: FavoritesStore,
    queue: CardQueue,
    gesture: SwipeGesture,
    status: Status,
    location_label: Option<String>,
    /// Latest issued fetch token; responses with older tokens are stale
    issued: u64,
}

impl Session {
    /// Create a session from its collaborators
    pub fn new(client: PlacesClient, resolver: LocationResolver, favorites: FavoritesStore) -> Self {
        Self {
            client,
            resolver,
            favorites,
            queue: CardQueue::new(),
            gesture: SwipeGesture::new(),
            status: Status::Idle,
            location_label: None,
            issued: 0,
        }
    }

    /// Current presentation status
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The interactive card, if any
    pub fn current_card(&self) -> Option<&Candidate> {
        self.queue.current()
    }

    /// Number of undecided cards
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Iterate the undecided cards in queue order
    pub fn cards(&self) -> impl Iterator<Item = &Candidate> {
        self.queue.iter()
    }

    /// Saved favorites
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Label of the location results are shown for
    pub fn location_label(&self) -> Option<&str> {
        self.location_label.as_deref()
    }

    /// Search near the device's current position (cache-first)
    pub async fn search_here<D: DeviceLocator>(&mut self, device: &D) -> Result<()> {
        self.status = Status::Loading(MSG_FINDING_LOCATION.to_string());

        match self
            .resolver
            .resolve(&LocationSource::Device, &self.client, device)
            .await
        {
            Ok(location) => self.run_search(location).await,
            Err(e) => {
                self.status = Status::Error(resolve_error_message(&e));
                Err(e)
            }
        }
    }

    /// Search near a geocoded free-text query
    pub async fn search_text(&mut self, query: &str) -> Result<()> {
        self.status = Status::Loading(format!("Searching for {}...", query));

        match self.resolver.resolve_query(query, &self.client).await {
            Ok(location) => self.run_search(location).await,
            Err(e) => {
                self.status = Status::Error(resolve_error_message(&e));
                Err(e)
            }
        }
    }

    async fn run_search(&mut self, location: ResolvedLocation) -> Result<()> {
        info!(label = %location.label, "Resolved search location");
        self.location_label = Some(location.label);
        self.status = Status::Loading(MSG_FINDING_CAFES.to_string());

        let token = self.begin_fetch();
        let result = self.client.nearby_search(location.coords).await;
        self.apply_fetch(token, result)
    }

    /// Issue a fetch token. A new search supersedes any in-flight one.
    fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply a fetch outcome, unless a newer fetch has been issued since.
    ///
    /// The queue is replaced wholesale; stale responses are discarded here
    /// rather than cancelled at the transport level.
    fn apply_fetch(&mut self, token: u64, result: Result<Vec<Candidate>>) -> Result<()> {
        if token != self.issued {
            debug!(token, latest = self.issued, "Discarding stale fetch response");
            return Ok(());
        }

        match result {
            Ok(candidates) if candidates.is_empty() => {
                self.queue.load(Vec::new());
                self.status = Status::Empty(MSG_NO_CAFES.to_string());
                Ok(())
            }
            Ok(candidates) => {
                info!(count = candidates.len(), "Loaded card queue");
                self.queue.load(candidates);
                self.gesture = SwipeGesture::new();
                self.status = Status::Browsing;
                Ok(())
            }
            Err(e) => {
                // Provider and network failures collapse to one user-facing
                // message; the distinction stays in the logs.
                warn!(error = %e, "Nearby fetch failed");
                self.status = Status::Error(MSG_CAFES_ERROR.to_string());
                Err(e)
            }
        }
    }

    /// Begin dragging the current card
    pub fn drag_start(&mut self, x: f64, y: f64) {
        if self.queue.current().is_some() {
            self.gesture.drag_start(x, y);
        }
    }

    /// Update the drag position; returns visual feedback for the card
    pub fn drag_move(&mut self, x: f64, y: f64) -> CardVisual {
        self.gesture.drag_move(x, y)
    }

    /// End the drag and act on the decision
    ///
    /// Accept saves the current card to favorites (idempotent) before the
    /// queue advances; reject advances only; cancel leaves the card
    /// current. Committed advancement waits out the exit animation so the
    /// next card does not pop in under the outgoing one.
    pub async fn finish_drag(&mut self) -> Result<SwipeOutcome> {
        let outcome = self.gesture.drag_end();

        match outcome {
            SwipeOutcome::CommittedAccept => {
                if let Some(card) = self.queue.current() {
                    let photo_url = self.client.photo_url(card.photo_reference.as_deref());
                    let entry = FavoriteEntry::from_candidate(card, photo_url);
                    self.favorites.upsert(entry)?;
                }
                self.advance_after_exit().await;
            }
            SwipeOutcome::CommittedReject => {
                self.advance_after_exit().await;
            }
            SwipeOutcome::Cancelled => {}
        }

        Ok(outcome)
    }

    async fn advance_after_exit(&mut self) {
        sleep(Duration::from_millis(EXIT_DELAY_MS)).await;
        self.queue.advance();

        if self.queue.is_empty() {
            self.status = Status::Empty(MSG_ALL_SEEN.to_string());
        }
    }

    /// Fetch extended attributes for the details view
    ///
    /// Scoped to that view: failures never touch the queue or the current
    /// card, which is why this takes `&self`.
    pub async fn card_details(&self, place_id: &str) -> Result<PlaceDetail> {
        self.client.place_details(place_id).await
    }
}

/// Map a resolve failure to its user-visible message
fn resolve_error_message(error: &Error) -> String {
    match error {
        Error::PermissionDenied(_) => MSG_LOCATION_DENIED.to_string(),
        Error::NotFound(query) => format!("Could not find location: {}", query),
        _ => MSG_LOCATION_ERROR.to_string(),
    }
}
