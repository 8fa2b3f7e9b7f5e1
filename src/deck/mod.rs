//! Card queue and swipe gesture interpretation
//!
//! The queue holds not-yet-decided candidates in fetch order; the head is
//! the only interactive card. The gesture machine in [`swipe`] turns drag
//! events on that head card into commit/cancel decisions.

pub mod swipe;

use crate::places::Candidate;
use std::collections::VecDeque;

/// FIFO queue of pending candidates
///
/// Order is exactly fetch order; no reordering, filtering, or dedup
/// happens at this layer. Each fetch replaces the contents wholesale.
#[derive(Debug, Default)]
pub struct CardQueue {
    cards: VecDeque<Candidate>,
}

impl CardQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale with a new fetch result
    ///
    /// Resets to showing the new head, or to the empty state if the
    /// sequence is empty. Prior contents are discarded, never merged.
    pub fn load(&mut self, candidates: Vec<Candidate>) {
        self.cards = candidates.into();
    }

    /// The head of the queue: the only candidate currently interactive
    pub fn current(&self) -> Option<&Candidate> {
        self.cards.front()
    }

    /// Remove the head; the next candidate (if any) becomes current.
    /// No-op when already empty.
    pub fn advance(&mut self) -> Option<Candidate> {
        self.cards.pop_front()
    }

    /// Iterate the undecided candidates in queue order
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.cards.iter()
    }

    /// Number of undecided candidates
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
