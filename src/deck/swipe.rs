//! Swipe gesture state machine
//!
//! A pure state machine, independent of any UI toolkit: a thin adapter
//! feeds it drag start/move/end events with pointer coordinates, and it
//! answers with visual feedback during the drag and a decision at release.
//!
//! States: `idle → dragging → {accept, reject, idle}`. Committed outcomes
//! are terminal for the card; a cancelled drag returns the card to idle
//! and leaves it interactive.

use crate::constants::swipe::COMMIT_THRESHOLD;
use serde::Serialize;

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
}

/// Decision produced when a drag ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Swiped right past the threshold: save and advance
    CommittedAccept,
    /// Swiped left past the threshold: advance only
    CommittedReject,
    /// Released inside the threshold: card snaps back, no mutation
    Cancelled,
}

impl SwipeOutcome {
    /// Whether this outcome removes the card from the queue
    pub fn is_commit(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// Visual feedback for the card while dragging
///
/// Position follows the pointer; rotation and indicator opacity scale
/// with the horizontal displacement. Purely cosmetic; never a decision
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardVisual {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation_deg: f64,
    /// Opacity of the LIKE indicator, 0..=1
    pub like_opacity: f64,
    /// Opacity of the NOPE indicator, 0..=1
    pub nope_opacity: f64,
}

impl CardVisual {
    /// Card at rest
    pub fn resting() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation_deg: 0.0,
            like_opacity: 0.0,
            nope_opacity: 0.0,
        }
    }
}

/// Per-card gesture state
///
/// Transient: lives for one card's interaction and resets once the drag
/// resolves.
#[derive(Debug)]
pub struct SwipeGesture {
    phase: GesturePhase,
    origin: (f64, f64),
    delta_x: f64,
    delta_y: f64,
}

impl SwipeGesture {
    /// Fresh gesture in the idle phase
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
            origin: (0.0, 0.0),
            delta_x: 0.0,
            delta_y: 0.0,
        }
    }

    /// Current phase
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Begin a drag at the given pointer position
    pub fn drag_start(&mut self, x: f64, y: f64) {
        self.phase = GesturePhase::Dragging;
        self.origin = (x, y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
    }

    /// Continuous, non-blocking position update while dragging
    ///
    /// Ignored outside the dragging phase. Returns the visual state so the
    /// adapter can reposition the card.
    pub fn drag_move(&mut self, x: f64, y: f64) -> CardVisual {
        if self.phase == GesturePhase::Dragging {
            self.delta_x = x - self.origin.0;
            self.delta_y = y - self.origin.1;
        }
        self.visual()
    }

    /// End the drag and decide the outcome
    ///
    /// Only the horizontal component decides; the threshold is a strict
    /// inequality, so a release at exactly ±threshold cancels. The machine
    /// returns to idle either way (a committed card is removed by the
    /// caller, a cancelled card stays current).
    pub fn drag_end(&mut self) -> SwipeOutcome {
        let outcome = if self.phase != GesturePhase::Dragging {
            SwipeOutcome::Cancelled
        } else if self.delta_x > COMMIT_THRESHOLD {
            SwipeOutcome::CommittedAccept
        } else if self.delta_x < -COMMIT_THRESHOLD {
            SwipeOutcome::CommittedReject
        } else {
            SwipeOutcome::Cancelled
        };

        self.phase = GesturePhase::Idle;
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        outcome
    }

    /// Visual state for the current deltas
    pub fn visual(&self) -> CardVisual {
        if self.phase != GesturePhase::Dragging {
            return CardVisual::resting();
        }

        CardVisual {
            translate_x: self.delta_x,
            translate_y: self.delta_y,
            rotation_deg: self.delta_x / 10.0,
            like_opacity: (self.delta_x / COMMIT_THRESHOLD).clamp(0.0, 1.0),
            nope_opacity: (-self.delta_x / COMMIT_THRESHOLD).clamp(0.0, 1.0),
        }
    }
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new()
    }
}
