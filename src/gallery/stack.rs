//! The ordered card deck and the live drag offset
//!
//! Index 0 is the front card (interactive, fully visible); higher indices
//! sit behind it. The deck's length is fixed for the lifetime of a screen
//! instance: the only mutation is rotating the front card to the back.

use tracing::debug;

use crate::primitives::Vec2;

#[derive(Debug, Clone)]
pub struct CardStack {
    cards: Vec<String>,
    drag: Vec2,
}

impl CardStack {
    /// Build a stack from the catalog's image list, front first.
    ///
    /// The surrounding screen must seed at least one card; an empty deck is
    /// a precondition violation.
    pub fn new(cards: Vec<String>) -> Self {
        debug_assert!(!cards.is_empty(), "card stack seeded empty");
        Self {
            cards,
            drag: Vec2::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Read-only snapshot of the current order, front to back
    pub fn order(&self) -> &[String] {
        &self.cards
    }

    pub fn front(&self) -> &str {
        &self.cards[0]
    }

    /// Move the front card to the back, shifting every other card's depth
    /// down by one. Cyclic with period = deck length.
    pub fn rotate_front_to_back(&mut self) {
        self.cards.rotate_left(1);
        debug!(front = %self.front(), "deck rotated");
    }

    /// Live pointer delta of the active drag; zero when no drag is active
    pub fn drag(&self) -> Vec2 {
        self.drag
    }

    pub fn set_drag(&mut self, drag: Vec2) {
        self.drag = drag;
    }

    pub fn clear_drag(&mut self) {
        self.drag = Vec2::ZERO;
    }
}
