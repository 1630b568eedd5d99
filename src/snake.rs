use std::collections::VecDeque;

use crate::grid::Position;

/// Ordered snake body, head first, tail last.
///
/// All positions are pairwise distinct at every observable point: growth
/// inserts the new head without touching the tail, so no transient duplicate
/// ever exists. Keeping that invariant is the engine's job; the body only
/// provides the two advance primitives and occupancy testing.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    segments: VecDeque<Position>,
}

impl SnakeBody {
    /// Creates a one-cell body at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(start);
        Self { segments }
    }

    /// Creates a body from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            segments: VecDeque::from(segments),
        }
    }

    /// Returns the head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    /// Inserts `new_head` and keeps the tail: length grows by one.
    pub fn advance_grow(&mut self, new_head: Position) {
        self.segments.push_front(new_head);
    }

    /// Inserts `new_head` and vacates the tail cell: length is unchanged.
    pub fn advance_move(&mut self, new_head: Position) {
        self.segments.push_front(new_head);
        let _ = self.segments.pop_back();
    }

    /// Returns the current segment count, always at least one.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}
