use rand::Rng;

use crate::grid::{Grid, Position};
use crate::snake::SnakeBody;

/// Rejection-samples a free cell for the next food.
///
/// Draws uniformly random cells until one misses the body. Normal play ends
/// by collision long before the body covers the field, so the free-cell
/// precondition is asserted up front instead of risking an unbounded loop.
///
/// # Panics
///
/// Panics when `body` occupies every cell of `grid`.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: Grid, body: &SnakeBody) -> Position {
    assert!(
        body.segment_count() < grid.total_cells(),
        "place_food: no free cell left on a {side}x{side} grid",
        side = grid.side(),
    );

    loop {
        let candidate = grid.random_position(rng);
        if !body.contains(candidate) {
            return candidate;
        }
    }
}
