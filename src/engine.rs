use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DEFAULT_START_DIRECTION;
use crate::direction::{Direction, DirectionGate};
use crate::food::place_food;
use crate::grid::{Grid, Position};
use crate::snake::SnakeBody;

/// Why a finished session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndCause {
    WallCollision,
    SelfCollision,
}

/// Session lifecycle. Both `Over` variants are terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over(EndCause),
}

/// Complete mutable simulation state for one session.
///
/// The engine is the sole mutator of the body, food, and status. Collisions
/// are not errors: they are expected terminal state transitions surfaced
/// through [`GameStatus`]. A finished engine simply stops responding to
/// ticks; starting over means discarding it and constructing a fresh one.
#[derive(Debug, Clone)]
pub struct Engine {
    pub body: SnakeBody,
    pub food: Position,
    pub status: GameStatus,
    pub gate: DirectionGate,
    grid: Grid,
    rng: StdRng,
}

impl Engine {
    /// Creates an entropy-seeded session.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible play.
    #[must_use]
    pub fn new_with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, mut rng: StdRng) -> Self {
        let body = SnakeBody::new(grid.random_position(&mut rng));
        let food = place_food(&mut rng, grid, &body);

        Self {
            body,
            food,
            status: GameStatus::Running,
            gate: DirectionGate::new(DEFAULT_START_DIRECTION),
            grid,
            rng,
        }
    }

    /// Returns the playing field.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Forwards a direction request from the input collaborator.
    ///
    /// The gate silently discards exact reversals; requests arriving after
    /// the session ended are ignored.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.gate.request(direction);
        }
    }

    /// Advances the simulation by one tick. A no-op once the session is over.
    pub fn step(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        let direction = self.gate.current();
        let (dr, dc) = direction.delta();
        let head = self.body.head();
        let candidate = Position {
            row: head.row + dr,
            col: head.col + dc,
        };

        // Bounds first: an out-of-range candidate is a wall hit even if it
        // would also alias a body cell.
        if !self.grid.contains(candidate) {
            self.status = GameStatus::Over(EndCause::WallCollision);
            return;
        }

        // Tested against the pre-step body, tail included: the tail has not
        // moved yet, so entering the cell it is about to vacate still counts.
        if self.body.contains(candidate) {
            self.status = GameStatus::Over(EndCause::SelfCollision);
            return;
        }

        if candidate == self.food {
            self.body.advance_grow(candidate);
            // The exclusion set is the grown body, new head included.
            self.food = place_food(&mut self.rng, self.grid, &self.body);
        } else {
            self.body.advance_move(candidate);
        }
    }
}
