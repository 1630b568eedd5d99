use rand::Rng;

/// Grid position in logical cell coordinates, row-major.
///
/// Coordinates are signed so that a candidate head position one cell outside
/// the field stays representable until the bounds check rejects it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

/// Fixed-size square playing field.
///
/// The side length is set at construction and never changes for the lifetime
/// of a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    side: u16,
}

impl Grid {
    /// Creates a grid with `side` cells per edge.
    #[must_use]
    pub fn new(side: u16) -> Self {
        debug_assert!(side > 0);
        Self { side }
    }

    /// Returns the side length in cells.
    #[must_use]
    pub fn side(self) -> u16 {
        self.side
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.side) * usize::from(self.side)
    }

    /// Returns true when `position` lies inside the field.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < i32::from(self.side)
            && position.col < i32::from(self.side)
    }

    /// Draws a uniformly random cell.
    #[must_use]
    pub fn random_position<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        Position {
            row: i32::from(rng.gen_range(0..self.side)),
            col: i32::from(rng.gen_range(0..self.side)),
        }
    }
}
