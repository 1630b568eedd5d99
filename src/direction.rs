/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit `(row, col)` delta one step in this direction moves.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Single-slot holder for the direction applied on the next step.
///
/// Requests that exactly reverse the latest accepted direction are silently
/// discarded rather than rejected with an error: rapid or redundant key input
/// is normal play, not misuse. Requests and reads are serialized through the
/// same loop that drives the simulation, so a request is always either fully
/// visible or not yet visible to a given step.
#[derive(Debug, Clone, Copy)]
pub struct DirectionGate {
    current: Direction,
}

impl DirectionGate {
    /// Creates a gate starting out in `initial`.
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self { current: initial }
    }

    /// Accepts `requested` unless it reverses the latest accepted direction.
    pub fn request(&mut self, requested: Direction) {
        if requested == self.current.opposite() {
            return;
        }
        self.current = requested;
    }

    /// Returns the latest accepted direction.
    #[must_use]
    pub fn current(self) -> Direction {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, DirectionGate};

    #[test]
    fn opposite_is_involutive() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dr, dc) = direction.delta();
            let (or, oc) = direction.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn gate_discards_exact_reversal() {
        let mut gate = DirectionGate::new(Direction::Up);

        gate.request(Direction::Down);

        assert_eq!(gate.current(), Direction::Up);
    }

    #[test]
    fn gate_accepts_perpendicular_turns() {
        let mut gate = DirectionGate::new(Direction::Up);

        gate.request(Direction::Left);
        assert_eq!(gate.current(), Direction::Left);

        gate.request(Direction::Down);
        assert_eq!(gate.current(), Direction::Down);
    }

    #[test]
    fn reversal_check_tracks_the_latest_accepted_direction() {
        let mut gate = DirectionGate::new(Direction::Up);

        // Right is accepted, so Left now counts as a reversal even though
        // it would have been legal against the original Up.
        gate.request(Direction::Right);
        gate.request(Direction::Left);

        assert_eq!(gate.current(), Direction::Right);
    }
}
