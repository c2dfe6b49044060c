//! Grid positions and movement directions.
//!
//! Positions are signed so that direction arithmetic can step off the board;
//! the grid decides what is in bounds, not the position type.

use serde::{Deserialize, Serialize};

/// A (row, column) cell coordinate.
///
/// Field order matters: the derived `Ord` gives row-major ordering, which is
/// the canonical processing order for movers and interaction cells.
///
/// ```
/// use rulegrid::core::Position;
///
/// let a = Position::new(0, 5);
/// let b = Position::new(1, 0);
/// assert!(a < b); // row-major: earlier row wins
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent position one step in `direction`.
    ///
    /// May land outside any grid; callers bounds-check.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (row, column) delta for one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let p = Position::new(3, 3);

        assert_eq!(p.step(Direction::Up), Position::new(2, 3));
        assert_eq!(p.step(Direction::Down), Position::new(4, 3));
        assert_eq!(p.step(Direction::Left), Position::new(3, 2));
        assert_eq!(p.step(Direction::Right), Position::new(3, 4));
    }

    #[test]
    fn test_step_can_go_negative() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.step(Direction::Up), Position::new(-1, 0));
        assert_eq!(origin.step(Direction::Left), Position::new(0, -1));
    }

    #[test]
    fn test_row_major_ordering() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 0),
            Position::new(1, 2),
        ];
        positions.sort();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_serialization() {
        let p = Position::new(2, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
