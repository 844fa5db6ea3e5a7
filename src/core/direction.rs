//! Move directions and grid stepping.
//!
//! A `Direction` maps to a unit offset in (row, column) space:
//! Up=(-1,0), Down=(1,0), Left=(0,-1), Right=(0,1). All grid walking
//! (sliding, farthest-empty search) goes through [`Direction::step`],
//! which performs the boundary check before any cell is touched.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// A direction to shift/merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset as (delta row, delta column).
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// True for `Up`/`Down` (the row coordinate changes).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Step one cell from `pos` inside an N×N grid.
    ///
    /// Returns `None` when the step would leave the grid.
    #[must_use]
    pub fn step(self, pos: Position, size: usize) -> Option<Position> {
        let (dx, dy) = self.offset();
        let x = pos.x as isize + dx;
        let y = pos.y as isize + dy;
        if x < 0 || y < 0 || x >= size as isize || y >= size as isize {
            None
        } else {
            Some(Position::new(x as usize, y as usize))
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}
