//! The tile grid: an N×N matrix of cells.
//!
//! A cell holds `0` (empty) or a power-of-two tile value ≥ 2. The size is
//! fixed at construction and never changes. Cells are stored row-major;
//! [`Position`] addresses them as (row, column).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A (row, column) coordinate inside a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An N×N grid of tiles, stored row-major.
///
/// Every mutation preserves the invariant that non-empty cells hold a
/// power of two ≥ 2.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<u64>,
}

/// Inline capacity covers the common 4×4 grid without heap allocation.
pub type EmptyIndices = SmallVec<[usize; 16]>;

fn assert_tile_value(value: u64) {
    assert!(
        value == 0 || (value >= 2 && value.is_power_of_two()),
        "Tile value must be 0 or a power of two >= 2, got {}",
        value
    );
}

impl Grid {
    /// Create an empty grid of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from rows of values, `0` meaning empty.
    ///
    /// Panics if the rows do not form a square matrix or contain a value
    /// that is not 0 or a power of two ≥ 2.
    #[must_use]
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            assert!(row.len() == size, "Grid rows must form a square matrix");
            for &value in row {
                assert_tile_value(value);
                cells.push(value);
            }
        }
        Self { size, cells }
    }

    /// Grid side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at a position; `0` means empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> u64 {
        self.cells[pos.x * self.size + pos.y]
    }

    /// Set the value at a position; `0` clears the cell.
    pub fn set(&mut self, pos: Position, value: u64) {
        debug_assert!(
            value == 0 || (value >= 2 && value.is_power_of_two()),
            "Tile value must be 0 or a power of two >= 2, got {}",
            value
        );
        self.cells[pos.x * self.size + pos.y] = value;
    }

    /// True if the cell at `pos` is empty.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// True iff at least one cell is empty.
    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|&v| v == 0)
    }

    /// Row-major indices of all empty cells.
    #[must_use]
    pub fn empty_indices(&self) -> EmptyIndices {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Convert a row-major index back into a position.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.size, index % self.size)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn count_nonempty(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values. Conserved by merging (two tiles of value
    /// `v` become one of `2v`).
    #[must_use]
    pub fn value_sum(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// The highest tile value on the grid, or 0 when empty.
    #[must_use]
    pub fn highest_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Raw row-major cell slice.
    #[must_use]
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Snapshot of the grid as rows, for rendering collaborators.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u64>> {
        (0..self.size)
            .map(|x| self.cells[x * self.size..(x + 1) * self.size].to_vec())
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.size {
            for y in 0..self.size {
                let value = self.cells[x * self.size + y];
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
