//! Pure grid transformations: combine, slide, spawn, and terminal checks.
//!
//! All functions here mutate (or inspect) a [`Grid`] directly and carry no
//! other state, so every behavior is testable without an engine instance.
//!
//! Combining and sliding are deliberately separate passes:
//!
//! - [`combine`] merges equal tiles along each scan line, treating empty
//!   cells as transparent. It always scans in ascending index order;
//!   direction only selects the axis.
//! - [`slide`] then moves every tile as far as it can travel toward the
//!   destination edge. It scans destination-first, so direction controls
//!   both the axis and the sign.
//!
//! The asymmetry is intentional and load-bearing: merging ascending-index
//! duplicates followed by a directional slide reproduces the original
//! game's move semantics exactly.

use crate::core::{Direction, GameRng, Grid, MergeCheck, Position};

/// Result of one combine pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombinePass {
    /// Whether any merge occurred.
    pub merged: bool,
    /// Total value added to the score (sum of all doubled tiles).
    pub score_delta: u64,
}

/// Merge equal tiles along every scan line for `direction`.
///
/// Within a line, each non-empty tile is compared against the nearest
/// preceding non-empty tile (the "candidate"); empty cells between them
/// are transparent. On a match the candidate doubles in place, the
/// current cell clears, and the candidate resets - a just-merged tile
/// cannot merge again in the same pass.
///
/// Tiles are not moved; that is [`slide`]'s job.
pub fn combine(grid: &mut Grid, direction: Direction) -> CombinePass {
    let n = grid.size();
    let mut pass = CombinePass::default();

    if direction.is_vertical() {
        // Column lines, rows ascending.
        for y in 0..n {
            combine_line(grid, (0..n).map(|x| Position::new(x, y)), &mut pass);
        }
    } else {
        // Row lines, columns ascending.
        for x in 0..n {
            combine_line(grid, (0..n).map(|y| Position::new(x, y)), &mut pass);
        }
    }

    pass
}

fn combine_line<I>(grid: &mut Grid, line: I, pass: &mut CombinePass)
where
    I: Iterator<Item = Position>,
{
    let mut candidate: Option<Position> = None;
    for pos in line {
        let current = grid.get(pos);
        if current == 0 {
            continue;
        }
        match candidate {
            Some(prev) if grid.get(prev) == current => {
                grid.set(prev, 2 * current);
                grid.set(pos, 0);
                pass.score_delta += 2 * current;
                pass.merged = true;
                candidate = None;
            }
            _ => candidate = Some(pos),
        }
    }
}

/// Move every tile as far as possible toward the destination edge.
///
/// Tiles nearest the destination edge are processed first, so no tile is
/// moved twice or overwritten within one call. Returns whether any tile
/// moved.
pub fn slide(grid: &mut Grid, direction: Direction) -> bool {
    let n = grid.size();
    let mut moved = false;

    match direction {
        Direction::Up => {
            for y in 0..n {
                for x in 0..n {
                    moved |= slide_tile(grid, Position::new(x, y), direction);
                }
            }
        }
        Direction::Down => {
            for y in 0..n {
                for x in (0..n).rev() {
                    moved |= slide_tile(grid, Position::new(x, y), direction);
                }
            }
        }
        Direction::Right => {
            for x in 0..n {
                for y in (0..n).rev() {
                    moved |= slide_tile(grid, Position::new(x, y), direction);
                }
            }
        }
        Direction::Left => {
            for x in 0..n {
                for y in 0..n {
                    moved |= slide_tile(grid, Position::new(x, y), direction);
                }
            }
        }
    }

    moved
}

fn slide_tile(grid: &mut Grid, pos: Position, direction: Direction) -> bool {
    let value = grid.get(pos);
    if value == 0 {
        return false;
    }
    match find_farthest_empty(grid, pos, direction) {
        Some(dest) => {
            grid.set(dest, value);
            grid.set(pos, 0);
            true
        }
        None => false,
    }
}

/// Find the farthest empty cell reachable from `from` in `direction`.
///
/// Walks one step at a time, recording each empty cell; stops at the
/// grid edge or at the first non-empty cell (which is not recorded).
/// Returns `None` when no empty cell was reached.
#[must_use]
pub fn find_farthest_empty(grid: &Grid, from: Position, direction: Direction) -> Option<Position> {
    let mut farthest = None;
    let mut next = direction.step(from, grid.size());
    while let Some(pos) = next {
        if !grid.is_empty_at(pos) {
            break;
        }
        farthest = Some(pos);
        next = direction.step(pos, grid.size());
    }
    farthest
}

/// Place a new tile in a uniformly random empty cell.
///
/// The value is 2 or 4 with equal probability. Returns the position and
/// value, or `None` (a no-op) when the grid is full.
pub fn spawn(grid: &mut Grid, rng: &mut GameRng) -> Option<(Position, u64)> {
    let empties = grid.empty_indices();
    if empties.is_empty() {
        return None;
    }
    let index = empties[rng.gen_range_usize(0..empties.len())];
    let pos = grid.position_of(index);
    let value = 2 * rng.gen_range_usize(0..2) as u64 + 2;
    grid.set(pos, value);
    Some((pos, value))
}

/// Check whether any merge is available, per the configured check.
#[must_use]
pub fn possible_merge(grid: &Grid, check: MergeCheck) -> bool {
    match check {
        MergeCheck::Lockstep => possible_merge_lockstep(grid),
        MergeCheck::Exhaustive => possible_merge_exhaustive(grid),
    }
}

/// Faithful port of the original possible-combination scan.
///
/// For each index `x`, advances `y` over row `x` and column `x` in
/// lockstep, tracking the previous non-empty value seen on each axis.
/// A merge is reported when the current value on either axis equals
/// that axis's tracked previous value. Empty cells are transparent,
/// mirroring how [`combine`] treats gaps.
fn possible_merge_lockstep(grid: &Grid) -> bool {
    let n = grid.size();
    for x in 0..n {
        let mut previous_row: Option<u64> = None;
        let mut previous_col: Option<u64> = None;
        for y in 0..n {
            let current_row = grid.get(Position::new(x, y));
            let current_col = grid.get(Position::new(y, x));
            if current_row == 0 && current_col == 0 {
                continue;
            }
            if (current_row != 0 && Some(current_row) == previous_row)
                || (current_col != 0 && Some(current_col) == previous_col)
            {
                return true;
            }
            if current_row != 0 {
                previous_row = Some(current_row);
            }
            if current_col != 0 {
                previous_col = Some(current_col);
            }
        }
    }
    false
}

/// Strict orthogonal adjacency check: two equal tiles sharing an edge.
fn possible_merge_exhaustive(grid: &Grid) -> bool {
    let n = grid.size();
    for x in 0..n {
        for y in 0..n {
            let value = grid.get(Position::new(x, y));
            if value == 0 {
                continue;
            }
            if x + 1 < n && grid.get(Position::new(x + 1, y)) == value {
                return true;
            }
            if y + 1 < n && grid.get(Position::new(x, y + 1)) == value {
                return true;
            }
        }
    }
    false
}

/// True iff no empty cell remains and no merge is available.
#[must_use]
pub fn is_terminal(grid: &Grid, check: MergeCheck) -> bool {
    !grid.has_empty() && !possible_merge(grid, check)
}
