//! Game state: grid, cumulative score, and lifecycle status.
//!
//! The state is a plain value - cloning it snapshots the whole game.
//! All mutation goes through the engine's operations; rendering
//! collaborators only ever see `&GameState`.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Lifecycle status of a game.
///
/// `Won` and `GameOver` are both terminal: once set, directional input
/// is ignored until the game is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Accepting moves.
    #[default]
    Playing,
    /// A tile reached the configured win threshold.
    Won,
    /// No empty cell and no merge available.
    GameOver,
}

impl Status {
    /// True for `Won` and `GameOver`.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The tile grid.
    pub grid: Grid,

    /// Cumulative score: the sum of all merge results since reset.
    /// Monotonically increasing.
    pub score: u64,

    /// Lifecycle status.
    pub status: Status,
}

impl GameState {
    /// Create a fresh state with an empty N×N grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            score: 0,
            status: Status::Playing,
        }
    }

    /// True while moves are accepted.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(3);
        assert_eq!(state.grid.size(), 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, Status::Playing);
        assert!(state.is_playing());
    }

    #[test]
    fn test_status_is_over() {
        assert!(!Status::Playing.is_over());
        assert!(Status::Won.is_over());
        assert!(Status::GameOver.is_over());
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = GameState::new(2);
        state.grid.set(crate::core::Position::new(0, 1), 4);
        state.score = 12;

        let bytes = bincode::serialize(&state).unwrap();
        let back: GameState = bincode::deserialize(&bytes).unwrap();

        assert_eq!(state, back);
    }
}
