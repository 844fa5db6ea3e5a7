//! The move-cycle state machine wrapping the pure grid operations.
//!
//! A [`GridEngine`] owns one game: configuration, state, and the
//! deterministic RNG. Each directional input runs one complete
//! combine → slide → win check → spawn → terminal check sequence to
//! completion. The engine is single-owner and not internally
//! synchronized; embed it behind a mutex if a multi-threaded host
//! needs shared access.

pub mod ops;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{
    Direction, EngineConfig, GameRng, GameRngState, GameState, Grid, Position, SpawnPolicy, Status,
};

pub use ops::CombinePass;

/// Tiles spawned when a game starts or resets.
const INITIAL_SPAWNS: usize = 2;

/// What a single directional input did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the move changed the grid (merged or moved a tile).
    /// False for inputs ignored in a terminal state.
    pub changed: bool,
    /// Whether any tiles merged.
    pub merged: bool,
    /// Whether any tile slid to a new cell.
    pub moved: bool,
    /// Score gained by this move.
    pub score_delta: u64,
    /// The spawned tile, when the spawn policy admitted one.
    pub spawned: Option<(Position, u64)>,
}

impl MoveOutcome {
    fn ignored() -> Self {
        Self {
            changed: false,
            merged: false,
            moved: false,
            score_delta: 0,
            spawned: None,
        }
    }
}

/// Serializable snapshot of a whole engine, RNG stream included.
///
/// Restoring a snapshot and replaying the same inputs reproduces the
/// exact same game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Engine configuration.
    pub config: EngineConfig,
    /// Grid, score, and status.
    pub state: GameState,
    /// RNG stream position.
    pub rng: GameRngState,
}

/// The rule engine for one sliding-tile merge game.
///
/// ```
/// use gridmerge::core::{Direction, EngineConfig};
/// use gridmerge::engine::GridEngine;
///
/// let mut engine = GridEngine::new(EngineConfig::new(4).with_win_threshold(2048), 42);
/// assert_eq!(engine.grid().count_nonempty(), 2);
///
/// let outcome = engine.apply_move(Direction::Left);
/// assert_eq!(outcome.changed, outcome.merged || outcome.moved);
/// ```
#[derive(Clone, Debug)]
pub struct GridEngine {
    config: EngineConfig,
    state: GameState,
    rng: GameRng,
}

impl GridEngine {
    /// Create an engine and deal the two initial tiles.
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        let mut engine = Self {
            state: GameState::new(config.size),
            rng: GameRng::new(seed),
            config,
        };
        engine.spawn_initial();
        engine
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only view of the grid, for rendering.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    /// Current cumulative score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status
    }

    /// True once no move remains.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.status == Status::GameOver
    }

    /// True once a tile reached the configured win threshold.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.status == Status::Won
    }

    /// Clear the grid, score, and status, then deal fresh initial tiles.
    ///
    /// The RNG stream continues; restarting does not replay the previous
    /// game's spawns.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.config.size);
        self.spawn_initial();
        debug!("game reset, {} tiles dealt", self.grid().count_nonempty());
    }

    /// Apply one directional input.
    ///
    /// While playing: combine, slide, check the win threshold, spawn per
    /// the configured policy, then check for game over. In a terminal
    /// state the input is ignored and the outcome reports no change.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.status.is_over() {
            debug!("ignoring {} input in terminal state", direction);
            return MoveOutcome::ignored();
        }

        let pass = ops::combine(&mut self.state.grid, direction);
        self.state.score += pass.score_delta;
        let moved = ops::slide(&mut self.state.grid, direction);
        let changed = pass.merged || moved;

        // Win detection happens here, right after the slide, rather than
        // during any later rendering pass.
        if let Some(threshold) = self.config.win_threshold {
            if self.state.grid.highest_tile() >= threshold {
                self.state.status = Status::Won;
                info!("won: tile {} reached", threshold);
            }
        }

        let mut spawned = None;
        if self.state.status == Status::Playing {
            let admit = match self.config.spawn_policy {
                SpawnPolicy::OnChange => changed,
                SpawnPolicy::Always => true,
            };
            if admit {
                spawned = ops::spawn(&mut self.state.grid, &mut self.rng);
            }
            if ops::is_terminal(&self.state.grid, self.config.merge_check) {
                self.state.status = Status::GameOver;
                info!("game over at score {}", self.state.score);
            }
        }

        debug!(
            "{}: merged={} moved={} score={} spawned={:?}",
            direction, pass.merged, moved, self.state.score, spawned
        );

        MoveOutcome {
            changed,
            merged: pass.merged,
            moved,
            score_delta: pass.score_delta,
            spawned,
        }
    }

    /// Capture a snapshot of the engine, including the RNG position.
    #[must_use]
    pub fn checkpoint(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    #[must_use]
    pub fn restore(snapshot: EngineSnapshot) -> Self {
        Self {
            rng: GameRng::from_state(&snapshot.rng),
            config: snapshot.config,
            state: snapshot.state,
        }
    }

    fn spawn_initial(&mut self) {
        for _ in 0..INITIAL_SPAWNS {
            ops::spawn(&mut self.state.grid, &mut self.rng);
        }
    }
}
