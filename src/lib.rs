//! # gridmerge
//!
//! Rule engine for a 2048-style sliding-tile merge puzzle: an N×N grid
//! of power-of-two tiles that merges equal values when shifted in one of
//! four directions, then spawns a new tile in a random empty cell.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: The grid math (`engine::ops`) has zero I/O. Every
//!    transformation is a function over a grid, testable in isolation.
//!
//! 2. **Owned state, no singletons**: A [`engine::GridEngine`] instance
//!    owns one game - grid, score, status, RNG - and is created per game
//!    rather than living in module-level state.
//!
//! 3. **Deterministic**: All randomness flows through a seeded ChaCha8
//!    RNG, so a full game replays from (seed, move sequence) and engine
//!    snapshots restore mid-game.
//!
//! 4. **Configuration over convention**: Grid size, win threshold, spawn
//!    gating, and the merge-availability check are all set via
//!    [`core::EngineConfig`].
//!
//! ## Modules
//!
//! - `core`: Grid, directions, state, RNG, configuration
//! - `engine`: Pure grid operations and the move-cycle state machine
//! - `session`: Collaborator boundary - key mapping, best-score storage

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, EngineConfig, GameRng, GameRngState, GameState, Grid, MergeCheck, Position,
    SpawnPolicy, Status,
};

pub use crate::engine::{CombinePass, EngineSnapshot, GridEngine, MoveOutcome};

pub use crate::session::{direction_for_key, BestScore, JsonFileStore, MemoryStore, ScoreStore};
