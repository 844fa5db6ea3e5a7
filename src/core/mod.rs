//! Core engine types: grid, directions, state, RNG, configuration.
//!
//! This module contains the fundamental building blocks. Hosts configure
//! the engine via `EngineConfig` rather than modifying the core.

pub mod config;
pub mod direction;
pub mod grid;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, MergeCheck, SpawnPolicy};
pub use direction::Direction;
pub use grid::{EmptyIndices, Grid, Position};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Status};
