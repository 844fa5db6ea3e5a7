//! Collaborator boundary: input mapping and best-score persistence.
//!
//! Everything here sits outside the pure engine. A presentation layer
//! feeds key names through [`direction_for_key`] and reflects engine
//! state visually; [`BestScore`] owns the single persisted value the
//! engine itself never touches.

pub mod best_score;
pub mod input;

pub use best_score::{BestScore, JsonFileStore, MemoryStore, ScoreStore};
pub use input::direction_for_key;
