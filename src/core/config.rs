//! Engine configuration.
//!
//! Hosts configure a game at startup by providing:
//! - the grid size N (fixed for the lifetime of the game)
//! - an optional win threshold (the first tile to reach it wins)
//! - the spawn policy (when a random tile is added after a move)
//! - the merge-availability check used for game-over detection
//!
//! The engine never hardcodes these - hosts set them via `EngineConfig`.

use serde::{Deserialize, Serialize};

/// When to spawn a random tile after a directional input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Spawn only when the move changed the grid (merged or moved a tile).
    /// The stricter, standard rule.
    #[default]
    OnChange,
    /// Spawn after every input, as long as an empty cell exists.
    /// Matches variants of the original game that never gated the spawn.
    Always,
}

/// Which merge-availability check backs `is_terminal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeCheck {
    /// Faithful port of the original check: row `x` and column `x` are
    /// scanned in lockstep, tracking the previous non-empty value per
    /// axis. Empty cells are transparent, so equal tiles separated by a
    /// gap already count as mergeable (consistent with how combining
    /// treats gaps).
    #[default]
    Lockstep,
    /// Strict orthogonal adjacency: a merge is available only when two
    /// equal tiles share an edge.
    Exhaustive,
}

/// Complete engine configuration.
///
/// Hosts provide this at startup. Builder-style setters allow chaining:
///
/// ```
/// use gridmerge::core::{EngineConfig, SpawnPolicy};
///
/// let config = EngineConfig::new(4)
///     .with_win_threshold(128)
///     .with_spawn_policy(SpawnPolicy::Always);
/// assert_eq!(config.size, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid side length.
    pub size: usize,

    /// First tile to reach this value wins the game. `None` disables
    /// win detection (play continues until no move remains).
    pub win_threshold: Option<u64>,

    /// When a random tile is spawned after a move.
    pub spawn_policy: SpawnPolicy,

    /// Merge-availability check used for game-over detection.
    pub merge_check: MergeCheck,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

impl EngineConfig {
    /// Create a configuration for an N×N grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Grid size must be at least 1");
        assert!(size <= 16, "At most 16x16 grids supported");

        Self {
            size,
            win_threshold: None,
            spawn_policy: SpawnPolicy::default(),
            merge_check: MergeCheck::default(),
        }
    }

    /// Set the winning tile value.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u64) -> Self {
        assert!(
            threshold >= 4 && threshold.is_power_of_two(),
            "Win threshold must be a power of two >= 4"
        );
        self.win_threshold = Some(threshold);
        self
    }

    /// Set the spawn policy.
    #[must_use]
    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }

    /// Set the merge-availability check.
    #[must_use]
    pub fn with_merge_check(mut self, check: MergeCheck) -> Self {
        self.merge_check = check;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.win_threshold, None);
        assert_eq!(config.spawn_policy, SpawnPolicy::OnChange);
        assert_eq!(config.merge_check, MergeCheck::Lockstep);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new(3)
            .with_win_threshold(128)
            .with_spawn_policy(SpawnPolicy::Always)
            .with_merge_check(MergeCheck::Exhaustive);

        assert_eq!(config.size, 3);
        assert_eq!(config.win_threshold, Some(128));
        assert_eq!(config.spawn_policy, SpawnPolicy::Always);
        assert_eq!(config.merge_check, MergeCheck::Exhaustive);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_zero_size() {
        EngineConfig::new(0);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn test_bad_threshold() {
        EngineConfig::new(4).with_win_threshold(100);
    }
}
