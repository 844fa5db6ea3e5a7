//! Best-score tracking and persistence.
//!
//! The engine never touches storage; the collaborator owns a single
//! best-score value keyed by name, read once at startup and written only
//! when the current score exceeds it. Storage is abstracted behind
//! [`ScoreStore`] so games, tests, and hosts can plug in their own
//! backend; a JSON file store and an in-memory store are provided.

use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustc_hash::FxHashMap;

/// Storage backend for named best scores.
pub trait ScoreStore {
    /// Read the stored score for `name`, if any.
    fn load(&self, name: &str) -> Option<u64>;

    /// Persist `score` under `name`.
    fn save(&mut self, name: &str, score: u64) -> io::Result<()>;
}

/// In-memory store, for tests and hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scores: FxHashMap<String, u64>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self, name: &str) -> Option<u64> {
        self.scores.get(name).copied()
    }

    fn save(&mut self, name: &str, score: u64) -> io::Result<()> {
        self.scores.insert(name.to_string(), score);
        Ok(())
    }
}

/// JSON file store: one file holding a name → score map.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is created on first save; a missing or unreadable file
    /// reads as empty.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> FxHashMap<String, u64> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return FxHashMap::default();
        };
        match serde_json::from_str(&contents) {
            Ok(scores) => scores,
            Err(err) => {
                warn!("ignoring malformed score file {}: {}", self.path.display(), err);
                FxHashMap::default()
            }
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self, name: &str) -> Option<u64> {
        self.read_all().get(name).copied()
    }

    fn save(&mut self, name: &str, score: u64) -> io::Result<()> {
        let mut scores = self.read_all();
        scores.insert(name.to_string(), score);
        let json = serde_json::to_string_pretty(&scores)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        std::fs::write(&self.path, json)?;
        info!("saved best score {} for {}", score, name);
        Ok(())
    }
}

/// Tracks the best score for one named game.
///
/// ```
/// use gridmerge::session::{BestScore, MemoryStore};
///
/// let mut best = BestScore::load(MemoryStore::new(), "classic");
/// assert_eq!(best.best(), 0);
/// assert!(best.observe(100).unwrap());
/// assert!(!best.observe(50).unwrap());
/// assert_eq!(best.best(), 100);
/// ```
#[derive(Debug)]
pub struct BestScore<S: ScoreStore> {
    store: S,
    name: String,
    best: u64,
}

impl<S: ScoreStore> BestScore<S> {
    /// Read the stored best for `name`; absent means 0.
    pub fn load(store: S, name: impl Into<String>) -> Self {
        let name = name.into();
        let best = store.load(&name).unwrap_or(0);
        Self { store, name, best }
    }

    /// Current best score.
    #[must_use]
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Report a finished (or in-progress) score.
    ///
    /// Persists and returns `true` only when the score beats the best.
    pub fn observe(&mut self, score: u64) -> io::Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        self.store.save(&self.name, score)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("classic"), None);
        store.save("classic", 128).unwrap();
        assert_eq!(store.load("classic"), Some(128));
    }

    #[test]
    fn test_best_score_only_improves() {
        let mut best = BestScore::load(MemoryStore::new(), "classic");
        assert!(best.observe(40).unwrap());
        assert!(!best.observe(40).unwrap());
        assert!(!best.observe(12).unwrap());
        assert!(best.observe(44).unwrap());
        assert_eq!(best.best(), 44);
    }

    #[test]
    fn test_best_score_reads_existing() {
        let mut store = MemoryStore::new();
        store.save("classic", 96).unwrap();
        let best = BestScore::load(store, "classic");
        assert_eq!(best.best(), 96);
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "gridmerge-best-{}-roundtrip.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load("classic"), None);
        store.save("classic", 256).unwrap();
        store.save("mini", 32).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load("classic"), Some(256));
        assert_eq!(reopened.load("mini"), Some(32));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_json_file_store_malformed_file_reads_empty() {
        let path = std::env::temp_dir().join(format!(
            "gridmerge-best-{}-malformed.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load("classic"), None);

        std::fs::remove_file(&path).unwrap();
    }
}
