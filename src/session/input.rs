//! Keyboard key-name mapping.
//!
//! Translates browser-style `KeyboardEvent.key` names (and plain WASD
//! letters) into directions. This is the rejection point for input that
//! does not correspond to a move: anything unrecognized maps to `None`
//! and never reaches the engine.

use crate::core::Direction;

/// Map a key name to a direction, case-insensitively.
///
/// Recognized keys: `ArrowUp`/`ArrowDown`/`ArrowLeft`/`ArrowRight` and
/// `W`/`A`/`S`/`D`.
#[must_use]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key.to_ascii_lowercase().as_str() {
        "arrowup" | "w" => Some(Direction::Up),
        "arrowdown" | "s" => Some(Direction::Down),
        "arrowleft" | "a" => Some(Direction::Left),
        "arrowright" | "d" => Some(Direction::Right),
        _ => None,
    }
}
