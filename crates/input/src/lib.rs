//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::Key`]s and keeps the
//! per-frame [`InputSnapshot`](crate::types::InputSnapshot) the game reads,
//! including terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_puyo_types as types;

pub use handler::KeyTracker;
pub use map::{map_key, should_quit};
