//! TUI Puyo (workspace facade crate).
//!
//! Re-exports the layer crates under `tui_puyo::{core,ecs,input,term,types}`
//! and holds what only the binary needs: run configuration and the frame loop.

pub use tui_puyo_core as core;
pub use tui_puyo_ecs as ecs;
pub use tui_puyo_input as input;
pub use tui_puyo_term as term;
pub use tui_puyo_types as types;

pub mod config;
pub mod game_loop;
