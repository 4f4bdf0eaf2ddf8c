//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The board view
//! implements the core draw contract over a framebuffer, and the renderer
//! flushes framebuffers to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw through the same texture/rect contract any other frontend would use
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_puyo_core as core;
pub use tui_puyo_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{blob_rgb, BoardView, FrameSurface, Viewport};
pub use renderer::{changed_runs, encode_frame, Run, TerminalRenderer};
