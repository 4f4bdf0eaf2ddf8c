//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the simulation, built on the
//! `tui-puyo-ecs` coordinator. It has no dependency on terminals or I/O:
//! drawing goes through the [`Surface`] trait and input arrives as an
//! [`InputSnapshot`](types::InputSnapshot).
//!
//! # Module Structure
//!
//! - [`components`]: world components and their compile-time IDs
//! - [`session`]: the named entities of a play session
//! - [`systems`]: spawn, control, gravity, combo and reset systems
//! - [`game`]: the pair → falling → score state machine
//! - [`rng`]: seeded color source
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: a vertical pair appears at (0,0)/(0,1); a blocked spawn cell loses
//!   and resets the session
//! - **Gravity**: 240 px/s, one grid row at a time; the pair locks when its next
//!   row is blocked
//! - **Chains**: connected same-color groups of 4 or more are cleared, the blobs
//!   above them drop, and detection repeats until nothing clears
//!
//! # Example
//!
//! ```
//! use tui_puyo_core::{Game, Phase};
//!
//! let mut game = Game::new(12345).unwrap();
//! game.on_start();
//!
//! // The first tick spawns a pair.
//! game.tick(1.0 / 60.0).unwrap();
//! let snap = game.snapshot().unwrap();
//! assert_eq!(snap.occupied_count(), 2);
//! assert_eq!(snap.phase, Phase::Pair);
//! ```

pub mod components;
pub mod game;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use tui_puyo_ecs as ecs;
pub use tui_puyo_types as types;

pub use components::{
    BelongingChain, BlobState, ChainId, Chains, Color, Drawable, Falling, Grid, Pair, Score,
    State, Transform, Velocity,
};
pub use game::Game;
pub use rng::ColorSource;
pub use session::Session;
pub use snapshot::{GameSnapshot, Phase};
pub use systems::Surface;
