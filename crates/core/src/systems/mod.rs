//! Gameplay systems - free functions over the [`Coordinator`](crate::ecs::Coordinator)
//!
//! Each system takes the coordinator plus the named entities it works on and
//! returns `Result<_, EcsError>`. Gameplay outcomes (a rejected move, a locked
//! pair, a lost game) are plain booleans.

pub mod combos;
pub mod control;
pub mod movement;
pub mod render;
pub mod reset;
pub mod spawn;

pub use combos::{clear_chains, clear_falling, filter_chains, find_combos};
pub use control::{
    can_move, can_rotate, change_velocity, handle_pair_input, move_pair, rotate_pair,
};
pub use movement::{fall_pieces, try_move_pair};
pub use render::{render_grid, Surface};
pub use reset::reset;
pub use spawn::{add_falling_pair, check_lose, destroy_pair, place_blob, spawn_blob, spawn_pair};

use crate::types::Y_INTERVAL;

/// Grid row containing pixel height `y`
#[inline]
pub(crate) fn row_of(y: f32) -> i32 {
    (y / Y_INTERVAL as f32).floor() as i32
}
