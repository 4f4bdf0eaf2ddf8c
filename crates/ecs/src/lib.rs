//! tui-puyo-ecs - Entity component store
//!
//! A small, single-threaded ECS:
//!
//! | Piece | Type |
//! |-------|------|
//! | Handles | [`Entity`] (index + generation, index 0 is null) |
//! | Allocation | [`EntityRegistry`] (fixed pool, FIFO recycling) |
//! | Data | [`Component`] types with a compile-time `ID` |
//! | Storage | [`ComponentStore`] (dense, swap-remove) |
//! | Access | [`Coordinator`] |
//!
//! # Example
//!
//! ```
//! use tui_puyo_ecs::{Component, Coordinator};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Score(u32);
//!
//! impl Component for Score {
//!     const ID: u8 = 0;
//! }
//!
//! let mut ecs = Coordinator::new();
//! ecs.register_component::<Score>().unwrap();
//!
//! let e = ecs.create_entity().unwrap();
//! ecs.add_component(e, Score(0)).unwrap();
//! ecs.get_mut::<Score>(e).unwrap().0 += 40;
//! assert_eq!(ecs.get::<Score>(e).unwrap(), &Score(40));
//!
//! ecs.destroy_entity(e).unwrap();
//! assert!(ecs.get::<Score>(e).is_err());
//! ```

pub mod component;
pub mod coordinator;
pub mod entity;
pub mod error;
pub mod signature;
pub mod store;

pub use component::{Component, ComponentId};
pub use coordinator::Coordinator;
pub use entity::{Entity, EntityRegistry, MAX_ENTITIES};
pub use error::{EcsError, Result};
pub use signature::{Signature, MAX_COMPONENTS};
pub use store::ComponentStore;
