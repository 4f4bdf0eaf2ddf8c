//! Error types for entity allocation and component storage.
//!
//! Every variant is an invariant violation rather than a gameplay outcome:
//! callers propagate them with `?` and abort the current session. Illegal
//! moves, rotations and the lose condition are plain booleans elsewhere.

use thiserror::Error;

use crate::component::ComponentId;
use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    /// The entity pool has no free index left.
    #[error("entity limit reached (capacity {capacity})")]
    Capacity { capacity: usize },

    /// The reserved null handle was passed where a live entity is required.
    #[error("null entity handle")]
    NullEntity,

    /// The handle was destroyed, or its slot has been recycled since.
    #[error("stale entity handle {0}")]
    StaleEntity(Entity),

    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    #[error("entity {entity} already has a {component} component")]
    DuplicateComponent {
        entity: Entity,
        component: &'static str,
    },

    #[error("component id {id} registered twice ({component})")]
    AlreadyRegistered {
        id: ComponentId,
        component: &'static str,
    },

    /// A component refers to an id that its owner no longer tracks.
    #[error("unknown {kind} id {id}")]
    UnknownId { kind: &'static str, id: u32 },

    #[error("component {component} used before registration")]
    NotRegistered { component: &'static str },

    #[error("component id {id} of {component} exceeds the signature width")]
    IdOutOfRange {
        id: ComponentId,
        component: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, EcsError>;
