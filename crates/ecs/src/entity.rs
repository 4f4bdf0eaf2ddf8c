//! Entity module - generational handles and the registry that issues them
//!
//! A handle is an `(index, generation)` pair. Index 0 is reserved for the null
//! sentinel and never issued. Destroying an entity bumps its slot's generation,
//! so a handle captured before the destroy no longer matches once the index is
//! recycled.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{EcsError, Result};
use crate::signature::Signature;

/// Number of index slots, including the reserved null slot
pub const MAX_ENTITIES: usize = 512;

/// Opaque entity handle
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Null/empty sentinel (used for empty grid cells)
    pub const NULL: Entity = Entity {
        index: 0,
        generation: 0,
    };

    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.index == 0
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Allocates and recycles entity handles and tracks one signature per slot
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    /// Free indices, recycled in FIFO order of destruction
    available: VecDeque<u32>,
    generations: Vec<u32>,
    alive: Vec<bool>,
    signatures: Vec<Signature>,
    live: usize,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::with_slots(MAX_ENTITIES)
    }

    /// Create a registry with `slots` index slots (`slots - 1` live entities at most)
    pub fn with_slots(slots: usize) -> Self {
        let slots = slots.max(1);
        Self {
            available: (1..slots as u32).collect(),
            generations: vec![0; slots],
            alive: vec![false; slots],
            signatures: vec![Signature::EMPTY; slots],
            live: 0,
        }
    }

    /// Maximum number of simultaneously live entities
    pub fn capacity(&self) -> usize {
        self.generations.len() - 1
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn create(&mut self) -> Result<Entity> {
        let Some(index) = self.available.pop_front() else {
            return Err(EcsError::Capacity {
                capacity: self.capacity(),
            });
        };

        let slot = index as usize;
        self.alive[slot] = true;
        self.live += 1;

        Ok(Entity {
            index,
            generation: self.generations[slot],
        })
    }

    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        self.validate(entity)?;

        let slot = entity.index();
        self.signatures[slot].reset();
        self.alive[slot] = false;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.available.push_back(entity.index);
        self.live -= 1;
        Ok(())
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.validate(entity).is_ok()
    }

    pub fn set_signature(&mut self, entity: Entity, signature: Signature) -> Result<()> {
        self.validate(entity)?;
        self.signatures[entity.index()] = signature;
        Ok(())
    }

    pub fn signature(&self, entity: Entity) -> Result<Signature> {
        self.validate(entity)?;
        Ok(self.signatures[entity.index()])
    }

    /// Check that `entity` is non-null, in range, alive and of the current generation
    pub fn validate(&self, entity: Entity) -> Result<()> {
        if entity.is_null() {
            return Err(EcsError::NullEntity);
        }
        let slot = entity.index();
        match self.generations.get(slot) {
            Some(&generation) if generation == entity.generation && self.alive[slot] => Ok(()),
            _ => Err(EcsError::StaleEntity(entity)),
        }
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_issues_the_null_index() {
        let mut registry = EntityRegistry::with_slots(4);
        let a = registry.create().unwrap();
        let b = registry.create().unwrap();
        let c = registry.create().unwrap();
        assert!(!a.is_null() && !b.is_null() && !c.is_null());
        assert_eq!([a.index(), b.index(), c.index()], [1, 2, 3]);
    }

    #[test]
    fn create_fails_once_capacity_is_exhausted() {
        let mut registry = EntityRegistry::with_slots(3);
        registry.create().unwrap();
        registry.create().unwrap();
        assert_eq!(
            registry.create(),
            Err(EcsError::Capacity { capacity: 2 })
        );
    }

    #[test]
    fn recycles_indices_in_fifo_order_with_new_generation() {
        let mut registry = EntityRegistry::with_slots(8);
        let handles: Vec<_> = (0..7).map(|_| registry.create().unwrap()).collect();

        registry.destroy(handles[4]).unwrap();
        registry.destroy(handles[1]).unwrap();

        let first = registry.create().unwrap();
        let second = registry.create().unwrap();
        assert_eq!(first.index(), handles[4].index());
        assert_eq!(second.index(), handles[1].index());
        assert_eq!(first.generation(), handles[4].generation() + 1);
    }

    #[test]
    fn stale_handles_are_rejected_after_recycling() {
        let mut registry = EntityRegistry::with_slots(2);
        let old = registry.create().unwrap();
        registry.destroy(old).unwrap();
        let new = registry.create().unwrap();

        assert_eq!(old.index(), new.index());
        assert!(!registry.is_alive(old));
        assert!(registry.is_alive(new));
        assert_eq!(registry.destroy(old), Err(EcsError::StaleEntity(old)));
        assert_eq!(registry.signature(Entity::NULL), Err(EcsError::NullEntity));
    }

    #[test]
    fn destroy_clears_the_signature() {
        let mut registry = EntityRegistry::with_slots(2);
        let e = registry.create().unwrap();
        let mut sig = Signature::EMPTY;
        sig.set(3, true);
        registry.set_signature(e, sig).unwrap();
        assert!(registry.signature(e).unwrap().contains(3));

        registry.destroy(e).unwrap();
        let recycled = registry.create().unwrap();
        assert_eq!(recycled.index(), e.index());
        assert!(registry.signature(recycled).unwrap().is_empty());
    }
}
