//! Dense per-type component storage.
//!
//! Values live contiguously in `dense`; `slots` maps an entity index to its
//! position in `dense`. Removal swap-removes and patches the moved entry, so
//! the dense array never has holes.

use std::any::Any;

use crate::component::Component;
use crate::entity::Entity;
use crate::error::{EcsError, Result};

#[derive(Debug, Clone)]
pub struct ComponentStore<T> {
    dense: Vec<T>,
    owners: Vec<Entity>,
    slots: Vec<Option<u32>>,
}

impl<T: Component> ComponentStore<T> {
    pub fn new(slots: usize) -> Self {
        Self {
            dense: Vec::new(),
            owners: Vec::new(),
            slots: vec![None; slots],
        }
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    fn position(&self, entity: Entity) -> Option<usize> {
        let pos = (*self.slots.get(entity.index())?)? as usize;
        (self.owners[pos] == entity).then_some(pos)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.position(entity).is_some()
    }

    pub fn insert(&mut self, entity: Entity, value: T) -> Result<()> {
        let slot = entity.index();
        if slot >= self.slots.len() {
            return Err(EcsError::StaleEntity(entity));
        }
        if self.slots[slot].is_some() {
            return Err(EcsError::DuplicateComponent {
                entity,
                component: T::name(),
            });
        }

        self.slots[slot] = Some(self.dense.len() as u32);
        self.dense.push(value);
        self.owners.push(entity);
        Ok(())
    }

    pub fn remove(&mut self, entity: Entity) -> Result<T> {
        let pos = self.position(entity).ok_or(EcsError::MissingComponent {
            entity,
            component: T::name(),
        })?;

        self.slots[entity.index()] = None;
        let value = self.dense.swap_remove(pos);
        self.owners.swap_remove(pos);
        if let Some(&moved) = self.owners.get(pos) {
            self.slots[moved.index()] = Some(pos as u32);
        }
        Ok(value)
    }

    pub fn get(&self, entity: Entity) -> Result<&T> {
        match self.position(entity) {
            Some(pos) => Ok(&self.dense[pos]),
            None => Err(EcsError::MissingComponent {
                entity,
                component: T::name(),
            }),
        }
    }

    pub fn get_mut(&mut self, entity: Entity) -> Result<&mut T> {
        match self.position(entity) {
            Some(pos) => Ok(&mut self.dense[pos]),
            None => Err(EcsError::MissingComponent {
                entity,
                component: T::name(),
            }),
        }
    }

    /// Iterate `(owner, value)` pairs in dense order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.owners.iter().copied().zip(self.dense.iter())
    }
}

/// Type-erased view of a store, used by the coordinator to broadcast destroys
pub trait ErasedStore: Any {
    fn on_entity_destroyed(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStore for ComponentStore<T> {
    fn on_entity_destroyed(&mut self, entity: Entity) {
        if self.contains(entity) {
            let _ = self.remove(entity);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
