//! Coordinator - owns the entity registry and every component store.
//!
//! Systems receive `&mut Coordinator` and access components through it.
//! Adding or removing a component keeps the entity's signature in sync with
//! store membership, and destroying an entity drops all of its components.

use tracing::trace;

use crate::component::Component;
use crate::entity::{Entity, EntityRegistry, MAX_ENTITIES};
use crate::error::{EcsError, Result};
use crate::signature::{Signature, MAX_COMPONENTS};
use crate::store::{ComponentStore, ErasedStore};

pub struct Coordinator {
    registry: EntityRegistry,
    stores: Vec<Option<Box<dyn ErasedStore>>>,
    slots: usize,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::with_slots(MAX_ENTITIES)
    }

    pub fn with_slots(slots: usize) -> Self {
        let slots = slots.max(1);
        Self {
            registry: EntityRegistry::with_slots(slots),
            stores: (0..MAX_COMPONENTS).map(|_| None).collect(),
            slots,
        }
    }

    pub fn create_entity(&mut self) -> Result<Entity> {
        let entity = self.registry.create()?;
        trace!(%entity, "created entity");
        Ok(entity)
    }

    pub fn destroy_entity(&mut self, entity: Entity) -> Result<()> {
        self.registry.validate(entity)?;
        for store in self.stores.iter_mut().flatten() {
            store.on_entity_destroyed(entity);
        }
        self.registry.destroy(entity)?;
        trace!(%entity, "destroyed entity");
        Ok(())
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.registry.is_alive(entity)
    }

    pub fn live_count(&self) -> usize {
        self.registry.live_count()
    }

    pub fn signature(&self, entity: Entity) -> Result<Signature> {
        self.registry.signature(entity)
    }

    pub fn register_component<T: Component>(&mut self) -> Result<()> {
        let id = T::ID;
        let Some(slot) = self.stores.get_mut(id as usize) else {
            return Err(EcsError::IdOutOfRange {
                id,
                component: T::name(),
            });
        };
        if slot.is_some() {
            return Err(EcsError::AlreadyRegistered {
                id,
                component: T::name(),
            });
        }
        *slot = Some(Box::new(ComponentStore::<T>::new(self.slots)));
        Ok(())
    }

    pub fn is_registered<T: Component>(&self) -> bool {
        matches!(self.stores.get(T::ID as usize), Some(Some(_)))
    }

    fn store<T: Component>(&self) -> Result<&ComponentStore<T>> {
        self.stores
            .get(T::ID as usize)
            .and_then(|slot| slot.as_ref())
            .and_then(|store| store.as_any().downcast_ref::<ComponentStore<T>>())
            .ok_or(EcsError::NotRegistered {
                component: T::name(),
            })
    }

    fn store_mut<T: Component>(&mut self) -> Result<&mut ComponentStore<T>> {
        self.stores
            .get_mut(T::ID as usize)
            .and_then(|slot| slot.as_mut())
            .and_then(|store| store.as_any_mut().downcast_mut::<ComponentStore<T>>())
            .ok_or(EcsError::NotRegistered {
                component: T::name(),
            })
    }

    pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> Result<()> {
        let mut signature = self.registry.signature(entity)?;
        self.store_mut::<T>()?.insert(entity, value)?;
        signature.set(T::ID, true);
        self.registry.set_signature(entity, signature)
    }

    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Result<T> {
        let mut signature = self.registry.signature(entity)?;
        let value = self.store_mut::<T>()?.remove(entity)?;
        signature.set(T::ID, false);
        self.registry.set_signature(entity, signature)?;
        Ok(value)
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Result<&T> {
        self.registry.validate(entity)?;
        self.store::<T>()?.get(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T> {
        self.registry.validate(entity)?;
        self.store_mut::<T>()?.get_mut(entity)
    }

    /// Whether a live `entity` has a `T` component
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.registry
            .signature(entity)
            .map(|sig| sig.contains(T::ID))
            .unwrap_or(false)
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}
