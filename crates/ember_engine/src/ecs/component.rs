//! # Component Storage
//!
//! Dense, cache-packed storage of component data with O(1) access.
//!
//! ## Architecture
//!
//! - **ComponentArray<T>**: one contiguous array per component type; removal
//!   is swap-and-pop, so the array never has holes (and never preserves
//!   ordering across removals).
//! - **ComponentManager**: owns one type-erased array per registered type and
//!   dispatches from a runtime `TypeId` to the correctly typed array.
//!
//! Type erasure follows the registry pattern: each array is stored as a
//! `Box<dyn ComponentStore>` and recovered with an `Any` downcast resolved
//! once per call through a hash lookup, never by scanning.

use super::entity::{ComponentType, Entity, MAX_COMPONENTS};
use super::{EcsError, EcsResult};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

/// Marker trait for component data
///
/// Components are plain value structs with no identity beyond the owning
/// entity. `Send + Sync` keeps the door open for parallel iteration of
/// disjoint arrays; the core itself is single-threaded.
pub trait Component: Any + Send + Sync + 'static {}

/// Dense array of one component type
///
/// Invariant: `len` entries occupy indices `[0, len)` of `data`, and the two
/// maps are mutual inverses restricted to live entries. Removal moves the
/// last element into the vacated slot and repairs both maps.
pub struct ComponentArray<T: Component> {
    /// Packed component values
    data: Vec<T>,

    /// Entity id to dense index
    entity_to_index: HashMap<Entity, usize>,

    /// Dense index to entity id
    index_to_entity: HashMap<usize, Entity>,
}

impl<T: Component> ComponentArray<T> {
    /// Create an empty array
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            entity_to_index: HashMap::new(),
            index_to_entity: HashMap::new(),
        }
    }

    /// Insert a component for an entity. O(1).
    ///
    /// Fails with [`EcsError::DuplicateComponent`] if the entity already has
    /// one; the existing value is left untouched.
    pub fn insert(&mut self, entity: Entity, value: T) -> EcsResult<()> {
        if self.entity_to_index.contains_key(&entity) {
            return Err(EcsError::DuplicateComponent {
                entity,
                type_name: type_name::<T>(),
            });
        }
        let index = self.data.len();
        self.data.push(value);
        self.entity_to_index.insert(entity, index);
        self.index_to_entity.insert(index, entity);
        Ok(())
    }

    /// Remove an entity's component, returning it. O(1), swap-and-pop.
    pub fn remove(&mut self, entity: Entity) -> EcsResult<T> {
        let removed_index =
            self.entity_to_index
                .remove(&entity)
                .ok_or(EcsError::MissingComponent {
                    entity,
                    type_name: type_name::<T>(),
                })?;
        let last_index = self.data.len() - 1;
        let removed = self.data.swap_remove(removed_index);

        self.index_to_entity.remove(&removed_index);
        if removed_index != last_index {
            // The former last element now lives at removed_index; repair maps.
            let moved_entity = self.index_to_entity.remove(&last_index).ok_or(
                EcsError::MissingComponent {
                    entity,
                    type_name: type_name::<T>(),
                },
            )?;
            self.index_to_entity.insert(removed_index, moved_entity);
            self.entity_to_index.insert(moved_entity, removed_index);
        }
        Ok(removed)
    }

    /// Borrow an entity's component
    pub fn get(&self, entity: Entity) -> EcsResult<&T> {
        let index = self
            .entity_to_index
            .get(&entity)
            .ok_or(EcsError::MissingComponent {
                entity,
                type_name: type_name::<T>(),
            })?;
        Ok(&self.data[*index])
    }

    /// Mutably borrow an entity's component
    pub fn get_mut(&mut self, entity: Entity) -> EcsResult<&mut T> {
        let index = self
            .entity_to_index
            .get(&entity)
            .ok_or(EcsError::MissingComponent {
                entity,
                type_name: type_name::<T>(),
            })?;
        Ok(&mut self.data[*index])
    }

    /// Whether the entity has this component. O(1), never fails.
    pub fn has(&self, entity: Entity) -> bool {
        self.entity_to_index.contains_key(&entity)
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if no components are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate (entity, component) pairs in dense order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(index, value)| (self.index_to_entity[&index], value))
    }

    /// The packed component slice, in dense order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Component> Default for ComponentArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Object-safe view of a component array for type-erased broadcast
trait ComponentStore: Any {
    /// Drop the entity's component if it has one; no-op otherwise
    fn entity_destroyed(&mut self, entity: Entity);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ComponentStore for ComponentArray<T> {
    fn entity_destroyed(&mut self, entity: Entity) {
        // Idempotent: most entities will not have most component types.
        if self.has(entity) {
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

/// Owns one [`ComponentArray`] per registered component type
///
/// Registration assigns each type the next sequential [`ComponentType`] id;
/// the id doubles as the type's bit position in entity signatures.
pub struct ComponentManager {
    /// Type-erased arrays keyed by runtime type
    stores: HashMap<TypeId, Box<dyn ComponentStore>>,

    /// Registered type ids keyed by runtime type
    type_ids: HashMap<TypeId, ComponentType>,

    /// Next sequential component type id
    next_type_id: u8,
}

impl ComponentManager {
    /// Create a manager with no registered types
    pub fn new() -> Self {
        Self {
            stores: HashMap::new(),
            type_ids: HashMap::new(),
            next_type_id: 0,
        }
    }

    /// Register a component type, assigning it the next sequential id
    ///
    /// Must be called exactly once per type before any use.
    pub fn register_component<T: Component>(&mut self) -> EcsResult<ComponentType> {
        let key = TypeId::of::<T>();
        if self.type_ids.contains_key(&key) {
            return Err(EcsError::DuplicateComponentType(type_name::<T>()));
        }
        if usize::from(self.next_type_id) >= MAX_COMPONENTS {
            return Err(EcsError::ComponentTypeCapacityExceeded);
        }
        let type_id = ComponentType(self.next_type_id);
        self.next_type_id += 1;
        self.type_ids.insert(key, type_id);
        self.stores.insert(key, Box::new(ComponentArray::<T>::new()));
        log::debug!(
            "registered component type '{}' as id {}",
            type_name::<T>(),
            type_id.bit()
        );
        Ok(type_id)
    }

    /// The id assigned to a registered component type
    pub fn component_type<T: Component>(&self) -> EcsResult<ComponentType> {
        self.type_ids
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(EcsError::UnregisteredComponentType(type_name::<T>()))
    }

    /// Add a component to an entity
    pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> EcsResult<()> {
        self.array_mut::<T>()?.insert(entity, value)
    }

    /// Remove an entity's component, returning it
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> EcsResult<T> {
        self.array_mut::<T>()?.remove(entity)
    }

    /// Borrow an entity's component
    pub fn get_component<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
        self.array::<T>()?.get(entity)
    }

    /// Mutably borrow an entity's component
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
        self.array_mut::<T>()?.get_mut(entity)
    }

    /// Whether the entity has a component of this type
    ///
    /// Absence is normal control flow, so an unregistered type reads as
    /// "no component" rather than an error.
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.array::<T>().map_or(false, |array| array.has(entity))
    }

    /// Broadcast an entity destruction to every registered array
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for store in self.stores.values_mut() {
            store.entity_destroyed(entity);
        }
    }

    /// Number of registered component types
    pub fn registered_count(&self) -> usize {
        self.type_ids.len()
    }

    /// Borrow the typed array for a registered component type
    pub fn array<T: Component>(&self) -> EcsResult<&ComponentArray<T>> {
        let store = self
            .stores
            .get(&TypeId::of::<T>())
            .ok_or(EcsError::UnregisteredComponentType(type_name::<T>()))?;
        store
            .as_any()
            .downcast_ref::<ComponentArray<T>>()
            .ok_or(EcsError::UnregisteredComponentType(type_name::<T>()))
    }

    /// Mutably borrow the typed array for a registered component type
    pub fn array_mut<T: Component>(&mut self) -> EcsResult<&mut ComponentArray<T>> {
        let store = self
            .stores
            .get_mut(&TypeId::of::<T>())
            .ok_or(EcsError::UnregisteredComponentType(type_name::<T>()))?;
        store
            .as_any_mut()
            .downcast_mut::<ComponentArray<T>>()
            .ok_or(EcsError::UnregisteredComponentType(type_name::<T>()))
    }
}

impl Default for ComponentManager {
    fn default() -> Self {
        Self::new()
    }
}
