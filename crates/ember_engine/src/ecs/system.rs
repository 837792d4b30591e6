//! # Systems and the System Manager
//!
//! A [`System`] is a logic unit that operates on the subset of entities whose
//! signatures contain the system's required signature. Each system owns its
//! matched entity set; the [`SystemManager`] keeps those sets correct as
//! entity signatures change and drives updates in a deterministic order.

use super::component::ComponentManager;
use super::entity::{Entity, Signature};
use super::{EcsError, EcsResult};
use std::any::{type_name, Any, TypeId};
use std::collections::{HashMap, HashSet};

/// Capability contract for ECS systems
///
/// Implementors store their matched entities in a `HashSet<Entity>` and
/// expose it through [`entities`](System::entities) /
/// [`entities_mut`](System::entities_mut); membership maintenance
/// (`add_entity` / `remove_entity`) is provided on top of that. The
/// [`update`](System::update) hook defaults to a no-op for systems that are
/// driven externally (collectors, debug overlays).
pub trait System: Any {
    /// The system's matched entity set
    fn entities(&self) -> &HashSet<Entity>;

    /// Mutable access to the matched entity set
    fn entities_mut(&mut self) -> &mut HashSet<Entity>;

    /// Per-frame update over matched entities
    fn update(&mut self, components: &mut ComponentManager, delta_time: f32) {
        let _ = (components, delta_time);
    }

    /// Upcast for typed access through the manager
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed access through the manager
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Add an entity to the matched set
    fn add_entity(&mut self, entity: Entity) {
        self.entities_mut().insert(entity);
    }

    /// Remove an entity from the matched set
    fn remove_entity(&mut self, entity: Entity) {
        self.entities_mut().remove(&entity);
    }

    /// Whether the entity is currently matched
    fn has_entity(&self, entity: Entity) -> bool {
        self.entities().contains(&entity)
    }
}

/// One registered system plus its bookkeeping
struct SystemEntry {
    /// Required component signature
    signature: Signature,

    /// The system itself
    system: Box<dyn System>,

    /// Type name, for logs and errors
    type_name: &'static str,
}

/// Registers systems and propagates entity-signature changes to them
///
/// Update order is an explicit contract: systems run in registration order,
/// every frame, deterministically. Entries live in a `Vec` for exactly that
/// reason; the `TypeId` map is only an index into it.
pub struct SystemManager {
    /// Systems in registration order
    entries: Vec<SystemEntry>,

    /// Registered type to position in `entries`
    index: HashMap<TypeId, usize>,
}

impl SystemManager {
    /// Create a manager with no systems
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a system instance; one per type
    ///
    /// The system starts with an empty required signature, which matches
    /// every entity. Call [`set_signature`](Self::set_signature) before
    /// adding entities unless that is intended.
    pub fn register_system<T: System>(&mut self, system: T) -> EcsResult<()> {
        let key = TypeId::of::<T>();
        if self.index.contains_key(&key) {
            return Err(EcsError::DuplicateSystem(type_name::<T>()));
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(SystemEntry {
            signature: Signature::empty(),
            system: Box::new(system),
            type_name: type_name::<T>(),
        });
        log::debug!("registered system '{}'", type_name::<T>());
        Ok(())
    }

    /// Record a system's required component signature
    pub fn set_signature<T: System>(&mut self, signature: Signature) -> EcsResult<()> {
        let entry = self.entry_mut::<T>()?;
        entry.signature = signature;
        Ok(())
    }

    /// Re-evaluate one entity against every system after a signature change
    pub fn entity_signature_changed(&mut self, entity: Entity, new_signature: Signature) {
        for entry in &mut self.entries {
            if new_signature.contains(entry.signature) {
                entry.system.add_entity(entity);
            } else {
                entry.system.remove_entity(entity);
            }
        }
    }

    /// Remove a destroyed entity from every system's set
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for entry in &mut self.entries {
            entry.system.remove_entity(entity);
        }
    }

    /// Run every system's `update`, in registration order
    pub fn update_all(&mut self, components: &mut ComponentManager, delta_time: f32) {
        for entry in &mut self.entries {
            log::trace!("updating system '{}'", entry.type_name);
            entry.system.update(components, delta_time);
        }
    }

    /// Borrow a registered system by type
    pub fn system<T: System>(&self) -> EcsResult<&T> {
        let index = self
            .index
            .get(&TypeId::of::<T>())
            .ok_or(EcsError::UnregisteredSystem(type_name::<T>()))?;
        self.entries[*index]
            .system
            .as_any()
            .downcast_ref::<T>()
            .ok_or(EcsError::UnregisteredSystem(type_name::<T>()))
    }

    /// Mutably borrow a registered system by type
    pub fn system_mut<T: System>(&mut self) -> EcsResult<&mut T> {
        let index = self
            .index
            .get(&TypeId::of::<T>())
            .ok_or(EcsError::UnregisteredSystem(type_name::<T>()))?;
        self.entries[*index]
            .system
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(EcsError::UnregisteredSystem(type_name::<T>()))
    }

    /// A registered system's required signature
    pub fn signature_of<T: System>(&self) -> EcsResult<Signature> {
        let index = self
            .index
            .get(&TypeId::of::<T>())
            .ok_or(EcsError::UnregisteredSystem(type_name::<T>()))?;
        Ok(self.entries[*index].signature)
    }

    /// Number of registered systems
    pub fn system_count(&self) -> usize {
        self.entries.len()
    }

    fn entry_mut<T: System>(&mut self) -> EcsResult<&mut SystemEntry> {
        let index = self
            .index
            .get(&TypeId::of::<T>())
            .ok_or(EcsError::UnregisteredSystem(type_name::<T>()))?;
        Ok(&mut self.entries[*index])
    }
}

impl Default for SystemManager {
    fn default() -> Self {
        Self::new()
    }
}
