//! Entity identifiers, signatures, and the entity lifecycle manager
//!
//! Entities are opaque ids with no intrinsic data; they act as keys into the
//! per-type component arrays. The [`EntityManager`] recycles ids through a
//! FIFO queue so reuse is round-robin rather than churning the most recently
//! freed id.

use super::{EcsError, EcsResult};
use std::collections::VecDeque;

/// Maximum number of concurrently live entities
pub const MAX_ENTITIES: usize = 5000;

/// Maximum number of distinct registered component types
pub const MAX_COMPONENTS: usize = 32;

/// Entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create an entity with the given id. Only the manager mints these.
    pub(super) fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the raw entity id
    pub fn id(self) -> u32 {
        self.id
    }

    /// Index into per-entity tables
    pub(crate) fn index(self) -> usize {
        self.id as usize
    }
}

/// Small integer identifying a registered component type
///
/// Assigned sequentially at registration and stable for the program's
/// lifetime. Doubles as the bit position inside a [`Signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentType(pub(super) u8);

impl ComponentType {
    /// The signature bit position for this type
    pub fn bit(self) -> u8 {
        self.0
    }
}

/// Bitset over registered component types
///
/// Bit *i* of an entity's signature is set iff the entity currently has a
/// component of type *i*. Systems carry a signature of required types and an
/// entity matches when the system's bits are a subset of the entity's bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signature(u32);

impl Signature {
    /// The empty signature (no component types)
    pub fn empty() -> Self {
        Self(0)
    }

    /// Set the bit for a component type
    pub fn set(&mut self, ty: ComponentType) {
        self.0 |= 1 << ty.0;
    }

    /// Clear the bit for a component type
    pub fn clear(&mut self, ty: ComponentType) {
        self.0 &= !(1 << ty.0);
    }

    /// Test the bit for a component type
    pub fn test(self, ty: ComponentType) -> bool {
        self.0 & (1 << ty.0) != 0
    }

    /// Subset test: does `self` contain every bit of `required`?
    pub fn contains(self, required: Signature) -> bool {
        self.0 & required.0 == required.0
    }

    /// True if no bits are set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Issues and recycles entity ids and stores per-entity signatures
///
/// Free ids live in a FIFO queue: the next created entity reuses the oldest
/// freed id, which keeps reuse round-robin and avoids rapid id churn.
pub struct EntityManager {
    /// Recycled ids, oldest first
    free_ids: VecDeque<u32>,

    /// Per-entity component signatures, indexed by entity id
    signatures: Vec<Signature>,

    /// Per-entity liveness, indexed by entity id
    alive: Vec<bool>,

    /// Number of currently live entities
    living_count: usize,
}

impl EntityManager {
    /// Create a manager with the full id range available
    pub fn new() -> Self {
        let mut free_ids = VecDeque::with_capacity(MAX_ENTITIES);
        for id in 0..MAX_ENTITIES as u32 {
            free_ids.push_back(id);
        }
        Self {
            free_ids,
            signatures: vec![Signature::empty(); MAX_ENTITIES],
            alive: vec![false; MAX_ENTITIES],
            living_count: 0,
        }
    }

    /// Allocate an entity id from the recycle queue
    pub fn create_entity(&mut self) -> EcsResult<Entity> {
        let id = self
            .free_ids
            .pop_front()
            .ok_or(EcsError::EntityCapacityExceeded)?;
        let entity = Entity::new(id);
        self.alive[entity.index()] = true;
        self.living_count += 1;
        log::trace!("created entity {id}");
        Ok(entity)
    }

    /// Destroy an entity: clear its signature and return its id to the queue
    pub fn destroy_entity(&mut self, entity: Entity) -> EcsResult<()> {
        self.check_alive(entity)?;
        self.signatures[entity.index()] = Signature::empty();
        self.alive[entity.index()] = false;
        self.free_ids.push_back(entity.id());
        self.living_count -= 1;
        log::trace!("destroyed entity {}", entity.id());
        Ok(())
    }

    /// Overwrite an entity's signature
    pub fn set_signature(&mut self, entity: Entity, signature: Signature) -> EcsResult<()> {
        self.check_alive(entity)?;
        self.signatures[entity.index()] = signature;
        Ok(())
    }

    /// Read an entity's signature
    pub fn signature(&self, entity: Entity) -> EcsResult<Signature> {
        self.check_alive(entity)?;
        Ok(self.signatures[entity.index()])
    }

    /// Whether the entity is currently alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        entity.index() < MAX_ENTITIES && self.alive[entity.index()]
    }

    /// Number of currently live entities
    pub fn living_count(&self) -> usize {
        self.living_count
    }

    fn check_alive(&self, entity: Entity) -> EcsResult<()> {
        if self.is_alive(entity) {
            Ok(())
        } else {
            Err(EcsError::EntityNotAlive(entity))
        }
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}
