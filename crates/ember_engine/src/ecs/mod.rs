//! # Entity-Component-System core
//!
//! The ECS is split along ownership lines:
//!
//! - [`entity::EntityManager`] issues and recycles [`Entity`] ids and stores
//!   each entity's component [`Signature`].
//! - [`component::ComponentManager`] owns one dense [`component::ComponentArray`]
//!   per registered component type.
//! - [`system::SystemManager`] tracks each [`System`]'s required signature and
//!   its matched entity set.
//! - [`Coordinator`] is the facade that keeps the three in lockstep: every
//!   component add/remove updates storage, the entity signature, and system
//!   membership as one operation. It is the only public mutation path.
//!
//! Contract violations (duplicate registration, capacity limits, absent
//! components) surface as [`EcsError`] values rather than panics, so callers
//! can decide how fatal they are.

pub mod component;
pub mod components;
pub mod coordinator;
pub mod entity;
pub mod system;
pub mod systems;

pub use component::{Component, ComponentArray, ComponentManager};
pub use coordinator::Coordinator;
pub use entity::{ComponentType, Entity, EntityManager, Signature, MAX_COMPONENTS, MAX_ENTITIES};
pub use system::{System, SystemManager};

/// Result type for ECS operations
pub type EcsResult<T> = Result<T, EcsError>;

/// Errors raised by ECS contract violations
///
/// These correspond to the assertions of a debug-build ECS; here they are
/// typed values so a caller can recover (or abort) at the call site.
#[derive(Debug, thiserror::Error)]
pub enum EcsError {
    /// The entity pool is exhausted
    #[error("entity capacity exceeded: {MAX_ENTITIES} entities are already alive")]
    EntityCapacityExceeded,

    /// Operation targeted an entity that is not currently alive
    #[error("entity {0:?} is not alive")]
    EntityNotAlive(Entity),

    /// A component type was registered twice
    #[error("component type '{0}' is already registered")]
    DuplicateComponentType(&'static str),

    /// Too many distinct component types registered
    #[error("component type capacity exceeded: at most {MAX_COMPONENTS} types may be registered")]
    ComponentTypeCapacityExceeded,

    /// A component type was used before registration
    #[error("component type '{0}' was never registered")]
    UnregisteredComponentType(&'static str),

    /// An entity was given a component it already has
    #[error("entity {entity:?} already has a '{type_name}' component")]
    DuplicateComponent {
        /// The entity in question
        entity: Entity,
        /// Component type name
        type_name: &'static str,
    },

    /// A component was requested from an entity that does not have it
    #[error("entity {entity:?} has no '{type_name}' component")]
    MissingComponent {
        /// The entity in question
        entity: Entity,
        /// Component type name
        type_name: &'static str,
    },

    /// A system type was registered twice
    #[error("system type '{0}' is already registered")]
    DuplicateSystem(&'static str),

    /// A system type was used before registration
    #[error("system type '{0}' was never registered")]
    UnregisteredSystem(&'static str),
}
