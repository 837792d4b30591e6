//! # Coordinator
//!
//! Facade unifying the entity, component, and system managers. This is the
//! single public mutation path for ECS state: every component add or remove
//! goes through here so that storage, the entity signature, and system
//! membership always change together.
//!
//! The coordinator also carries a type-keyed registry of engine-wide runtime
//! resources (input state, event queues, and the like): strictly one
//! instance per type, created on demand. It replaces what would otherwise be
//! process-wide globals, so tests get a fresh set per coordinator.

use super::component::{Component, ComponentManager};
use super::entity::{ComponentType, Entity, EntityManager, Signature};
use super::system::{System, SystemManager};
use super::EcsResult;
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Facade over entity, component, and system management
///
/// Invariant (enforced here and nowhere else): after any
/// [`add_component`](Self::add_component) or
/// [`remove_component`](Self::remove_component), the entity's signature bit
/// for that type matches storage, and every system's entity set reflects the
/// new signature.
pub struct Coordinator {
    entities: EntityManager,
    components: ComponentManager,
    systems: SystemManager,

    /// One runtime resource per type, created on demand
    resources: HashMap<TypeId, Box<dyn Any>>,
}

impl Coordinator {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            entities: EntityManager::new(),
            components: ComponentManager::new(),
            systems: SystemManager::new(),
            resources: HashMap::new(),
        }
    }

    // --- Entities ---

    /// Create a new entity
    pub fn create_entity(&mut self) -> EcsResult<Entity> {
        self.entities.create_entity()
    }

    /// Destroy an entity and purge it everywhere
    ///
    /// Order matters: recycle the id and clear the signature first, then
    /// purge component storage, then system sets.
    pub fn destroy_entity(&mut self, entity: Entity) -> EcsResult<()> {
        self.entities.destroy_entity(entity)?;
        self.components.entity_destroyed(entity);
        self.systems.entity_destroyed(entity);
        Ok(())
    }

    /// Whether the entity is currently alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Number of currently live entities
    pub fn living_count(&self) -> usize {
        self.entities.living_count()
    }

    /// Read an entity's component signature
    pub fn signature(&self, entity: Entity) -> EcsResult<Signature> {
        self.entities.signature(entity)
    }

    // --- Components ---

    /// Register a component type; must precede any use of it
    pub fn register_component<T: Component>(&mut self) -> EcsResult<ComponentType> {
        self.components.register_component::<T>()
    }

    /// The id assigned to a registered component type
    pub fn component_type<T: Component>(&self) -> EcsResult<ComponentType> {
        self.components.component_type::<T>()
    }

    /// Add a component to an entity
    ///
    /// Performs the three-step invariant as one operation: storage insert,
    /// signature update, system notification. The entity and type are
    /// validated up front so a failure leaves no partial state behind.
    pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> EcsResult<()> {
        let mut signature = self.entities.signature(entity)?;
        let component_type = self.components.component_type::<T>()?;

        self.components.add_component(entity, value)?;
        signature.set(component_type);
        self.entities.set_signature(entity, signature)?;
        self.systems.entity_signature_changed(entity, signature);
        Ok(())
    }

    /// Remove a component from an entity, returning it
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> EcsResult<T> {
        let mut signature = self.entities.signature(entity)?;
        let component_type = self.components.component_type::<T>()?;

        let removed = self.components.remove_component::<T>(entity)?;
        signature.clear(component_type);
        self.entities.set_signature(entity, signature)?;
        self.systems.entity_signature_changed(entity, signature);
        Ok(removed)
    }

    /// Borrow an entity's component
    pub fn get_component<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
        self.components.get_component::<T>(entity)
    }

    /// Mutably borrow an entity's component
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
        self.components.get_component_mut::<T>(entity)
    }

    /// Whether the entity has a component of this type
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.components.has_component::<T>(entity)
    }

    /// Read-only access to component storage (for systems driven externally)
    pub fn components(&self) -> &ComponentManager {
        &self.components
    }

    /// Mutable access to component storage
    ///
    /// Structural changes (add/remove) must go through the coordinator;
    /// this is for mutating component *values* in bulk.
    pub fn components_mut(&mut self) -> &mut ComponentManager {
        &mut self.components
    }

    // --- Systems ---

    /// Register a system instance; one per type
    pub fn register_system<T: System>(&mut self, system: T) -> EcsResult<()> {
        self.systems.register_system(system)
    }

    /// Record a system's required component signature
    pub fn set_system_signature<T: System>(&mut self, signature: Signature) -> EcsResult<()> {
        self.systems.set_signature::<T>(signature)
    }

    /// Run every system's update, in registration order
    pub fn update_systems(&mut self, delta_time: f32) {
        self.systems.update_all(&mut self.components, delta_time);
    }

    /// Borrow a registered system
    pub fn system<T: System>(&self) -> EcsResult<&T> {
        self.systems.system::<T>()
    }

    /// Mutably borrow a registered system
    pub fn system_mut<T: System>(&mut self) -> EcsResult<&mut T> {
        self.systems.system_mut::<T>()
    }

    // --- Runtime resources ---

    /// Insert (or replace) the single instance of a resource type
    pub fn insert_resource<T: Any>(&mut self, resource: T) {
        self.resources.insert(TypeId::of::<T>(), Box::new(resource));
    }

    /// Borrow the resource of this type, creating it on demand
    pub fn resource<T: Any + Default>(&mut self) -> &T {
        self.resources
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::<T>::default())
            .downcast_ref::<T>()
            .unwrap_or_else(|| unreachable!("resource registry keyed by TypeId"))
    }

    /// Mutably borrow the resource of this type, creating it on demand
    pub fn resource_mut<T: Any + Default>(&mut self) -> &mut T {
        self.resources
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::<T>::default())
            .downcast_mut::<T>()
            .unwrap_or_else(|| unreachable!("resource registry keyed by TypeId"))
    }

    /// Borrow a resource without creating it
    pub fn try_resource<T: Any>(&self) -> Option<&T> {
        self.resources
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::EcsError;
    use std::any::Any as StdAny;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Position {
        x: f32,
    }
    impl Component for Position {}

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Velocity {
        x: f32,
    }
    impl Component for Velocity {}

    struct MoverSystem {
        entities: HashSet<Entity>,
    }

    impl MoverSystem {
        fn new() -> Self {
            Self {
                entities: HashSet::new(),
            }
        }
    }

    impl System for MoverSystem {
        fn entities(&self) -> &HashSet<Entity> {
            &self.entities
        }
        fn entities_mut(&mut self) -> &mut HashSet<Entity> {
            &mut self.entities
        }
        fn update(&mut self, components: &mut ComponentManager, delta_time: f32) {
            for entity in &self.entities {
                let velocity = match components.get_component::<Velocity>(*entity) {
                    Ok(velocity) => *velocity,
                    Err(_) => continue,
                };
                if let Ok(position) = components.get_component_mut::<Position>(*entity) {
                    position.x += velocity.x * delta_time;
                }
            }
        }
        fn as_any(&self) -> &dyn StdAny {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn StdAny {
            self
        }
    }

    fn world_with_mover() -> Coordinator {
        let mut world = Coordinator::new();
        world.register_component::<Position>().unwrap();
        world.register_component::<Velocity>().unwrap();
        world.register_system(MoverSystem::new()).unwrap();
        let mut signature = Signature::empty();
        signature.set(world.component_type::<Position>().unwrap());
        signature.set(world.component_type::<Velocity>().unwrap());
        world.set_system_signature::<MoverSystem>(signature).unwrap();
        world
    }

    #[test]
    fn test_add_component_updates_signature_and_systems() {
        let mut world = world_with_mover();
        let e = world.create_entity().unwrap();

        world.add_component(e, Position { x: 0.0 }).unwrap();
        assert!(!world.system::<MoverSystem>().unwrap().has_entity(e));

        world.add_component(e, Velocity { x: 1.0 }).unwrap();
        assert!(world.system::<MoverSystem>().unwrap().has_entity(e));

        let signature = world.signature(e).unwrap();
        assert!(signature.test(world.component_type::<Position>().unwrap()));
        assert!(signature.test(world.component_type::<Velocity>().unwrap()));
    }

    #[test]
    fn test_remove_component_demotes_entity() {
        let mut world = world_with_mover();
        let e = world.create_entity().unwrap();
        world.add_component(e, Position { x: 0.0 }).unwrap();
        world.add_component(e, Velocity { x: 1.0 }).unwrap();

        let removed = world.remove_component::<Velocity>(e).unwrap();
        assert_eq!(removed, Velocity { x: 1.0 });
        assert!(!world.system::<MoverSystem>().unwrap().has_entity(e));
        assert!(!world.has_component::<Velocity>(e));
        assert!(world.has_component::<Position>(e));
    }

    #[test]
    fn test_signature_matches_has_component() {
        let mut world = world_with_mover();
        let e = world.create_entity().unwrap();
        world.add_component(e, Position { x: 0.0 }).unwrap();

        let signature = world.signature(e).unwrap();
        let pos_type = world.component_type::<Position>().unwrap();
        let vel_type = world.component_type::<Velocity>().unwrap();
        assert_eq!(signature.test(pos_type), world.has_component::<Position>(e));
        assert_eq!(signature.test(vel_type), world.has_component::<Velocity>(e));
    }

    #[test]
    fn test_update_moves_matched_entities() {
        let mut world = world_with_mover();
        let e = world.create_entity().unwrap();
        world.add_component(e, Position { x: 1.0 }).unwrap();
        world.add_component(e, Velocity { x: 2.0 }).unwrap();

        world.update_systems(0.5);
        assert_eq!(world.get_component::<Position>(e).unwrap().x, 2.0);
    }

    #[test]
    fn test_destroy_cleans_up_everywhere() {
        let mut world = world_with_mover();
        let e = world.create_entity().unwrap();
        world.add_component(e, Position { x: 0.0 }).unwrap();
        world.add_component(e, Velocity { x: 0.0 }).unwrap();
        assert!(world.system::<MoverSystem>().unwrap().has_entity(e));

        world.destroy_entity(e).unwrap();
        assert!(!world.is_alive(e));
        assert!(!world.has_component::<Position>(e));
        assert!(!world.has_component::<Velocity>(e));
        assert!(!world.system::<MoverSystem>().unwrap().has_entity(e));
        assert!(matches!(
            world.get_component::<Position>(e),
            Err(EcsError::MissingComponent { .. })
        ));
    }

    #[test]
    fn test_add_to_dead_entity_fails_cleanly() {
        let mut world = world_with_mover();
        let e = world.create_entity().unwrap();
        world.destroy_entity(e).unwrap();

        let result = world.add_component(e, Position { x: 0.0 });
        assert!(matches!(result, Err(EcsError::EntityNotAlive(_))));
        // Nothing leaked into storage.
        assert!(!world.has_component::<Position>(e));
    }

    #[test]
    fn test_resource_registry_one_instance_per_type() {
        #[derive(Default)]
        struct FrameCounter {
            frames: u64,
        }

        let mut world = Coordinator::new();
        assert!(world.try_resource::<FrameCounter>().is_none());

        world.resource_mut::<FrameCounter>().frames += 1;
        world.resource_mut::<FrameCounter>().frames += 1;
        assert_eq!(world.resource::<FrameCounter>().frames, 2);

        world.insert_resource(FrameCounter { frames: 10 });
        assert_eq!(world.resource::<FrameCounter>().frames, 10);
    }
}
