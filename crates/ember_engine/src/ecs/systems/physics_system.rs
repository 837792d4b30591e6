//! Physics integration system
//!
//! Applies each matched entity's velocity to its transform every frame.
//! Matches entities with both a transform and a movement component.

use crate::ecs::component::ComponentManager;
use crate::ecs::components::{MovementComponent, TransformComponent};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use std::any::Any;
use std::collections::HashSet;

/// Integrates movement into transforms
pub struct PhysicsSystem {
    entities: HashSet<Entity>,
}

impl PhysicsSystem {
    /// Create the system with no matched entities
    pub fn new() -> Self {
        Self {
            entities: HashSet::new(),
        }
    }
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for PhysicsSystem {
    fn entities(&self) -> &HashSet<Entity> {
        &self.entities
    }

    fn entities_mut(&mut self) -> &mut HashSet<Entity> {
        &mut self.entities
    }

    fn update(&mut self, components: &mut ComponentManager, delta_time: f32) {
        for entity in &self.entities {
            // Membership guarantees both components exist; a failed lookup
            // means an invariant broke upstream, so skip rather than panic.
            let movement = match components.get_component::<MovementComponent>(*entity) {
                Ok(movement) => *movement,
                Err(_) => continue,
            };
            if let Ok(transform) = components.get_component_mut::<TransformComponent>(*entity) {
                transform.position += movement.position_delta(delta_time);
                transform.rotation += movement.rotation_delta(delta_time);
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
