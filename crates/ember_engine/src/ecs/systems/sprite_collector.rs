//! Sprite collection system
//!
//! Walks the matched sprite entities each frame and turns them into
//! [`QuadCommand`]s, which the application then submits to the renderer
//! between `begin_scene` and `end_scene`. Collection and submission are
//! separate steps so the system can run inside the normal
//! `update_systems` pass while the renderer is borrowed elsewhere.

use crate::ecs::component::ComponentManager;
use crate::ecs::components::{SpriteComponent, TransformComponent};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::foundation::math::{transform_2d, Vec2};
use crate::render::{QuadCommand, RenderResult, Renderer2D};
use std::any::Any;
use std::collections::HashSet;

/// Collects quad commands from sprite entities
pub struct SpriteCollector {
    entities: HashSet<Entity>,

    /// Commands gathered by the most recent update
    collected: Vec<QuadCommand>,

    /// Flag to enable/disable collection
    enabled: bool,
}

impl SpriteCollector {
    /// Create the collector with no matched entities
    pub fn new() -> Self {
        Self {
            entities: HashSet::new(),
            collected: Vec::new(),
            enabled: true,
        }
    }

    /// Enable or disable collection
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether collection is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of commands gathered by the last update
    pub fn queued_commands(&self) -> usize {
        self.collected.len()
    }

    /// Submit all gathered commands to an active scene and clear the queue
    pub fn submit(&mut self, renderer: &mut Renderer2D) -> RenderResult<()> {
        for command in self.collected.drain(..) {
            renderer.draw_command(command)?;
        }
        Ok(())
    }
}

impl Default for SpriteCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl System for SpriteCollector {
    fn entities(&self) -> &HashSet<Entity> {
        &self.entities
    }

    fn entities_mut(&mut self) -> &mut HashSet<Entity> {
        &mut self.entities
    }

    fn update(&mut self, components: &mut ComponentManager, _delta_time: f32) {
        self.collected.clear();
        if !self.enabled {
            return;
        }

        for entity in &self.entities {
            let sprite = match components.get_component::<SpriteComponent>(*entity) {
                Ok(sprite) => *sprite,
                Err(_) => continue,
            };
            if !sprite.visible {
                continue;
            }
            let transform = match components.get_component::<TransformComponent>(*entity) {
                Ok(transform) => *transform,
                Err(_) => continue,
            };

            // Entity scale multiplies the sprite's base size.
            let size = Vec2::new(
                transform.scale.x * sprite.size.x,
                transform.scale.y * sprite.size.y,
            );
            let world = transform_2d(transform.position, transform.rotation, size);
            // The transform's Z contributes fine depth on top of the
            // sprite's own depth value.
            let depth = sprite.depth + transform.position.z;

            let command = match sprite.texture {
                Some(texture) => QuadCommand::textured(
                    world,
                    sprite.color,
                    texture,
                    sprite.uv,
                    sprite.layer,
                    depth,
                ),
                None => QuadCommand::solid(world, sprite.color, sprite.layer, depth),
            };
            self.collected.push(command);
        }
        log::trace!("collected {} sprite quads", self.collected.len());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Render2DConfig;
    use crate::ecs::{Coordinator, Signature};
    use crate::foundation::math::Vec3;
    use crate::render::{Camera2D, Color, NullBackend, TextureId};

    fn sprite_world() -> Coordinator {
        let mut world = Coordinator::new();
        world.register_component::<TransformComponent>().unwrap();
        world.register_component::<SpriteComponent>().unwrap();
        world.register_system(SpriteCollector::new()).unwrap();
        let mut signature = Signature::empty();
        signature.set(world.component_type::<TransformComponent>().unwrap());
        signature.set(world.component_type::<SpriteComponent>().unwrap());
        world
            .set_system_signature::<SpriteCollector>(signature)
            .unwrap();
        world
    }

    fn spawn_sprite(world: &mut Coordinator, layer: i32) -> Entity {
        let entity = world.create_entity().unwrap();
        world
            .add_component(entity, TransformComponent::identity())
            .unwrap();
        world
            .add_component(
                entity,
                SpriteComponent::solid(Vec2::new(1.0, 1.0), Color::WHITE).with_layer(layer),
            )
            .unwrap();
        entity
    }

    #[test]
    fn test_collects_matched_sprites() {
        let mut world = sprite_world();
        spawn_sprite(&mut world, 0);
        spawn_sprite(&mut world, 1);

        world.update_systems(0.0);
        assert_eq!(
            world.system::<SpriteCollector>().unwrap().queued_commands(),
            2
        );
    }

    #[test]
    fn test_invisible_sprites_skipped() {
        let mut world = sprite_world();
        let entity = spawn_sprite(&mut world, 0);
        world
            .get_component_mut::<SpriteComponent>(entity)
            .unwrap()
            .visible = false;

        world.update_systems(0.0);
        assert_eq!(
            world.system::<SpriteCollector>().unwrap().queued_commands(),
            0
        );
    }

    #[test]
    fn test_disabled_collector_gathers_nothing() {
        let mut world = sprite_world();
        spawn_sprite(&mut world, 0);
        world
            .system_mut::<SpriteCollector>()
            .unwrap()
            .set_enabled(false);

        world.update_systems(0.0);
        assert_eq!(
            world.system::<SpriteCollector>().unwrap().queued_commands(),
            0
        );
    }

    #[test]
    fn test_submit_drains_into_renderer() {
        let mut world = sprite_world();
        spawn_sprite(&mut world, 0);
        let textured = world.create_entity().unwrap();
        world
            .add_component(
                textured,
                TransformComponent::from_position(Vec3::new(1.0, 0.0, 0.0)),
            )
            .unwrap();
        world
            .add_component(
                textured,
                SpriteComponent::textured(Vec2::new(2.0, 2.0), TextureId(1)),
            )
            .unwrap();

        world.update_systems(0.0);

        let mut renderer =
            Renderer2D::new(Box::new(NullBackend::new()), &Render2DConfig::default()).unwrap();
        renderer.begin_scene(&Camera2D::default()).unwrap();
        let collector = world.system_mut::<SpriteCollector>().unwrap();
        collector.submit(&mut renderer).unwrap();
        renderer.end_scene().unwrap();

        let stats = renderer.stats();
        assert_eq!(stats.quad_count, 2);
        // One solid batch and one textured batch.
        assert_eq!(stats.batch_count, 2);
        assert_eq!(stats.texture_binds, 1);
        assert_eq!(collector.queued_commands(), 0);
    }
}
