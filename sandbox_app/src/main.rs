//! Headless sandbox scene
//!
//! Spawns a field of moving sprites, runs the physics and sprite-collection
//! systems for a fixed number of frames against the null backend, and logs
//! per-frame batching statistics. Run with `RUST_LOG=debug` to see them.

use ember_engine::assets::{MemoryResources, ResourceProvider};
use ember_engine::prelude::*;

const FRAMES: u32 = 120;
const DELTA_TIME: f32 = 1.0 / 60.0;

fn build_world(resources: &MemoryResources) -> Result<Coordinator, EcsError> {
    let mut world = Coordinator::new();
    world.register_component::<TransformComponent>()?;
    world.register_component::<MovementComponent>()?;
    world.register_component::<SpriteComponent>()?;

    world.register_system(PhysicsSystem::new())?;
    let mut physics_sig = Signature::empty();
    physics_sig.set(world.component_type::<TransformComponent>()?);
    physics_sig.set(world.component_type::<MovementComponent>()?);
    world.set_system_signature::<PhysicsSystem>(physics_sig)?;

    world.register_system(SpriteCollector::new())?;
    let mut sprite_sig = Signature::empty();
    sprite_sig.set(world.component_type::<TransformComponent>()?);
    sprite_sig.set(world.component_type::<SpriteComponent>()?);
    world.set_system_signature::<SpriteCollector>(sprite_sig)?;

    let texture = resources.texture("textures/crate.png");

    // A grid of drifting sprites across three layers; every third one is
    // textured so the batcher has real material variety to chew on.
    for row in 0..10 {
        for col in 0..30 {
            let entity = world.create_entity()?;
            world.add_component(
                entity,
                TransformComponent::from_position(Vec3::new(col as f32, row as f32, 0.0)),
            )?;
            world.add_component(
                entity,
                MovementComponent::with_linear(Vec3::new(0.5, 0.1 * row as f32, 0.0)),
            )?;
            let mut sprite = if col % 3 == 0 {
                match texture {
                    Some(texture) => SpriteComponent::textured(Vec2::new(0.9, 0.9), texture),
                    None => SpriteComponent::solid(Vec2::new(0.9, 0.9), Color::WHITE),
                }
            } else {
                SpriteComponent::solid(Vec2::new(0.9, 0.9), Color::rgb(0.2, 0.6, 0.9))
            };
            sprite.layer = row % 3;
            world.add_component(entity, sprite)?;
        }
    }

    Ok(world)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut resources = MemoryResources::new();
    resources.load("textures/crate.png")?;

    let mut world = build_world(&resources)?;
    let mut renderer = Renderer2D::new(
        Box::new(NullBackend::new()),
        &EngineConfig::default().render,
    )?;
    let mut camera = Camera2D::new(40.0, 20.0);

    for frame in 0..FRAMES {
        world.update_systems(DELTA_TIME);
        camera.set_position(Vec2::new(frame as f32 * 0.01, 0.0));

        renderer.begin_scene(&camera)?;
        world
            .system_mut::<SpriteCollector>()?
            .submit(&mut renderer)?;
        renderer.end_scene()?;

        if frame % 30 == 0 {
            let stats = renderer.stats();
            log::info!(
                "frame {frame}: {} quads in {} batches, {} texture binds",
                stats.quad_count,
                stats.batch_count,
                stats.texture_binds
            );
        }
    }

    let stats = renderer.stats();
    println!(
        "rendered {FRAMES} frames: last frame {} quads, {} batches, {} texture binds",
        stats.quad_count, stats.batch_count, stats.texture_binds
    );
    Ok(())
}
