//! # Ember Engine
//!
//! A 2D game engine core built around two tightly coupled subsystems:
//!
//! - **ECS**: entity lifecycle, dense typed component storage, and
//!   signature-based system dispatch behind a single [`Coordinator`] facade.
//! - **Quad batching**: per-frame draw calls collected into
//!   material-compatible batches and flushed through a backend-agnostic
//!   command buffer.
//!
//! Hardware devices, asset decoding, windowing, and audio are external
//! collaborators reached through trait seams ([`render::RenderBackend`],
//! [`assets::ResourceProvider`]); the engine itself never touches a GPU.
//!
//! ## Quick Start
//!
//! ```rust
//! use ember_engine::prelude::*;
//!
//! fn main() -> Result<(), EcsError> {
//!     let mut world = Coordinator::new();
//!     world.register_component::<TransformComponent>()?;
//!     world.register_component::<MovementComponent>()?;
//!
//!     let mut signature = Signature::empty();
//!     signature.set(world.component_type::<TransformComponent>()?);
//!     signature.set(world.component_type::<MovementComponent>()?);
//!     world.register_system(PhysicsSystem::new())?;
//!     world.set_system_signature::<PhysicsSystem>(signature)?;
//!
//!     let entity = world.create_entity()?;
//!     world.add_component(entity, TransformComponent::from_position(Vec3::new(1.0, 2.0, 3.0)))?;
//!     world.add_component(entity, MovementComponent::with_linear(Vec3::new(1.0, 0.0, 0.0)))?;
//!
//!     world.update_systems(1.0);
//!     let transform = world.get_component::<TransformComponent>(entity)?;
//!     assert_eq!(transform.position, Vec3::new(2.0, 2.0, 3.0));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod foundation;

pub mod assets;
pub mod ecs;
pub mod render;

pub use crate::core::config::{ConfigError, EngineConfig, Render2DConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::core::config::{EngineConfig, Render2DConfig};
    pub use crate::ecs::{
        components::{HealthComponent, MovementComponent, SpriteComponent, TransformComponent},
        systems::{PhysicsSystem, SpriteCollector},
        Component, Coordinator, EcsError, Entity, Signature, System,
    };
    pub use crate::foundation::math::{Mat4, Vec2, Vec3};
    pub use crate::render::{
        Camera2D, Color, NullBackend, QuadCommand, Rect, RenderBackend, RenderError, RenderStats,
        Renderer2D, TextureId, UvRect,
    };
}
