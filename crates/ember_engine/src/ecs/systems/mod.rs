//! Built-in systems

pub mod physics_system;
pub mod sprite_collector;

pub use physics_system::PhysicsSystem;
pub use sprite_collector::SpriteCollector;
