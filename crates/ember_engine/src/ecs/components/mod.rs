//! Built-in component types
//!
//! Pure data components with no logic beyond constructors and small
//! conversion helpers. Systems own all behavior.

pub mod health;
pub mod movement;
pub mod sprite;
pub mod transform;

pub use health::HealthComponent;
pub use movement::MovementComponent;
pub use sprite::SpriteComponent;
pub use transform::TransformComponent;
