//! Transform component
//!
//! World-space placement for 2D entities: position in world units (Z carries
//! fine depth), rotation about the Z axis, and a 2D scale.

use crate::ecs::Component;
use crate::foundation::math::{transform_2d, Mat4, Vec2, Vec3};

/// World-space transform for a 2D entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformComponent {
    /// World position; `z` is fine-grained depth within a layer
    pub position: Vec3,

    /// Rotation about the Z axis, radians
    pub rotation: f32,

    /// World-space scale factors
    pub scale: Vec2,
}

impl Component for TransformComponent {}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl TransformComponent {
    /// Identity transform at the origin
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder: set rotation (radians)
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a world matrix (translate, rotate, scale)
    pub fn to_matrix(&self) -> Mat4 {
        transform_2d(self.position, self.rotation, self.scale)
    }
}
