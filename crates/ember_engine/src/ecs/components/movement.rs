//! Movement component for entities that move each frame
//!
//! Velocity only; integration into the transform is the physics system's
//! job, keeping this component pure data.

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Linear and angular velocity for a 2D entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementComponent {
    /// Linear velocity in world units per second
    pub linear: Vec3,

    /// Angular velocity about Z in radians per second
    pub angular: f32,

    /// Whether movement is applied at all
    pub enabled: bool,
}

impl Component for MovementComponent {}

impl Default for MovementComponent {
    fn default() -> Self {
        Self {
            linear: Vec3::zeros(),
            angular: 0.0,
            enabled: true,
        }
    }
}

impl MovementComponent {
    /// Create a stationary movement component
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an initial linear velocity
    pub fn with_linear(linear: Vec3) -> Self {
        Self {
            linear,
            ..Default::default()
        }
    }

    /// Builder: set angular velocity (radians per second)
    pub fn with_angular(mut self, angular: f32) -> Self {
        self.angular = angular;
        self
    }

    /// Position delta accumulated over `delta_time` seconds
    pub fn position_delta(&self, delta_time: f32) -> Vec3 {
        if self.enabled {
            self.linear * delta_time
        } else {
            Vec3::zeros()
        }
    }

    /// Rotation delta accumulated over `delta_time` seconds
    pub fn rotation_delta(&self, delta_time: f32) -> f32 {
        if self.enabled {
            self.angular * delta_time
        } else {
            0.0
        }
    }
}
