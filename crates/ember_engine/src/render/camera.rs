//! Orthographic 2D camera
//!
//! Owns the projection and view matrices the renderer stamps into each
//! frame's command stream. The Z range is generous so layer and depth values
//! never clip.

use crate::foundation::math::{Mat4, Vec2, Vec3};

/// 2D camera with an orthographic projection
#[derive(Debug, Clone)]
pub struct Camera2D {
    projection: Mat4,
    position: Vec2,
    zoom: f32,
}

impl Camera2D {
    /// Camera showing a `width` x `height` world region centered on the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_bounds(-width / 2.0, width / 2.0, -height / 2.0, height / 2.0)
    }

    /// Camera with explicit world-space bounds
    pub fn from_bounds(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let projection =
            nalgebra::Orthographic3::new(left, right, bottom, top, -1000.0, 1000.0).to_homogeneous();
        Self {
            projection,
            position: Vec2::zeros(),
            zoom: 1.0,
        }
    }

    /// Move the camera to a world position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current camera position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the zoom factor (2.0 shows half the world area)
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(f32::EPSILON);
    }

    /// The view matrix (inverse camera transform)
    pub fn view(&self) -> Mat4 {
        let scale = Mat4::new_scaling(self.zoom);
        let translation =
            Mat4::new_translation(&Vec3::new(-self.position.x, -self.position.y, 0.0));
        scale * translation
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view()
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(2.0, 2.0)
    }
}
