//! Math type aliases and small helpers
//!
//! The engine standardizes on `nalgebra` with `f32` scalars. These aliases
//! keep signatures short and give one place to swap precision later.

/// 2D vector
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4x4 column-major matrix
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Build a 2D world transform: translate, rotate about Z, then scale
///
/// The quad unit geometry spans `[-0.5, 0.5]^2`, so `scale` is the final
/// world-space size of the quad.
pub fn transform_2d(position: Vec3, rotation_z: f32, scale: Vec2) -> Mat4 {
    let translation = Mat4::new_translation(&position);
    let rotation = Mat4::from_axis_angle(&Vec3::z_axis(), rotation_z);
    let scaling = Mat4::new_nonuniform_scaling(&Vec3::new(scale.x, scale.y, 1.0));
    translation * rotation * scaling
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_2d_translation_only() {
        let m = transform_2d(Vec3::new(3.0, -2.0, 0.5), 0.0, Vec2::new(1.0, 1.0));
        let p = m.transform_point(&nalgebra::Point3::origin());
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, -2.0);
        assert_relative_eq!(p.z, 0.5);
    }

    #[test]
    fn test_transform_2d_scale() {
        let m = transform_2d(Vec3::zeros(), 0.0, Vec2::new(4.0, 2.0));
        let p = m.transform_point(&nalgebra::Point3::new(0.5, 0.5, 0.0));
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 1.0);
    }

    #[test]
    fn test_transform_2d_rotation() {
        let m = transform_2d(Vec3::zeros(), std::f32::consts::FRAC_PI_2, Vec2::new(1.0, 1.0));
        let p = m.transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }
}
