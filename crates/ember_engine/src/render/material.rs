//! 2D material descriptors
//!
//! A [`Material2D`] is derived from each quad command and exists only to
//! answer one question: can two commands share a batch? Two materials are
//! equal when their shader and texture match; the tint rides along for
//! backends but never splits a batch.

use super::quad::{Color, QuadCommand, TextureId};
use std::hash::{Hash, Hasher};

/// Opaque handle to a shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub u32);

/// Built-in shader for untextured quads
pub const SHADER_SOLID: ShaderId = ShaderId(0);

/// Built-in shader for textured quads
pub const SHADER_TEXTURED: ShaderId = ShaderId(1);

/// Shader + texture + tint descriptor deciding batch compatibility
#[derive(Debug, Clone, Copy)]
pub struct Material2D {
    /// Shader program to bind
    pub shader: ShaderId,

    /// Texture to bind, if any
    pub texture: Option<TextureId>,

    /// Base tint. Not part of equality.
    pub tint: Color,
}

impl Material2D {
    /// Material for an untextured, tinted quad
    pub fn solid(tint: Color) -> Self {
        Self {
            shader: SHADER_SOLID,
            texture: None,
            tint,
        }
    }

    /// Material for a textured, tinted quad
    pub fn textured(texture: TextureId, tint: Color) -> Self {
        Self {
            shader: SHADER_TEXTURED,
            texture: Some(texture),
            tint,
        }
    }

    /// Derive the material a command will be batched under
    pub fn from_command(command: &QuadCommand) -> Self {
        match command.texture {
            Some(texture) => Self::textured(texture, command.color),
            None => Self::solid(command.color),
        }
    }
}

// Batch compatibility: shader and texture only.
impl PartialEq for Material2D {
    fn eq(&self, other: &Self) -> bool {
        self.shader == other.shader && self.texture == other.texture
    }
}

impl Eq for Material2D {}

impl Hash for Material2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shader.hash(state);
        self.texture.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4;
    use crate::render::quad::UvRect;

    #[test]
    fn test_tint_does_not_split_materials() {
        let red = Material2D::solid(Color::rgb(1.0, 0.0, 0.0));
        let blue = Material2D::solid(Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(red, blue);
    }

    #[test]
    fn test_different_textures_differ() {
        let a = Material2D::textured(TextureId(1), Color::WHITE);
        let b = Material2D::textured(TextureId(2), Color::WHITE);
        assert_ne!(a, b);
    }

    #[test]
    fn test_solid_and_textured_differ() {
        let solid = Material2D::solid(Color::WHITE);
        let textured = Material2D::textured(TextureId(1), Color::WHITE);
        assert_ne!(solid, textured);
        assert_eq!(solid.shader, SHADER_SOLID);
        assert_eq!(textured.shader, SHADER_TEXTURED);
    }

    #[test]
    fn test_derived_from_command() {
        let solid = QuadCommand::solid(Mat4::identity(), Color::WHITE, 0, 0.0);
        assert_eq!(Material2D::from_command(&solid), Material2D::solid(Color::WHITE));

        let textured = QuadCommand::textured(
            Mat4::identity(),
            Color::WHITE,
            TextureId(9),
            UvRect::FULL,
            0,
            0.0,
        );
        assert_eq!(
            Material2D::from_command(&textured),
            Material2D::textured(TextureId(9), Color::WHITE)
        );
    }
}
