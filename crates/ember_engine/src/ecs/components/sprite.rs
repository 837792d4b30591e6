//! Sprite component
//!
//! Everything the 2D renderer needs to draw an entity as a quad, minus the
//! world placement (which lives in the transform component).

use crate::ecs::Component;
use crate::foundation::math::Vec2;
use crate::render::{Color, TextureId, UvRect};

/// Renderable 2D quad description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    /// Quad size in world units
    pub size: Vec2,

    /// Tint color; opaque white leaves a texture unmodified
    pub color: Color,

    /// Texture handle, or `None` for a solid-color quad
    pub texture: Option<TextureId>,

    /// Sub-rectangle of the texture to sample
    pub uv: UvRect,

    /// Coarse draw-order layer (higher draws later)
    pub layer: i32,

    /// Fine-grained depth within the layer
    pub depth: f32,

    /// Whether the sprite is drawn at all
    pub visible: bool,
}

impl Component for SpriteComponent {}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            size: Vec2::new(1.0, 1.0),
            color: Color::WHITE,
            texture: None,
            uv: UvRect::FULL,
            layer: 0,
            depth: 0.0,
            visible: true,
        }
    }
}

impl SpriteComponent {
    /// Solid-color sprite of the given size
    pub fn solid(size: Vec2, color: Color) -> Self {
        Self {
            size,
            color,
            ..Default::default()
        }
    }

    /// Textured sprite of the given size, untinted
    pub fn textured(size: Vec2, texture: TextureId) -> Self {
        Self {
            size,
            texture: Some(texture),
            ..Default::default()
        }
    }

    /// Builder: set the draw layer
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Builder: set the in-layer depth
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder: set the UV sub-rectangle
    pub fn with_uv(mut self, uv: UvRect) -> Self {
        self.uv = uv;
        self
    }
}
