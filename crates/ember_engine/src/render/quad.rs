//! Quad draw instructions and their value types
//!
//! A [`QuadCommand`] is one frame's worth of draw instruction for a single
//! quad. Commands are created transiently by draw calls, grouped by the
//! batcher, and discarded at flush.

use crate::foundation::math::Mat4;

/// Opaque handle to a loaded texture
///
/// Issued by the (external) resource layer; the pipeline never sees pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// RGBA color with float channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel (1 = opaque)
    pub a: f32,
}

impl Color {
    /// Opaque white; the default for untinted draws
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    /// Construct from RGBA channels
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque color from RGB channels
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// As a flat array, for vertex data
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Sub-rectangle of a texture in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    /// Left edge
    pub u0: f32,
    /// Bottom edge
    pub v0: f32,
    /// Right edge
    pub u1: f32,
    /// Top edge
    pub v1: f32,
}

impl UvRect {
    /// The whole texture
    pub const FULL: Self = Self {
        u0: 0.0,
        v0: 0.0,
        u1: 1.0,
        v1: 1.0,
    };
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// One draw instruction for a single 2D quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCommand {
    /// World transform applied to the unit quad `[-0.5, 0.5]^2`
    pub transform: Mat4,

    /// Tint color; opaque white for untextured defaults
    pub color: Color,

    /// Texture handle, or `None` for a solid-color quad
    pub texture: Option<TextureId>,

    /// Texture sub-rectangle to sample
    pub uv: UvRect,

    /// Coarse draw-order layer (lower draws first)
    pub layer: i32,

    /// Fine-grained depth within the layer (lower draws first)
    pub depth: f32,
}

impl QuadCommand {
    /// Solid-color quad
    pub fn solid(transform: Mat4, color: Color, layer: i32, depth: f32) -> Self {
        Self {
            transform,
            color,
            texture: None,
            uv: UvRect::FULL,
            layer,
            depth,
        }
    }

    /// Textured quad with a tint
    pub fn textured(
        transform: Mat4,
        color: Color,
        texture: TextureId,
        uv: UvRect,
        layer: i32,
        depth: f32,
    ) -> Self {
        Self {
            transform,
            color,
            texture: Some(texture),
            uv,
            layer,
            depth,
        }
    }
}
