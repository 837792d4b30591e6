//! Backend-agnostic draw command stream
//!
//! The batcher flushes into a [`CommandBuffer`], a flat list of
//! [`DrawCommand`]s executed in submission order by whatever
//! [`RenderBackend`] is plugged in. Hardware devices (OpenGL, Vulkan, a test
//! recorder) all live behind that trait; the engine ships only
//! [`NullBackend`].

use super::quad::{Color, TextureId, UvRect};
use super::RenderResult;
use crate::foundation::math::Mat4;

/// One backend-level command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the render target to a color
    Clear {
        /// Clear color
        color: Color,
    },

    /// Set the pixel viewport
    SetViewport {
        /// Left edge in pixels
        x: u32,
        /// Bottom edge in pixels
        y: u32,
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },

    /// Set the combined view-projection matrix for subsequent draws
    SetViewProjection(Mat4),

    /// Bind a texture for subsequent textured draws
    BindTexture(TextureId),

    /// Draw an untextured quad
    DrawQuad {
        /// World transform of the unit quad
        transform: Mat4,
        /// Fill color
        color: Color,
    },

    /// Draw a quad sampling the currently bound texture
    DrawTexturedQuad {
        /// World transform of the unit quad
        transform: Mat4,
        /// Tint color
        color: Color,
        /// Texture sub-rectangle
        uv: UvRect,
    },
}

/// Flat command stream for one frame, executed in submission order
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// All commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if no commands have been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all commands, keeping allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Vertex layout backends receive for quad geometry
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// World-space position
    pub position: [f32; 3],
    /// Texture coordinate
    pub uv: [f32; 2],
    /// Vertex color
    pub color: [f32; 4],
}

/// Expand a quad command into four vertices (bottom-left, bottom-right,
/// top-right, top-left)
///
/// The unit quad spans `[-0.5, 0.5]^2`; the transform carries position,
/// rotation, and size.
pub fn expand_quad(transform: &Mat4, color: Color, uv: UvRect) -> [QuadVertex; 4] {
    let corners = [
        (-0.5_f32, -0.5_f32, uv.u0, uv.v0),
        (0.5, -0.5, uv.u1, uv.v0),
        (0.5, 0.5, uv.u1, uv.v1),
        (-0.5, 0.5, uv.u0, uv.v1),
    ];
    let rgba = color.to_array();
    corners.map(|(x, y, u, v)| {
        let p = transform.transform_point(&nalgebra::Point3::new(x, y, 0.0));
        QuadVertex {
            position: [p.x, p.y, p.z],
            uv: [u, v],
            color: rgba,
        }
    })
}

/// Executes a command buffer against a device
///
/// Implementations must process commands strictly in submission order.
pub trait RenderBackend {
    /// Execute every command in the buffer
    fn execute(&mut self, buffer: &CommandBuffer) -> RenderResult<()>;
}

/// Backend that discards all commands, counting them
///
/// Useful for headless runs and as a baseline for tests.
#[derive(Debug, Default)]
pub struct NullBackend {
    executed: usize,
    frames: usize,
}

impl NullBackend {
    /// Create a fresh null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Total commands executed across all frames
    pub fn executed_commands(&self) -> usize {
        self.executed
    }

    /// Number of buffers executed
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderBackend for NullBackend {
    fn execute(&mut self, buffer: &CommandBuffer) -> RenderResult<()> {
        self.executed += buffer.len();
        self.frames += 1;
        log::trace!("null backend consumed {} commands", buffer.len());
        Ok(())
    }
}
