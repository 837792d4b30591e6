//! # 2D Renderer Facade
//!
//! The per-frame rendering API. A frame is bracketed by
//! [`begin_scene`](Renderer2D::begin_scene) and
//! [`end_scene`](Renderer2D::end_scene); between the two, draw calls are
//! converted into [`QuadCommand`]s and fed to the batcher. `end_scene`
//! flushes the batcher into the command buffer and submits the buffer to the
//! owned [`RenderBackend`].
//!
//! The facade is a strict state machine (Inactive, SceneActive); calls in
//! the wrong state return [`RenderError`] rather than corrupting the frame.

use super::batch::QuadBatch;
use super::camera::Camera2D;
use super::commands::{CommandBuffer, DrawCommand, RenderBackend};
use super::quad::{Color, QuadCommand, TextureId, UvRect};
use super::{RenderError, RenderResult};
use crate::core::config::Render2DConfig;
use crate::foundation::math::{transform_2d, Vec2, Vec3};

/// Axis-aligned rectangle; `position` is the quad center in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center of the rectangle
    pub position: Vec2,

    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Construct from center and size
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }
}

/// Optional draw parameters beyond rectangle and color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadParams {
    /// Rotation about the quad center, radians
    pub rotation: f32,

    /// Texture to sample, or `None` for a solid fill
    pub texture: Option<TextureId>,

    /// Texture sub-rectangle
    pub uv: UvRect,

    /// Coarse draw-order layer
    pub layer: i32,

    /// Fine-grained depth within the layer
    pub depth: f32,
}

impl Default for QuadParams {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            texture: None,
            uv: UvRect::FULL,
            layer: 0,
            depth: 0.0,
        }
    }
}

/// Per-frame rendering statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Quads submitted this frame
    pub quad_count: usize,

    /// Batches emitted at flush
    pub batch_count: usize,

    /// Texture bind switches emitted at flush
    pub texture_binds: usize,
}

/// Scene bracket state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SceneState {
    Inactive,
    Active,
}

/// High-level 2D renderer driving the quad batcher
pub struct Renderer2D {
    batch: QuadBatch,
    buffer: CommandBuffer,
    backend: Box<dyn RenderBackend>,
    state: SceneState,
    stats: RenderStats,
}

impl Renderer2D {
    /// Create a renderer over a backend, validating configuration
    pub fn new(backend: Box<dyn RenderBackend>, config: &Render2DConfig) -> RenderResult<Self> {
        Ok(Self {
            batch: QuadBatch::new(config)?,
            buffer: CommandBuffer::with_capacity(config.initial_quad_capacity),
            backend,
            state: SceneState::Inactive,
            stats: RenderStats::default(),
        })
    }

    /// Begin a frame: reset statistics and stamp the camera matrices
    pub fn begin_scene(&mut self, camera: &Camera2D) -> RenderResult<()> {
        if self.state == SceneState::Active {
            return Err(RenderError::SceneAlreadyActive);
        }
        self.stats = RenderStats::default();
        self.buffer.clear();
        self.buffer
            .push(DrawCommand::SetViewProjection(camera.view_projection()));
        self.state = SceneState::Active;
        Ok(())
    }

    /// Draw a solid-color rectangle
    pub fn draw_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.draw_rect_ext(rect, color, QuadParams::default())
    }

    /// Draw a rectangle with rotation, texture, layer, and depth control
    pub fn draw_rect_ext(
        &mut self,
        rect: Rect,
        color: Color,
        params: QuadParams,
    ) -> RenderResult<()> {
        let transform = transform_2d(
            Vec3::new(rect.position.x, rect.position.y, params.depth),
            params.rotation,
            rect.size,
        );
        let command = match params.texture {
            Some(texture) => QuadCommand::textured(
                transform,
                color,
                texture,
                params.uv,
                params.layer,
                params.depth,
            ),
            None => QuadCommand::solid(transform, color, params.layer, params.depth),
        };
        self.draw_command(command)
    }

    /// Submit a pre-built quad command (used by collector systems)
    pub fn draw_command(&mut self, command: QuadCommand) -> RenderResult<()> {
        if self.state != SceneState::Active {
            return Err(RenderError::SceneNotActive("draw"));
        }
        self.batch.push(command);
        self.stats.quad_count += 1;
        Ok(())
    }

    /// End the frame: flush batches, submit to the backend, capture stats
    pub fn end_scene(&mut self) -> RenderResult<()> {
        if self.state != SceneState::Active {
            return Err(RenderError::SceneNotActive("end_scene"));
        }
        let flush = self.batch.flush(&mut self.buffer);
        self.stats.batch_count = flush.batch_count;
        self.stats.texture_binds = flush.texture_binds;

        self.backend.execute(&self.buffer)?;
        self.state = SceneState::Inactive;
        log::debug!(
            "frame: {} quads, {} batches, {} texture binds",
            self.stats.quad_count,
            self.stats.batch_count,
            self.stats.texture_binds
        );
        Ok(())
    }

    /// Statistics for the most recent frame
    ///
    /// `quad_count` is live during an active scene; `batch_count` and
    /// `texture_binds` are captured at `end_scene`.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Whether a scene is currently active
    pub fn is_scene_active(&self) -> bool {
        self.state == SceneState::Active
    }

    /// The command stream produced by the last completed frame
    pub fn last_frame_commands(&self) -> &CommandBuffer {
        &self.buffer
    }
}
