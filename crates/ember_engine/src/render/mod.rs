//! # 2D Rendering Pipeline
//!
//! A layered pipeline from high-level draw calls down to a backend-agnostic
//! command stream:
//!
//! - [`Renderer2D`]: the per-frame facade (`begin_scene` / `draw_rect` /
//!   `end_scene`).
//! - [`batch::QuadBatch`]: groups [`QuadCommand`]s into material-compatible
//!   batches and sorts them by layer and depth.
//! - [`CommandBuffer`]: the flat command stream handed to a
//!   [`RenderBackend`] for execution against real hardware (or nothing, via
//!   [`NullBackend`]).
//!
//! The pipeline never touches a graphics API; device code lives behind the
//! backend trait and is out of scope here.

pub mod batch;
pub mod camera;
pub mod commands;
pub mod material;
pub mod quad;
pub mod renderer2d;

pub use batch::{FlushStats, QuadBatch};
pub use camera::Camera2D;
pub use commands::{
    expand_quad, CommandBuffer, DrawCommand, NullBackend, QuadVertex, RenderBackend,
};
pub use material::{Material2D, ShaderId, SHADER_SOLID, SHADER_TEXTURED};
pub use quad::{Color, QuadCommand, TextureId, UvRect};
pub use renderer2d::{QuadParams, Rect, RenderStats, Renderer2D};

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised by the 2D rendering pipeline
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// `begin_scene` called while a scene is already active
    #[error("begin_scene called while a scene is already active")]
    SceneAlreadyActive,

    /// A draw or flush call arrived outside begin_scene/end_scene
    #[error("'{0}' called with no active scene")]
    SceneNotActive(&'static str),

    /// Batch capacity must be at least one quad
    #[error("invalid batch capacity: {0} (must be at least 1)")]
    InvalidBatchCapacity(usize),

    /// The backend rejected the command buffer
    #[error("render backend failure: {0}")]
    BackendFailure(String),
}
