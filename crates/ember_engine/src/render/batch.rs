//! # Quad Batching
//!
//! Accumulates [`QuadCommand`]s into batches keyed by (layer, material) and
//! flushes them as a sorted command stream.
//!
//! ## Strategy
//!
//! `push` is first-fit over the batches opened so far this frame: the first
//! open batch with a matching layer and material and spare capacity wins.
//! Full batches are never reopened and batches are never merged
//! retroactively, so a late command compatible with an earlier, now-full
//! batch starts a new one. That trades optimal batch counts for O(batches)
//! push cost and stable, predictable draw-call numbers.
//!
//! ## Ordering
//!
//! With sorting enabled, flush emits batches by (layer ascending, mean depth
//! ascending) and commands within a batch by depth ascending; the sorts are
//! stable so equal keys keep submission order and frames do not flicker.

use super::commands::{CommandBuffer, DrawCommand};
use super::material::Material2D;
use super::quad::{QuadCommand, TextureId};
use super::{RenderError, RenderResult};
use crate::core::config::Render2DConfig;

/// Statistics from one flush
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Number of batches emitted
    pub batch_count: usize,

    /// Number of quads emitted across all batches
    pub quad_count: usize,

    /// Number of texture bind switches emitted
    pub texture_binds: usize,
}

/// An ordered group of quads sharing one material and one layer
#[derive(Debug)]
struct Batch {
    material: Material2D,
    layer: i32,
    commands: Vec<QuadCommand>,
}

impl Batch {
    fn new(material: Material2D, layer: i32, command: QuadCommand) -> Self {
        Self {
            material,
            layer,
            commands: vec![command],
        }
    }

    /// Whether a command with this key may join, given the per-batch cap
    fn accepts(&self, material: &Material2D, layer: i32, cap: usize) -> bool {
        self.layer == layer && self.material == *material && self.commands.len() < cap
    }

    /// Average depth of the batch's commands, the secondary sort key
    fn mean_depth(&self) -> f32 {
        if self.commands.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.commands.iter().map(|c| c.depth).sum();
        sum / self.commands.len() as f32
    }
}

/// Per-frame quad batcher
///
/// State machine per frame: Empty, accumulating via [`push`](Self::push),
/// then [`flush`](Self::flush) emits everything and resets to Empty.
pub struct QuadBatch {
    /// Open batches for the current frame, in creation order
    batches: Vec<Batch>,

    /// Maximum quads per batch
    max_quads_per_batch: usize,

    /// Whether flush sorts by layer/depth
    sort_enabled: bool,
}

impl QuadBatch {
    /// Create a batcher from renderer configuration
    ///
    /// A batch capacity of zero is a configuration error.
    pub fn new(config: &Render2DConfig) -> RenderResult<Self> {
        if config.max_quads_per_batch == 0 {
            return Err(RenderError::InvalidBatchCapacity(config.max_quads_per_batch));
        }
        Ok(Self {
            batches: Vec::new(),
            max_quads_per_batch: config.max_quads_per_batch,
            sort_enabled: config.sort_batches,
        })
    }

    /// Add a command to the first compatible open batch, or open a new one
    pub fn push(&mut self, command: QuadCommand) {
        let material = Material2D::from_command(&command);
        let cap = self.max_quads_per_batch;

        if let Some(batch) = self
            .batches
            .iter_mut()
            .find(|batch| batch.accepts(&material, command.layer, cap))
        {
            batch.commands.push(command);
        } else {
            self.batches.push(Batch::new(material, command.layer, command));
        }
    }

    /// Number of open batches this frame
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of accumulated quads this frame
    pub fn quad_count(&self) -> usize {
        self.batches.iter().map(|b| b.commands.len()).sum()
    }

    /// True if nothing has been pushed since the last flush
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Sort, emit every batch into the buffer, and reset for the next frame
    ///
    /// Flushing with nothing accumulated is a no-op.
    pub fn flush(&mut self, buffer: &mut CommandBuffer) -> FlushStats {
        if self.batches.is_empty() {
            return FlushStats::default();
        }

        if self.sort_enabled {
            self.batches.sort_by(|a, b| {
                a.layer.cmp(&b.layer).then(
                    a.mean_depth()
                        .partial_cmp(&b.mean_depth())
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
            });
            for batch in &mut self.batches {
                batch.commands.sort_by(|a, b| {
                    a.depth
                        .partial_cmp(&b.depth)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }

        let mut stats = FlushStats {
            batch_count: self.batches.len(),
            ..Default::default()
        };
        let mut bound_texture: Option<TextureId> = None;

        for batch in &self.batches {
            if let Some(texture) = batch.material.texture {
                if bound_texture != Some(texture) {
                    buffer.push(DrawCommand::BindTexture(texture));
                    bound_texture = Some(texture);
                    stats.texture_binds += 1;
                }
            }
            for command in &batch.commands {
                match command.texture {
                    Some(_) => buffer.push(DrawCommand::DrawTexturedQuad {
                        transform: command.transform,
                        color: command.color,
                        uv: command.uv,
                    }),
                    None => buffer.push(DrawCommand::DrawQuad {
                        transform: command.transform,
                        color: command.color,
                    }),
                }
                stats.quad_count += 1;
            }
        }

        log::trace!(
            "flushed {} quads in {} batches ({} texture binds)",
            stats.quad_count,
            stats.batch_count,
            stats.texture_binds
        );
        self.batches.clear();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4;
    use crate::render::quad::{Color, UvRect};

    fn config(cap: usize) -> Render2DConfig {
        Render2DConfig {
            max_quads_per_batch: cap,
            ..Default::default()
        }
    }

    fn solid(layer: i32, depth: f32) -> QuadCommand {
        QuadCommand::solid(Mat4::identity(), Color::WHITE, layer, depth)
    }

    fn textured(texture: u32, layer: i32, depth: f32) -> QuadCommand {
        QuadCommand::textured(
            Mat4::identity(),
            Color::WHITE,
            TextureId(texture),
            UvRect::FULL,
            layer,
            depth,
        )
    }

    #[test]
    fn test_zero_capacity_rejected_at_construction() {
        let result = QuadBatch::new(&config(0));
        assert!(matches!(result, Err(RenderError::InvalidBatchCapacity(0))));
    }

    #[test]
    fn test_compatible_commands_share_a_batch() {
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        for i in 0..10 {
            batch.push(solid(0, i as f32));
        }
        assert_eq!(batch.batch_count(), 1);
        assert_eq!(batch.quad_count(), 10);
    }

    #[test]
    fn test_layer_splits_batches() {
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        batch.push(solid(0, 0.0));
        batch.push(solid(1, 0.0));
        assert_eq!(batch.batch_count(), 2);
    }

    #[test]
    fn test_texture_splits_batches() {
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        batch.push(textured(1, 0, 0.0));
        batch.push(textured(2, 0, 0.0));
        batch.push(solid(0, 0.0));
        assert_eq!(batch.batch_count(), 3);
    }

    #[test]
    fn test_tint_does_not_split_batches() {
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        batch.push(QuadCommand::solid(Mat4::identity(), Color::rgb(1.0, 0.0, 0.0), 0, 0.0));
        batch.push(QuadCommand::solid(Mat4::identity(), Color::rgb(0.0, 1.0, 0.0), 0, 0.0));
        assert_eq!(batch.batch_count(), 1);
    }

    #[test]
    fn test_capacity_overflow_opens_new_batch() {
        // 1500 identical quads with a cap of 1000 make exactly two batches.
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        for _ in 0..1500 {
            batch.push(solid(0, 0.0));
        }
        assert_eq!(batch.batch_count(), 2);
        assert_eq!(batch.quad_count(), 1500);

        let mut buffer = CommandBuffer::new();
        let stats = batch.flush(&mut buffer);
        assert_eq!(stats.batch_count, 2);
        assert_eq!(stats.quad_count, 1500);
        assert_eq!(buffer.len(), 1500);
    }

    #[test]
    fn test_first_fit_never_reopens_full_batch() {
        let mut batch = QuadBatch::new(&config(2)).unwrap();
        batch.push(solid(0, 0.0));
        batch.push(solid(0, 0.0)); // fills batch 0
        batch.push(textured(1, 0, 0.0)); // batch 1
        batch.push(solid(0, 0.0)); // batch 0 full: opens batch 2
        assert_eq!(batch.batch_count(), 3);

        // A later compatible command joins the open partial batch, not the
        // full one.
        batch.push(solid(0, 0.0));
        assert_eq!(batch.batch_count(), 3);
    }

    #[test]
    fn test_flush_orders_by_layer_then_depth() {
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        batch.push(textured(1, 5, 0.0));
        batch.push(solid(0, 2.0));
        batch.push(solid(0, 1.0));
        batch.push(textured(2, -1, 0.0));

        let mut buffer = CommandBuffer::new();
        batch.flush(&mut buffer);

        // Expected: layer -1 texture bind + draw, layer 0 two solids sorted
        // by depth, layer 5 texture bind + draw.
        let commands = buffer.commands();
        assert!(matches!(commands[0], DrawCommand::BindTexture(TextureId(2))));
        assert!(matches!(commands[1], DrawCommand::DrawTexturedQuad { .. }));
        assert!(matches!(commands[2], DrawCommand::DrawQuad { .. }));
        assert!(matches!(commands[3], DrawCommand::DrawQuad { .. }));
        assert!(matches!(commands[4], DrawCommand::BindTexture(TextureId(1))));
        assert!(matches!(commands[5], DrawCommand::DrawTexturedQuad { .. }));
    }

    #[test]
    fn test_commands_within_batch_sorted_by_depth() {
        // Encode each command's depth in its transform so the emitted order
        // is observable.
        let at_depth = |depth: f32| {
            let transform = Mat4::new_translation(&nalgebra::Vector3::new(depth, 0.0, 0.0));
            QuadCommand::solid(transform, Color::WHITE, 0, depth)
        };
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        let mut buffer = CommandBuffer::new();
        batch.push(at_depth(3.0));
        batch.push(at_depth(1.0));
        batch.push(at_depth(2.0));
        batch.flush(&mut buffer);

        let emitted: Vec<f32> = buffer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawQuad { transform, .. } => Some(transform[(0, 3)]),
                _ => None,
            })
            .collect();
        assert_eq!(emitted, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unsorted_flush_preserves_submission_order() {
        let config = Render2DConfig {
            sort_batches: false,
            ..Default::default()
        };
        let mut batch = QuadBatch::new(&config).unwrap();
        batch.push(solid(5, 0.0));
        batch.push(solid(0, 0.0));

        let mut buffer = CommandBuffer::new();
        batch.flush(&mut buffer);
        // Layer 5 was pushed first and stays first without sorting.
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_flush_empty_is_a_noop() {
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        let mut buffer = CommandBuffer::new();
        let stats = batch.flush(&mut buffer);
        assert_eq!(stats, FlushStats::default());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_flush_resets_state() {
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        batch.push(solid(0, 0.0));
        let mut buffer = CommandBuffer::new();
        batch.flush(&mut buffer);
        assert!(batch.is_empty());
        assert_eq!(batch.quad_count(), 0);
    }

    #[test]
    fn test_shared_texture_across_batches_binds_once() {
        // Same texture on two layers: two batches, one bind, because the
        // batches are adjacent after sorting.
        let mut batch = QuadBatch::new(&config(1000)).unwrap();
        batch.push(textured(1, 0, 0.0));
        batch.push(textured(1, 1, 0.0));

        let mut buffer = CommandBuffer::new();
        let stats = batch.flush(&mut buffer);
        assert_eq!(stats.batch_count, 2);
        assert_eq!(stats.texture_binds, 1);
    }
}
