//! Asset interfaces
//!
//! Loading and decoding live outside the engine core; the renderer only
//! ever sees opaque texture handles. [`ResourceProvider`] is the seam a
//! real asset manager plugs into, and [`MemoryResources`] is the in-memory
//! implementation used by tests and headless demos.

use crate::render::TextureId;
use std::collections::HashMap;

/// Errors from the resource layer
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The requested resource could not be loaded
    #[error("failed to load resource '{0}'")]
    LoadFailed(String),
}

/// Seam to an external resource manager
///
/// A missing resource is absence, not an error: `texture` returns `None`
/// and callers render nothing (or a placeholder) for that handle.
pub trait ResourceProvider {
    /// Load the resource at `path`, making its handle available
    fn load(&mut self, path: &str) -> Result<(), AssetError>;

    /// Whether the resource at `path` has been loaded
    fn is_loaded(&self, path: &str) -> bool;

    /// The texture handle for a loaded resource
    fn texture(&self, path: &str) -> Option<TextureId>;
}

/// In-memory resource table issuing sequential texture handles
#[derive(Debug, Default)]
pub struct MemoryResources {
    textures: HashMap<String, TextureId>,
    next_id: u32,
}

impl MemoryResources {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loaded resources
    pub fn loaded_count(&self) -> usize {
        self.textures.len()
    }
}

impl ResourceProvider for MemoryResources {
    fn load(&mut self, path: &str) -> Result<(), AssetError> {
        if !self.textures.contains_key(path) {
            let id = TextureId(self.next_id);
            self.next_id += 1;
            self.textures.insert(path.to_string(), id);
            log::debug!("loaded resource '{path}' as texture {id:?}");
        }
        Ok(())
    }

    fn is_loaded(&self, path: &str) -> bool {
        self.textures.contains_key(path)
    }

    fn texture(&self, path: &str) -> Option<TextureId> {
        self.textures.get(path).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_issues_stable_handles() {
        let mut resources = MemoryResources::new();
        resources.load("sprites/player.png").unwrap();
        let first = resources.texture("sprites/player.png").unwrap();

        // Reloading does not reassign the handle.
        resources.load("sprites/player.png").unwrap();
        assert_eq!(resources.texture("sprites/player.png").unwrap(), first);
        assert_eq!(resources.loaded_count(), 1);
    }

    #[test]
    fn test_missing_resource_is_absence() {
        let resources = MemoryResources::new();
        assert!(!resources.is_loaded("nope.png"));
        assert!(resources.texture("nope.png").is_none());
    }
}
