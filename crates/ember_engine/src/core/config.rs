//! # Engine Configuration
//!
//! Configuration types for the ECS core and the 2D batching renderer.
//! Everything is serializable (TOML) with sensible defaults, so applications
//! can ship a config file or construct configs in code.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read from disk
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file contents were not valid TOML for the expected schema
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        /// Path that was attempted
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A field value is outside its valid range
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted field path, e.g. `render.max_quads_per_batch`
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: String,
    },
}

/// Configuration for the 2D batching renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Render2DConfig {
    /// Maximum number of quads accumulated into a single batch.
    /// Once a batch reaches this count a new batch is opened.
    pub max_quads_per_batch: usize,

    /// Whether to sort batches by (layer, mean depth) and commands by depth
    /// at flush time. Disabling preserves submission order.
    pub sort_batches: bool,

    /// Pre-allocated capacity hint for per-frame command storage
    pub initial_quad_capacity: usize,
}

impl Default for Render2DConfig {
    fn default() -> Self {
        Self {
            max_quads_per_batch: 1000,
            sort_batches: true,
            initial_quad_capacity: 256,
        }
    }
}

impl Render2DConfig {
    /// Validate field ranges
    ///
    /// A batch cap of zero would make every push fail to find a home, so it
    /// is rejected here rather than at push time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_quads_per_batch == 0 {
            return Err(ConfigError::InvalidValue {
                field: "render.max_quads_per_batch",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 2D renderer settings
    pub render: Render2DConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all nested sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate()
    }
}
