//! Core engine configuration

pub mod config;

pub use config::{ConfigError, EngineConfig, Render2DConfig};
