//! Foundation utilities shared by every subsystem
//!
//! Math aliases and logging setup. Nothing in here knows about entities,
//! components, or rendering.

pub mod logging;
pub mod math;
