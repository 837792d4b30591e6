//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the `RUST_LOG` environment variable for filtering. Safe to call
/// once per process; typically the first thing an application does.
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring a second initialization
///
/// Useful in tests where multiple entry points may race to set the logger.
pub fn try_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
