//! Tracing/logging (shared setup).

/// Initialize process-wide logging with the default configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::LogConfig::default());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Browser console writer.
#[cfg(target_arch = "wasm32")]
pub mod console;

pub use self::tracing::{LogConfig, LogFormat};
