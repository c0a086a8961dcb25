//! Tracing/logging setup shared by every process embedding the item core.

pub mod config;
pub mod subscriber;

pub use config::{LogConfig, LogFormat};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(&LogConfig::from_env());
}
