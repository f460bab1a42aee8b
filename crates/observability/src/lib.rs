//! Tracing and logging (shared setup).

/// Initialize process-wide observability with settings taken from the
/// environment (`RUST_LOG`, `CATALOG_LOG_FORMAT`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&tracing::TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig};
