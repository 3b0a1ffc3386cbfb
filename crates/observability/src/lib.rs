//! Process-wide logging setup shared by hosts of the turtle simulation.

/// Initialize JSON logging at `info` unless `RUST_LOG` says otherwise.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, init_with};
