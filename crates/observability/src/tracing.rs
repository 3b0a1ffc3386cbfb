//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "info";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for hosts that ship logs elsewhere.
    #[default]
    Json,
    /// Single-line human output, for terminals.
    Compact,
}

pub fn init() {
    init_with(LogFormat::default(), DEFAULT_DIRECTIVES);
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_with(format: LogFormat, default_directives: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    }
}
