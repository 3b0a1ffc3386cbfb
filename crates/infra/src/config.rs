//! Manager configuration.

use std::time::Duration;

use tracing::warn;

pub const DEFAULT_SAVE_KEY: &str = "turtcode.turtleData";
pub const DEFAULT_HATS_KEY: &str = "turtcode.unlockedHats";
pub const DEFAULT_NEEDS_INTERVAL: Duration = Duration::from_secs(10 * 60);
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Store key holding the serialized turtle.
    pub save_key: String,
    /// Store key holding the unlocked hat ids.
    pub hats_key: String,
    /// How often the host should call `tick`.
    pub needs_interval: Duration,
    /// How often the host should redraw status.
    pub refresh_interval: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            save_key: DEFAULT_SAVE_KEY.to_string(),
            hats_key: DEFAULT_HATS_KEY.to_string(),
            needs_interval: DEFAULT_NEEDS_INTERVAL,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl ManagerConfig {
    /// Defaults overridden by `TURTCODE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`ManagerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            save_key: lookup("TURTCODE_SAVE_KEY").unwrap_or(defaults.save_key),
            hats_key: lookup("TURTCODE_HATS_KEY").unwrap_or(defaults.hats_key),
            needs_interval: seconds(
                &lookup,
                "TURTCODE_NEEDS_INTERVAL_SECS",
                defaults.needs_interval,
            ),
            refresh_interval: seconds(
                &lookup,
                "TURTCODE_REFRESH_INTERVAL_SECS",
                defaults.refresh_interval,
            ),
        }
    }
}

fn seconds(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: Duration) -> Duration {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            warn!(variable = name, value = %raw, "invalid interval; using default");
            default
        }
    }
}
