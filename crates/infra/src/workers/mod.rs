//! Background workers driven by wall-clock time.

pub mod needs_updater;
pub mod periodic;
pub mod status_refresher;

pub use needs_updater::NeedsUpdater;
pub use periodic::{PeriodicWorker, WorkerHandle};
pub use status_refresher::StatusRefresher;

use std::sync::{Mutex, PoisonError};

use turtcode_core::{Clock, EntropySource};

use crate::config::ManagerConfig;
use crate::manager::TurtleManager;
use crate::store::KeyValueStore;

/// Read a setting from a shared manager. Config is never mutated, so a
/// poisoned lock still holds a valid value.
pub(crate) fn configured<S, C, E, T>(
    manager: &Mutex<TurtleManager<S, C, E>>,
    pick: impl FnOnce(&ManagerConfig) -> T,
) -> T
where
    S: KeyValueStore,
    C: Clock,
    E: EntropySource,
{
    let guard = manager.lock().unwrap_or_else(PoisonError::into_inner);
    pick(guard.config())
}
