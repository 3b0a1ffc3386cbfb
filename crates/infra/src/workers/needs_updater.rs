use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use turtcode_core::{Clock, EntropySource};

use super::configured;
use super::periodic::{PeriodicWorker, WorkerHandle};
use crate::manager::TurtleManager;
use crate::store::KeyValueStore;

/// Ticks a shared manager once per needs interval.
#[derive(Debug)]
pub struct NeedsUpdater;

impl NeedsUpdater {
    /// Tick every `needs_interval` from the manager's own config.
    pub fn spawn_from_config<S, C, E>(
        manager: Arc<Mutex<TurtleManager<S, C, E>>>,
    ) -> io::Result<WorkerHandle>
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
        E: EntropySource + Send + 'static,
    {
        let period = configured(&manager, |config| config.needs_interval);
        Self::spawn(period, manager)
    }

    /// Tick every `period`.
    ///
    /// Stopping the worker (`shutdown` or dropping the handle) waits for an
    /// in-flight tick, and a tick waits for the manager lock. Never stop the
    /// worker while holding that lock on the same thread: the join would
    /// never return.
    pub fn spawn<S, C, E>(
        period: Duration,
        manager: Arc<Mutex<TurtleManager<S, C, E>>>,
    ) -> io::Result<WorkerHandle>
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
        E: EntropySource + Send + 'static,
    {
        PeriodicWorker::spawn("turtcode-needs", period, move || -> Result<(), &'static str> {
            let mut manager = manager
                .lock()
                .map_err(|_| "turtle manager lock poisoned")?;
            manager.tick();
            Ok(())
        })
    }
}
