use std::io;
use std::sync::{Arc, Mutex};

use turtcode_core::{Clock, EntropySource};

use super::configured;
use super::periodic::{PeriodicWorker, WorkerHandle};
use crate::manager::TurtleManager;
use crate::store::KeyValueStore;

/// Hands the host a fresh one-line status every `refresh_interval`.
///
/// `render` runs after the manager lock is released, so it may take its time
/// (or lock the manager itself).
#[derive(Debug)]
pub struct StatusRefresher;

impl StatusRefresher {
    pub fn spawn<S, C, E, F>(
        manager: Arc<Mutex<TurtleManager<S, C, E>>>,
        mut render: F,
    ) -> io::Result<WorkerHandle>
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
        E: EntropySource + Send + 'static,
        F: FnMut(String) + Send + 'static,
    {
        let period = configured(&manager, |config| config.refresh_interval);

        PeriodicWorker::spawn("turtcode-status", period, move || -> Result<(), &'static str> {
            let summary = manager
                .lock()
                .map_err(|_| "turtle manager lock poisoned")?
                .turtle()
                .summary();
            render(summary);
            Ok(())
        })
    }
}
