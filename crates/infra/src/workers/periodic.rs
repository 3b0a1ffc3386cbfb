use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

/// Handle to control and join a background worker.
///
/// Dropping the handle stops the worker.
#[derive(Debug)]
pub struct WorkerHandle {
    name: &'static str,
    shutdown: Option<mpsc::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.join.as_ref().is_some_and(|j| !j.is_finished())
    }

    /// Request shutdown and wait for the worker to stop. Safe to call twice.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(j) = self.join.take() {
            if j.join().is_err() {
                warn!(worker = self.name, "worker thread panicked");
            }
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Runs a handler once per period on its own thread.
///
/// The first run happens one full period after spawning. Handler errors are
/// logged and the loop keeps going.
#[derive(Debug)]
pub struct PeriodicWorker;

impl PeriodicWorker {
    pub fn spawn<H, E>(name: &'static str, period: Duration, mut handler: H) -> io::Result<WorkerHandle>
    where
        H: FnMut() -> Result<(), E> + Send + 'static,
        E: core::fmt::Debug + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let join = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || worker_loop(name, period, shutdown_rx, &mut handler))?;

        debug!(worker = name, period_ms = period.as_millis() as u64, "worker started");

        Ok(WorkerHandle {
            name,
            shutdown: Some(shutdown_tx),
            join: Some(join),
        })
    }
}

fn worker_loop<H, E>(
    name: &'static str,
    period: Duration,
    shutdown_rx: mpsc::Receiver<()>,
    handler: &mut H,
) where
    H: FnMut() -> Result<(), E>,
    E: core::fmt::Debug,
{
    loop {
        match shutdown_rx.recv_timeout(period) {
            Err(RecvTimeoutError::Timeout) => {
                if let Err(err) = handler() {
                    warn!(worker = name, error = ?err, "periodic worker handler failed");
                }
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!(worker = name, "worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn wait_for(counter: &AtomicUsize, at_least: usize) {
        for _ in 0..200 {
            if counter.load(Ordering::SeqCst) >= at_least {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("worker never reached {at_least} runs");
    }

    #[test]
    fn runs_until_shutdown() {
        let runs = Arc::new(AtomicUsize::new(0));
        let seen = runs.clone();
        let mut handle = PeriodicWorker::spawn("test-periodic", Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok::<(), ()>(())
        })
        .unwrap();

        wait_for(&runs, 3);
        handle.shutdown();
        assert!(!handle.is_running());

        let after = runs.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(runs.load(Ordering::SeqCst), after);

        // Second shutdown is a no-op.
        handle.shutdown();
    }

    #[test]
    fn handler_errors_do_not_stop_the_loop() {
        let runs = Arc::new(AtomicUsize::new(0));
        let seen = runs.clone();
        let _handle = PeriodicWorker::spawn("test-failing", Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>("boom")
        })
        .unwrap();

        wait_for(&runs, 3);
    }

    #[test]
    fn long_period_does_not_fire_before_shutdown() {
        let runs = Arc::new(AtomicUsize::new(0));
        let seen = runs.clone();
        let handle = PeriodicWorker::spawn("test-idle", Duration::from_secs(3600), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok::<(), ()>(())
        })
        .unwrap();
        assert_eq!(handle.name(), "test-idle");

        drop(handle);
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
