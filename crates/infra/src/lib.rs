//! Infrastructure layer: the turtle manager, its store port, config and background workers.

pub mod config;
pub mod manager;
pub mod store;
pub mod workers;

pub use config::ManagerConfig;
pub use manager::TurtleManager;
pub use store::{InMemoryStore, KeyValueStore, StoreError};
pub use workers::{NeedsUpdater, PeriodicWorker, StatusRefresher, WorkerHandle};
