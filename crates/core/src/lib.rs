//! Shared primitives for the turtle simulation: identity, errors, and the
//! entropy and clock ports a host plugs in.

pub mod aggregate;
pub mod clock;
pub mod error;
pub mod id;
pub mod random;

pub use aggregate::AggregateRoot;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::DomainError;
pub use id::TurtleId;
pub use random::{EntropySource, RandEntropy, Weighted, uniform_choice, weighted_choice};
