//! Aggregate root trait for the simulation's domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate owns its child values outright (no sharing) and is the only
/// thing a host persists or replaces wholesale.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
