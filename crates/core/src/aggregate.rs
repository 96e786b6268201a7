//! Aggregate root trait for the domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate is the only entry point to the objects it owns: callers hold
/// the root and go through its methods to change anything inside it.
/// Aggregates here are plain in-memory values with no versioning.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
