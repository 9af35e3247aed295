//! Building-block traits for the domain layer
//!
//! The original framework supplied these seams as reflective base classes.
//! Here they are plain traits: entities carry identity, value objects carry
//! structural equality, and both can stand in for "no value" via a typed
//! empty sentinel instead of null.

/// Entity marker: identity plus continuity across state changes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Aggregate root marker: the sole persistence boundary for what it owns.
pub trait AggregateRoot: Entity {}

/// Value object marker: immutable, compared by contained values.
pub trait ValueObject: Clone + PartialEq + std::fmt::Debug {}

/// Typed null: a distinguished sentinel standing in for "no value".
///
/// Sentinel field values sit outside the validated ranges, so emptiness is
/// decidable structurally and a validated instance never reports empty.
pub trait EmptyObject {
    /// Whether this instance is the empty sentinel.
    fn is_empty(&self) -> bool;
}
