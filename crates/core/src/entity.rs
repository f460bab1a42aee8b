//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores use the identity to enforce uniqueness; two entities with equal ids
/// are the same entity even when their other attributes differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
