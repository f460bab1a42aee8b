//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. A product name is a value object; a product is an entity
/// identified by that name.
///
/// The comparison does not have to be field-by-field. A value object may
/// define equality over a normalized form of its data:
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Sku(String);
///
/// impl PartialEq for Sku {
///     fn eq(&self, other: &Self) -> bool {
///         self.0.eq_ignore_ascii_case(&other.0)
///     }
/// }
///
/// impl ValueObject for Sku {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
