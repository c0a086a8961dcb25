//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two of them with the same attributes
/// are interchangeable. An entity holds value objects and replaces them
/// wholesale instead of editing them in place.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Category { Watches, Bags }
///
/// impl ValueObject for Category {}
///
/// assert_eq!(Category::Watches, Category::Watches);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
