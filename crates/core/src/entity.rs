//! Entity trait: identity that survives every mutation of the entity's state.

/// An object with identity.
///
/// Identifiers are handed out by the storage collaborator. Until that happens
/// an entity carries `Id::default()`, which is never a real identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Default + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether storage has assigned an identifier yet.
    fn is_persisted(&self) -> bool {
        *self.id() != Self::Id::default()
    }
}
