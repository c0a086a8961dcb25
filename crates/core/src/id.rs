//! Storage-assigned identifiers.

use serde::{Deserialize, Serialize};

/// Integer identifier assigned by the storage collaborator.
///
/// Zero means "not persisted yet"; storage only ever hands out positive values.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StorageId(i64);

impl StorageId {
    /// Placeholder carried by entities that were never stored.
    pub const UNASSIGNED: Self = Self(0);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw `i64` value.
    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl core::fmt::Display for StorageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for StorageId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<StorageId> for i64 {
    fn from(value: StorageId) -> Self {
        value.0
    }
}
