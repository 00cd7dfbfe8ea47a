//! The identifier-value pair returned by a full listing.

use serde::{Deserialize, Serialize};

/// One stored record as produced by a full listing.
///
/// Entries are produced fresh per listing call; the DAO never caches or
/// owns them between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<Id, Value> {
    /// The identifier of the entry.
    pub id: Id,
    /// The value of the entry.
    pub value: Value,
}

impl<Id, Value> Entry<Id, Value> {
    /// Creates an entry from an identifier and its value.
    #[must_use]
    pub fn new(id: Id, value: Value) -> Self {
        Self { id, value }
    }

    /// Splits the entry back into its identifier and value.
    #[must_use]
    pub fn into_pair(self) -> (Id, Value) {
        (self.id, self.value)
    }
}

impl<Id, Value> From<(Id, Value)> for Entry<Id, Value> {
    fn from((id, value): (Id, Value)) -> Self {
        Self::new(id, value)
    }
}
