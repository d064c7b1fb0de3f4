//! The module contains the `Entry` type, one line of the ledger.
use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an [`Entry`]. Never reused within a run.
pub type EntryId = u64;

/// Represent a ledger line: a description and a signed amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub description: String,
    pub value: i64,
    pub id: EntryId,
}

impl Entry {
    pub fn new(description: impl Into<String>, value: i64, id: EntryId) -> Self {
        Self {
            description: description.into(),
            value,
            id,
        }
    }
}

/// Plain record constructor. Admission rules live in [`update`](crate::update).
pub fn make_entry(description: impl Into<String>, value: i64, id: EntryId) -> Entry {
    Entry::new(description, value, id)
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.id, self.description, self.value)
    }
}
