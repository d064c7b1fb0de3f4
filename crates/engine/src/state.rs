//! The module contains the application [`State`], the whole serializable
//! snapshot of the ledger editor.
//!
//! `State` is plain data. Every change goes through [`update`](crate::update).
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntryId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Ledger lines in insertion order.
    pub entries: Vec<Entry>,
    /// Pending text of the "new entry description" input.
    pub desc_field: String,
    /// Pending amount of the "new entry value" input.
    pub val_field: i64,
    /// Last id handed out. The next entry gets `uid + 1`.
    pub uid: EntryId,
}

impl State {
    /// No entries, empty inputs, counter at zero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub(crate) fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every entry value, recomputed on each call.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, entry| acc.saturating_add(entry.value))
    }
}

pub fn empty_state() -> State {
    State::empty()
}
