//! Encoding of [`State`] for the storage collaborator.
//!
//! A snapshot round-trips value-identical. Decoding also checks the store
//! invariants, so a hand-edited file can't smuggle duplicate ids in.
use std::collections::HashSet;

use crate::{State, error::EngineError};

type ResultSnapshot<T> = Result<T, EngineError>;

impl State {
    pub fn to_json(&self) -> ResultSnapshot<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> ResultSnapshot<Self> {
        let state: Self = serde_json::from_str(text)?;
        state.validate()?;
        Ok(state)
    }

    fn validate(&self) -> ResultSnapshot<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.id) {
                return Err(EngineError::InvalidSnapshot(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
            if entry.id > self.uid {
                return Err(EngineError::InvalidSnapshot(format!(
                    "entry id {} above uid {}",
                    entry.id, self.uid
                )));
            }
        }
        Ok(())
    }
}
