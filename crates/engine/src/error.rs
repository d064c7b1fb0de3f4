//! The module contains the errors the engine can return.
//!
//! Transitions never fail. Errors only come from decoding a persisted
//! snapshot:
//!
//! - [`Snapshot`] thrown when the text is not a valid encoded [`State`].
//! - [`InvalidSnapshot`] thrown when the decoded state breaks an invariant.
//!
//!  [`Snapshot`]: EngineError::Snapshot
//!  [`InvalidSnapshot`]: EngineError::InvalidSnapshot
//!  [`State`]: crate::State
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Snapshot(a), Self::Snapshot(b)) => a.to_string() == b.to_string(),
            (Self::InvalidSnapshot(a), Self::InvalidSnapshot(b)) => a == b,
            _ => false,
        }
    }
}
