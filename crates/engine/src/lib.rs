//! Core of the ledger editor: the entry store and its transition function.
//!
//! The engine has no I/O. A host feeds [`Event`]s into [`update`], keeps the
//! returned [`State`], persists it and runs the returned [`Effect`].
pub use entry::{Entry, EntryId, make_entry};
pub use error::EngineError;
pub use event::{Effect, Event};
pub use field::FieldId;
pub use state::{State, empty_state};
pub use update::{parse_amount, update};

mod entry;
mod error;
mod event;
mod field;
mod snapshot;
mod state;
mod update;
