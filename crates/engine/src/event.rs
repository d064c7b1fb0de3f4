//! Inputs and outputs of the transition function.
use crate::{entry::EntryId, field::FieldId};

/// A discrete intent, from the user or fed back by the effect runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    NoOp,
    UpdateDescField(String),
    UpdateValField(String),
    Add,
    UpdateEntryDesc(EntryId, String),
    UpdateEntryVal(EntryId, String),
    Delete(EntryId),
    Blur(FieldId),
}

/// A side action requested by a transition. Executed outside the engine and
/// never awaited by it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Move input focus away from the field. A failure comes back as
    /// [`Event::NoOp`].
    Blur(FieldId),
}
