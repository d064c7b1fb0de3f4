//! Input focus for the terminal.
//!
//! Stands in for the platform focus model: one field at most holds focus and
//! keeps its own draft text, so input that doesn't parse stays visible while
//! the ledger keeps its last valid value.
use engine::{Event, FieldId, State};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("\"{0}\" does not hold focus")]
    NotFocused(FieldId),
}

#[derive(Debug, Default)]
pub struct Focus {
    current: Option<FieldId>,
    draft: String,
}

impl Focus {
    pub fn on(field: FieldId, state: &State) -> Self {
        let mut focus = Self::default();
        focus.focus(field, state);
        focus
    }

    pub fn current(&self) -> Option<FieldId> {
        self.current
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn focus(&mut self, field: FieldId, state: &State) {
        self.current = Some(field);
        self.draft = field_text(field, state).unwrap_or_default();
    }

    pub fn next(&mut self, state: &State) {
        self.step(state, 1);
    }

    pub fn prev(&mut self, state: &State) {
        self.step(state, -1);
    }

    fn step(&mut self, state: &State, delta: isize) {
        let order = field_order(state);
        let len = order.len() as isize;
        let target = match self
            .current
            .and_then(|current| order.iter().position(|field| *field == current))
        {
            Some(index) => (index as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.focus(order[target as usize], state);
    }

    /// Drops focus if `target` holds it. Anything else is an error the
    /// caller decides how to absorb.
    pub fn blur(&mut self, target: FieldId) -> Result<(), FocusError> {
        if self.current != Some(target) {
            return Err(FocusError::NotFocused(target));
        }
        self.current = None;
        self.draft.clear();
        Ok(())
    }

    /// Keeps focus consistent after a transition. Focus on a deleted entry is
    /// dropped; `reload` refreshes the draft from the ledger.
    pub fn reconcile(&mut self, state: &State, reload: bool) {
        let Some(field) = self.current else {
            return;
        };
        match field_text(field, state) {
            None => {
                self.current = None;
                self.draft.clear();
            }
            Some(text) if reload => self.draft = text,
            Some(_) => {}
        }
    }

    /// Types a character into the focused field.
    pub fn push(&mut self, ch: char) -> Option<Event> {
        let field = self.current?;
        self.draft.push(ch);
        Some(edit_event(field, self.draft.clone()))
    }

    pub fn pop(&mut self) -> Option<Event> {
        let field = self.current?;
        self.draft.pop();
        Some(edit_event(field, self.draft.clone()))
    }
}

/// Tab order: the new-entry row, then every entry row top to bottom.
pub fn field_order(state: &State) -> Vec<FieldId> {
    let mut order = Vec::with_capacity(2 + state.entries.len() * 2);
    order.push(FieldId::NewDescription);
    order.push(FieldId::NewValue);
    for entry in &state.entries {
        order.push(FieldId::EntryDescription(entry.id));
        order.push(FieldId::EntryValue(entry.id));
    }
    order
}

/// The text an input shows when it is not being edited. `None` if the field
/// no longer exists.
pub fn field_text(field: FieldId, state: &State) -> Option<String> {
    match field {
        FieldId::NewDescription => Some(state.desc_field.clone()),
        FieldId::NewValue => Some(state.val_field.to_string()),
        FieldId::EntryDescription(id) => state.entry(id).map(|e| e.description.clone()),
        FieldId::EntryValue(id) => state.entry(id).map(|e| e.value.to_string()),
    }
}

fn edit_event(field: FieldId, text: String) -> Event {
    match field {
        FieldId::NewDescription => Event::UpdateDescField(text),
        FieldId::NewValue => Event::UpdateValField(text),
        FieldId::EntryDescription(id) => Event::UpdateEntryDesc(id, text),
        FieldId::EntryValue(id) => Event::UpdateEntryVal(id, text),
    }
}
