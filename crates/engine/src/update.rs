//! The transition function.
//!
//! `update` maps the current [`State`] and one [`Event`] to the next state
//! plus an optional [`Effect`]. It is total: malformed input is absorbed by a
//! per-field no-op and reported only through `tracing` at debug level.
use tracing::debug;

use crate::{
    entry::{EntryId, make_entry},
    event::{Effect, Event},
    state::State,
};

/// Integer policy shared by every numeric input: optional sign then digits.
/// No trimming, no truncation, out-of-range is a failure.
pub fn parse_amount(text: &str) -> Option<i64> {
    text.parse().ok()
}

pub fn update(mut state: State, event: Event) -> (State, Option<Effect>) {
    match event {
        Event::NoOp => {}
        Event::UpdateDescField(text) => state.desc_field = text,
        Event::UpdateValField(text) => match parse_amount(&text) {
            Some(value) => state.val_field = value,
            None => debug!(input = %text, "value field left unchanged, not an integer"),
        },
        Event::Add => add(&mut state),
        Event::UpdateEntryDesc(id, text) => match state.entry_mut(id) {
            Some(entry) => entry.description = text,
            None => debug!(id, "description edit for unknown entry ignored"),
        },
        Event::UpdateEntryVal(id, text) => update_entry_value(&mut state, id, &text),
        Event::Delete(id) => {
            let before = state.entries.len();
            state.entries.retain(|entry| entry.id != id);
            if state.entries.len() == before {
                debug!(id, "delete of unknown entry ignored");
            }
        }
        Event::Blur(field) => return (state, Some(Effect::Blur(field))),
    }

    (state, None)
}

// The counter moves even when nothing is appended. A full counter turns Add
// into a no-op so ids are never reused.
fn add(state: &mut State) {
    let Some(uid) = state.uid.checked_add(1) else {
        debug!(uid = state.uid, "id counter exhausted, add ignored");
        return;
    };
    state.uid = uid;
    let description = std::mem::take(&mut state.desc_field);
    let value = std::mem::replace(&mut state.val_field, 0);

    if description.is_empty() {
        debug!(uid = state.uid, "add with empty description appends nothing");
        return;
    }
    state.entries.push(make_entry(description, value, state.uid));
}

fn update_entry_value(state: &mut State, id: EntryId, text: &str) {
    let Some(entry) = state.entry_mut(id) else {
        debug!(id, "value edit for unknown entry ignored");
        return;
    };

    if text.is_empty() {
        entry.value = 0;
        return;
    }
    match parse_amount(text) {
        Some(value) => entry.value = value,
        None => debug!(id, input = %text, "entry value left unchanged, not an integer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldId, make_entry};

    fn ledger() -> State {
        State {
            entries: vec![
                make_entry("Coffee", 5, 1),
                make_entry("Rent", -700, 2),
                make_entry("Salary", 1500, 4),
            ],
            desc_field: String::new(),
            val_field: 0,
            uid: 4,
        }
    }

    fn apply(state: State, event: Event) -> State {
        update(state, event).0
    }

    #[test]
    fn parse_amount_policy() {
        assert_eq!(parse_amount("42"), Some(42));
        assert_eq!(parse_amount("-42"), Some(-42));
        assert_eq!(parse_amount("+7"), Some(7));
        assert_eq!(parse_amount("0"), Some(0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount(" 4"), None);
        assert_eq!(parse_amount("4.5"), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("99999999999999999999"), None);
    }

    #[test]
    fn noop_changes_nothing() {
        assert_eq!(update(ledger(), Event::NoOp), (ledger(), None));
    }

    #[test]
    fn desc_field_takes_any_text() {
        let state = apply(ledger(), Event::UpdateDescField("Tea".to_string()));
        assert_eq!(state.desc_field, "Tea");
        let state = apply(state, Event::UpdateDescField(String::new()));
        assert_eq!(state.desc_field, "");
    }

    #[test]
    fn val_field_ignores_garbage() {
        let state = apply(State::empty(), Event::UpdateValField("42".to_string()));
        assert_eq!(state.val_field, 42);
        let state = apply(state, Event::UpdateValField("abc".to_string()));
        assert_eq!(state.val_field, 42);
        let state = apply(state, Event::UpdateValField(String::new()));
        assert_eq!(state.val_field, 42);
    }

    #[test]
    fn add_appends_with_post_increment_id() {
        let mut state = ledger();
        state.desc_field = "Books".to_string();
        state.val_field = -30;

        let (state, effect) = update(state, Event::Add);
        assert!(effect.is_none());
        assert_eq!(state.uid, 5);
        assert_eq!(state.entries.len(), 4);
        assert_eq!(state.entries.last(), Some(&make_entry("Books", -30, 5)));
        assert_eq!(state.desc_field, "");
        assert_eq!(state.val_field, 0);
    }

    #[test]
    fn add_with_empty_description_still_consumes_an_id() {
        let mut state = ledger();
        state.val_field = 9;

        let state = apply(state, Event::Add);
        assert_eq!(state.uid, 5);
        assert_eq!(state.entries, ledger().entries);
        assert_eq!(state.val_field, 0);
    }

    #[test]
    fn add_with_exhausted_counter_is_noop() {
        let mut state = State {
            entries: vec![make_entry("a", 1, EntryId::MAX)],
            uid: EntryId::MAX,
            ..State::empty()
        };
        state.desc_field = "b".to_string();
        state.val_field = 3;

        let (after, effect) = update(state.clone(), Event::Add);
        assert_eq!(after, state);
        assert!(effect.is_none());
    }

    #[test]
    fn add_accepts_whitespace_description() {
        let state = apply(State::empty(), Event::UpdateDescField(" ".to_string()));
        let state = apply(state, Event::Add);
        assert_eq!(state.entries, vec![make_entry(" ", 0, 1)]);
    }

    #[test]
    fn entry_desc_edits_in_place() {
        let state = apply(ledger(), Event::UpdateEntryDesc(2, "Mortgage".to_string()));
        let ids: Vec<_> = state.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert_eq!(state.entries[1].description, "Mortgage");
        assert_eq!(state.entries[0], ledger().entries[0]);
        assert_eq!(state.entries[2], ledger().entries[2]);
    }

    #[test]
    fn entry_desc_may_become_empty() {
        let state = apply(ledger(), Event::UpdateEntryDesc(1, String::new()));
        assert_eq!(state.entries[0].description, "");
    }

    #[test]
    fn entry_val_parses_or_keeps() {
        let state = apply(ledger(), Event::UpdateEntryVal(1, "-12".to_string()));
        assert_eq!(state.entries[0].value, -12);
        let state = apply(state, Event::UpdateEntryVal(1, "1x".to_string()));
        assert_eq!(state.entries[0].value, -12);
    }

    #[test]
    fn entry_val_empty_means_zero() {
        let state = apply(ledger(), Event::UpdateEntryVal(2, String::new()));
        assert_eq!(state.entries[1].value, 0);
        assert_eq!(state.entries[0].value, 5);
        assert_eq!(state.entries[2].value, 1500);
    }

    #[test]
    fn edits_of_unknown_ids_are_noops() {
        let events = [
            Event::UpdateEntryDesc(3, "x".to_string()),
            Event::UpdateEntryVal(3, "10".to_string()),
            Event::UpdateEntryVal(99, String::new()),
            Event::Delete(42),
        ];
        for event in events {
            assert_eq!(update(ledger(), event), (ledger(), None));
        }
    }

    #[test]
    fn delete_keeps_order_and_counter() {
        let state = apply(ledger(), Event::Delete(2));
        let ids: Vec<_> = state.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(state.uid, 4);

        let again = apply(state.clone(), Event::Delete(2));
        assert_eq!(again, state);
    }

    #[test]
    fn blur_requests_effect_only() {
        let field = FieldId::EntryValue(1);
        let (state, effect) = update(ledger(), Event::Blur(field));
        assert_eq!(state, ledger());
        assert_eq!(effect, Some(Effect::Blur(field)));
    }
}
