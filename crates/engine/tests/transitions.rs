use engine::{Effect, Entry, Event, FieldId, State, empty_state, make_entry, update};

fn run(state: State, events: impl IntoIterator<Item = Event>) -> State {
    events
        .into_iter()
        .fold(state, |state, event| update(state, event).0)
}

fn text(s: &str) -> String {
    s.to_string()
}

/// A handful of states reachable from `empty_state()`.
fn reachable_states() -> Vec<State> {
    let mut states = vec![empty_state()];
    let mut state = empty_state();
    for (desc, val) in [("Coffee", "5"), ("", "3"), ("Rent", "-700"), ("Bonus", "x")] {
        state = run(
            state,
            [
                Event::UpdateDescField(text(desc)),
                Event::UpdateValField(text(val)),
                Event::Add,
            ],
        );
        states.push(state.clone());
    }
    states.push(run(state.clone(), [Event::Delete(1)]));
    states.push(run(
        state,
        [
            Event::UpdateEntryVal(3, text("")),
            Event::UpdateDescField(text("pending")),
            Event::UpdateValField(text("-1")),
        ],
    ));
    states
}

#[test]
fn coffee_scenario() {
    let state = run(
        empty_state(),
        [
            Event::UpdateDescField(text("Coffee")),
            Event::UpdateValField(text("5")),
            Event::Add,
        ],
    );
    assert_eq!(state.entries, vec![make_entry("Coffee", 5, 1)]);
    assert_eq!(state.uid, 1);
    assert_eq!(state.desc_field, "");
    assert_eq!(state.val_field, 0);

    let state = run(state, [Event::Delete(1)]);
    assert!(state.entries.is_empty());
    assert_eq!(state.uid, 1);
}

#[test]
fn two_empty_adds_waste_two_ids() {
    let state = run(empty_state(), [Event::Add, Event::Add]);
    assert!(state.entries.is_empty());
    assert_eq!(state.uid, 2);

    // The next real entry skips the wasted ids.
    let state = run(state, [Event::UpdateDescField(text("Tea")), Event::Add]);
    assert_eq!(state.entries, vec![make_entry("Tea", 0, 3)]);
}

#[test]
fn add_always_bumps_uid_by_one() {
    for state in reachable_states() {
        let before = state.uid;
        let after = update(state, Event::Add).0;
        assert_eq!(after.uid, before + 1);
    }
}

#[test]
fn add_with_description_appends_exactly_one() {
    for mut state in reachable_states() {
        state.desc_field = text("Lunch");
        state.val_field = 12;
        let len = state.entries.len();

        let after = update(state, Event::Add).0;
        assert_eq!(after.entries.len(), len + 1);
        assert_eq!(
            after.entries.last(),
            Some(&Entry::new("Lunch", 12, after.uid))
        );
        assert_eq!(after.desc_field, "");
        assert_eq!(after.val_field, 0);
    }
}

#[test]
fn edits_on_missing_ids_leave_state_untouched() {
    for state in reachable_states() {
        let missing = state.uid + 10;
        let after = run(
            state.clone(),
            [
                Event::UpdateEntryDesc(missing, text("x")),
                Event::UpdateEntryVal(missing, text("1")),
                Event::UpdateEntryVal(missing, text("")),
                Event::UpdateEntryDesc(0, text("")),
            ],
        );
        assert_eq!(after, state);
    }
}

#[test]
fn delete_twice_is_idempotent() {
    for state in reachable_states() {
        for id in 0..=state.uid + 1 {
            let once = update(state.clone(), Event::Delete(id)).0;
            let twice = update(once.clone(), Event::Delete(id)).0;
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn ids_stay_unique_and_below_counter() {
    for state in reachable_states() {
        let mut ids: Vec<_> = state.entries.iter().map(|e| e.id).collect();
        assert!(ids.iter().all(|id| *id <= state.uid));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.entries.len());
    }
}

#[test]
fn value_edits_touch_a_single_entry() {
    let state = reachable_states().pop().unwrap();
    let target = state.entries[0].id;
    let after = update(state.clone(), Event::UpdateEntryVal(target, text(""))).0;
    assert_eq!(after.entries[0].value, 0);
    assert_eq!(after.entries[1..], state.entries[1..]);
}

#[test]
fn blur_is_pure_effect() {
    for state in reachable_states() {
        let (after, effect) = update(state.clone(), Event::Blur(FieldId::NewValue));
        assert_eq!(after, state);
        assert_eq!(effect, Some(Effect::Blur(FieldId::NewValue)));
    }
}

#[test]
fn snapshots_round_trip() {
    for state in reachable_states() {
        let encoded = state.to_json().unwrap();
        assert_eq!(State::from_json(&encoded).unwrap(), state);
    }
}

#[test]
fn loaded_state_with_full_counter_survives_add() {
    let text = r#"{
        "entries": [{"description": "a", "value": 1, "id": 18446744073709551615}],
        "descField": "b",
        "valField": 0,
        "uid": 18446744073709551615
    }"#;
    let state = State::from_json(text).unwrap();

    let after = run(state.clone(), [Event::Add, Event::Add]);
    assert_eq!(after, state);
}
