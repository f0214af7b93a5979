//! End-to-end screen scenarios driven through the store.
//!
//! These tests exercise the full unidirectional loop: a component action is
//! sent, the reducer emits a task command as feedback, and the store applies
//! it before returning.

use tasklist_core::screen::{InputAction, RowAction, ScreenAction, ScreenReducer, ScreenState};
use tasklist_core::task::TaskId;
use tasklist_runtime::Store;
use tasklist_testing::environment::screen_environment;

type ScreenStore = Store<ScreenReducer>;

fn store() -> ScreenStore {
    Store::new(ScreenState::new(), ScreenReducer::new(), screen_environment())
}

fn type_and_submit(store: &mut ScreenStore, title: &str) {
    store.send(ScreenAction::Input(InputAction::DraftChanged(
        title.to_string(),
    )));
    store.send(ScreenAction::Input(InputAction::Submitted));
}

fn first_id(store: &ScreenStore) -> Option<TaskId> {
    store.state().tasks.at(0).map(|t| t.id)
}

#[test]
fn submitting_the_input_adds_a_task() {
    let mut store = store();
    type_and_submit(&mut store, "Buy milk");

    let state = store.state();
    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.input, "");
    assert!(state.tasks.at(0).is_some_and(|t| t.title == "Buy milk" && !t.done));
}

#[test]
fn add_toggle_edit_remove_round_trip() {
    let mut store = store();

    type_and_submit(&mut store, "Buy milk");
    let Some(id) = first_id(&store) else {
        unreachable!("task was just added");
    };

    store.send(ScreenAction::Row(id, RowAction::ToggleTapped));
    assert!(store.state().tasks.get(id).is_some_and(|t| t.done));

    store.send(ScreenAction::Row(id, RowAction::EditTapped));
    store.send(ScreenAction::Row(
        id,
        RowAction::DraftChanged("Buy oat milk".to_string()),
    ));
    store.send(ScreenAction::Row(id, RowAction::SubmitTapped));

    let renamed = store.state().tasks.get(id).cloned();
    assert!(renamed.is_some_and(|t| t.title == "Buy oat milk" && t.done));
    assert!(!store.state().is_editing(id));

    store.send(ScreenAction::Row(id, RowAction::RemoveTapped));
    assert!(store.state().tasks.is_empty());
}

#[test]
fn two_identical_titles_get_distinct_identities() {
    let mut store = store();
    type_and_submit(&mut store, "same");
    type_and_submit(&mut store, "same");

    let state = store.state();
    assert_eq!(state.tasks.len(), 2);
    assert_ne!(
        state.tasks.at(0).map(|t| t.id),
        state.tasks.at(1).map(|t| t.id)
    );
}

#[test]
fn removal_is_blocked_until_the_edit_ends() {
    let mut store = store();
    type_and_submit(&mut store, "Buy milk");
    let Some(id) = first_id(&store) else {
        unreachable!("task was just added");
    };

    store.send(ScreenAction::Row(id, RowAction::EditTapped));
    store.send(ScreenAction::Row(id, RowAction::RemoveTapped));
    assert_eq!(store.state().tasks.len(), 1);

    store.send(ScreenAction::Row(id, RowAction::CancelTapped));
    store.send(ScreenAction::Row(id, RowAction::RemoveTapped));
    assert!(store.state().tasks.is_empty());
}

#[test]
fn insertion_order_is_preserved() {
    let mut store = store();
    for title in ["a", "b", "c"] {
        type_and_submit(&mut store, title);
    }

    let titles: Vec<_> = store
        .state()
        .tasks
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(titles, ["a", "b", "c"]);
}
