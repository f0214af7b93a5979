//! Given-When-Then scenarios for the screen reducer.

use tasklist_testing::environment::{screen_environment, screen_environment_from};
use tasklist_testing::{ReducerTest, assertions};

use tasklist_core::screen::{
    InputAction, RowAction, ScreenAction, ScreenReducer, ScreenState, TaskCommand,
};
use tasklist_core::task::{Task, TaskId};

fn seeded_state(titles: &[&str]) -> ScreenState {
    let env = screen_environment();
    let mut state = ScreenState::new();
    for title in titles {
        state.tasks = state.tasks.with_task(Task::new(
            env.ids.next_id(),
            (*title).to_string(),
            env.clock.now(),
        ));
    }
    state
}

#[test]
fn submitting_the_input_requests_an_add_and_clears_the_draft() {
    let mut state = ScreenState::new();
    state.input = "Buy milk".to_string();

    ReducerTest::new(ScreenReducer::new())
        .with_env(screen_environment())
        .given_state(state)
        .when_action(ScreenAction::Input(InputAction::Submitted))
        .then_state(|state| {
            assert_eq!(state.input, "");
        })
        .then_effects(|effects| {
            assertions::assert_sends(
                effects,
                &ScreenAction::Task(TaskCommand::Add {
                    title: "Buy milk".to_string(),
                }),
            );
        })
        .run();
}

#[test]
fn submitting_an_empty_draft_still_adds() {
    // Final behavior has no validation: an empty title is accepted.
    ReducerTest::new(ScreenReducer::new())
        .with_env(screen_environment())
        .given_state(ScreenState::new())
        .when_action(ScreenAction::Input(InputAction::Submitted))
        .then_effects(|effects| {
            assertions::assert_sends(
                effects,
                &ScreenAction::Task(TaskCommand::Add {
                    title: String::new(),
                }),
            );
        })
        .run();
}

#[test]
fn add_command_appends_with_a_fresh_identity() {
    ReducerTest::new(ScreenReducer::new())
        // the seeded task already holds id 1
        .with_env(screen_environment_from(100))
        .given_state(seeded_state(&["existing"]))
        .when_action(ScreenAction::Task(TaskCommand::Add {
            title: "existing".to_string(), // duplicate titles are permitted
        }))
        .then_state(|state| {
            assert_eq!(state.tasks.len(), 2);
            let first = state.tasks.at(0).map(|t| t.id);
            let second = state.tasks.at(1).map(|t| t.id);
            assert_ne!(first, second);
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn toggle_tapped_requests_a_toggle_even_in_edit_mode() {
    let id = TaskId::from_u64(1);
    let mut state = seeded_state(&["Buy milk"]);
    // enter edit mode first
    let env = screen_environment();
    let reducer = ScreenReducer::new();
    use tasklist_core::Reducer as _;
    reducer.reduce(&mut state, ScreenAction::Row(id, RowAction::EditTapped), &env);

    ReducerTest::new(ScreenReducer::new())
        .with_env(env)
        .given_state(state)
        .when_action(ScreenAction::Row(id, RowAction::ToggleTapped))
        .then_effects(move |effects| {
            assertions::assert_sends(effects, &ScreenAction::Task(TaskCommand::Toggle { id }));
        })
        .run();
}

#[test]
fn remove_tapped_is_ignored_for_a_row_in_edit_mode() {
    let id = TaskId::from_u64(1);
    let mut state = seeded_state(&["Buy milk"]);
    let env = screen_environment();
    use tasklist_core::Reducer as _;
    ScreenReducer::new().reduce(&mut state, ScreenAction::Row(id, RowAction::EditTapped), &env);

    ReducerTest::new(ScreenReducer::new())
        .with_env(env)
        .given_state(state)
        .when_action(ScreenAction::Row(id, RowAction::RemoveTapped))
        .then_state(|state| {
            assert_eq!(state.tasks.len(), 1);
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn remove_tapped_requests_removal_for_a_viewing_row() {
    let id = TaskId::from_u64(1);

    ReducerTest::new(ScreenReducer::new())
        .with_env(screen_environment())
        .given_state(seeded_state(&["Buy milk"]))
        .when_action(ScreenAction::Row(id, RowAction::RemoveTapped))
        .then_effects(move |effects| {
            assertions::assert_sends(effects, &ScreenAction::Task(TaskCommand::Remove { id }));
        })
        .run();
}

#[test]
fn cancel_reverts_the_draft_to_the_pre_edit_title() {
    let id = TaskId::from_u64(1);
    let mut state = seeded_state(&["Buy milk"]);
    let env = screen_environment();
    use tasklist_core::Reducer as _;
    let reducer = ScreenReducer::new();
    reducer.reduce(&mut state, ScreenAction::Row(id, RowAction::EditTapped), &env);
    reducer.reduce(
        &mut state,
        ScreenAction::Row(id, RowAction::DraftChanged("half-typed".to_string())),
        &env,
    );

    ReducerTest::new(ScreenReducer::new())
        .with_env(env)
        .given_state(state)
        .when_action(ScreenAction::Row(id, RowAction::CancelTapped))
        .then_state(move |state| {
            assert!(!state.is_editing(id));
            assert!(state.tasks.get(id).is_some_and(|t| t.title == "Buy milk"));
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}
