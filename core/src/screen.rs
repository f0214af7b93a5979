//! The single screen: state, actions, and reducer.
//!
//! The screen owns the task collection plus the transient state of its two
//! interactive components: the new-task input field's draft, and the
//! in-progress edit drafts of list rows. Presentation never mutates any of
//! this directly; it sends [`ScreenAction`]s and re-renders from the snapshot
//! the store hands back.
//!
//! Component actions ([`InputAction`], [`RowAction`]) update component-local
//! state and request collection mutations by returning
//! `Effect::Send(ScreenAction::Task(..))`. [`TaskCommand`]s are the only
//! place the collection changes; the frontend never sends them itself.

use crate::effect::Effect;
use crate::environment::{Clock, IdSource};
use crate::reducer::{Effects, Reducer};
use crate::task::{Task, TaskId, TaskList};
use smallvec::smallvec;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Environment dependencies for the screen reducer.
#[derive(Clone)]
pub struct ScreenEnvironment {
    /// Clock for creation timestamps.
    pub clock: Arc<dyn Clock>,
    /// Source of fresh task identities.
    pub ids: Arc<dyn IdSource>,
}

impl ScreenEnvironment {
    /// Creates a new `ScreenEnvironment`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        Self { clock, ids }
    }
}

/// State of the to-do screen.
///
/// Rows are in the Viewing state unless they have an entry in `drafts`;
/// holding a draft IS the Editing state of the row state machine.
#[derive(Clone, Debug, Default)]
pub struct ScreenState {
    /// The task collection, in display order.
    pub tasks: TaskList,
    /// Draft text of the new-task input field.
    pub input: String,
    /// In-progress edit drafts, keyed by row identity.
    drafts: BTreeMap<TaskId, String>,
}

impl ScreenState {
    /// Creates the initial, empty screen state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the given row is in the Editing state.
    #[must_use]
    pub fn is_editing(&self, id: TaskId) -> bool {
        self.drafts.contains_key(&id)
    }

    /// Returns the row's edit draft, if it is in the Editing state.
    #[must_use]
    pub fn draft(&self, id: TaskId) -> Option<&str> {
        self.drafts.get(&id).map(String::as_str)
    }
}

/// Actions of the new-task input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// The draft text changed.
    DraftChanged(String),
    /// The draft was submitted as a new task title.
    Submitted,
}

/// Actions of a single list row.
///
/// Named for the user intent they carry; the row state machine decides what
/// each one means in the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// The completion marker (or the row itself) was tapped.
    ToggleTapped,
    /// The edit affordance was tapped: Viewing → Editing.
    EditTapped,
    /// The edit draft changed while Editing.
    DraftChanged(String),
    /// The edit field was submitted: commit the draft, Editing → Viewing.
    SubmitTapped,
    /// The cancel affordance was tapped: discard the draft,
    /// Editing → Viewing.
    CancelTapped,
    /// The remove affordance was tapped. Disabled while the row is Editing.
    RemoveTapped,
}

/// Mutation requests for the task collection.
///
/// These are the messages that flow upward from components to the collection
/// owner. All are total: commands naming an unknown id are absorbed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskCommand {
    /// Append a new task with the given title.
    Add {
        /// Title of the new task. Not validated; empty and duplicate titles
        /// are accepted.
        title: String,
    },
    /// Invert the completion flag of a task.
    Toggle {
        /// Target task.
        id: TaskId,
    },
    /// Replace the title of a task.
    Rename {
        /// Target task.
        id: TaskId,
        /// The new title.
        title: String,
    },
    /// Remove a task permanently. There is no undo.
    Remove {
        /// Target task.
        id: TaskId,
    },
}

/// All inputs to the screen reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenAction {
    /// An action of the new-task input field.
    Input(InputAction),
    /// An action of the list row with the given identity.
    Row(TaskId, RowAction),
    /// A collection mutation request.
    Task(TaskCommand),
}

/// Reducer for the to-do screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenReducer;

impl ScreenReducer {
    /// Creates a new `ScreenReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn reduce_input(state: &mut ScreenState, action: InputAction) -> Effects<ScreenAction> {
        match action {
            InputAction::DraftChanged(text) => {
                state.input = text;
                smallvec![]
            }
            InputAction::Submitted => {
                let title = std::mem::take(&mut state.input);
                smallvec![Effect::Send(ScreenAction::Task(TaskCommand::Add { title }))]
            }
        }
    }

    fn reduce_row(
        state: &mut ScreenState,
        id: TaskId,
        action: RowAction,
    ) -> Effects<ScreenAction> {
        match action {
            // Toggling works in either row state, independent of the draft.
            RowAction::ToggleTapped => {
                smallvec![Effect::Send(ScreenAction::Task(TaskCommand::Toggle { id }))]
            }
            RowAction::EditTapped => {
                if let Some(task) = state.tasks.get(id) {
                    state.drafts.insert(id, task.title.clone());
                }
                smallvec![]
            }
            RowAction::DraftChanged(text) => {
                if let Some(draft) = state.drafts.get_mut(&id) {
                    *draft = text;
                }
                smallvec![]
            }
            RowAction::SubmitTapped => match state.drafts.remove(&id) {
                Some(title) => {
                    smallvec![Effect::Send(ScreenAction::Task(TaskCommand::Rename {
                        id,
                        title
                    }))]
                }
                None => smallvec![],
            },
            RowAction::CancelTapped => {
                state.drafts.remove(&id);
                smallvec![]
            }
            RowAction::RemoveTapped => {
                // Removal is disabled while the row is mid-edit.
                if state.is_editing(id) {
                    smallvec![]
                } else {
                    smallvec![Effect::Send(ScreenAction::Task(TaskCommand::Remove { id }))]
                }
            }
        }
    }

    fn apply_command(state: &mut ScreenState, command: TaskCommand, env: &ScreenEnvironment) {
        match command {
            TaskCommand::Add { title } => {
                let task = Task::new(env.ids.next_id(), title, env.clock.now());
                state.tasks = state.tasks.with_task(task);
            }
            TaskCommand::Toggle { id } => {
                state.tasks = state.tasks.with_toggled(id);
            }
            TaskCommand::Rename { id, title } => {
                state.tasks = state.tasks.with_title(id, title);
            }
            TaskCommand::Remove { id } => {
                state.tasks = state.tasks.without(id);
                // A removed row cannot keep a draft.
                state.drafts.remove(&id);
            }
        }
    }
}

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Action = ScreenAction;
    type Environment = ScreenEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            ScreenAction::Input(action) => Self::reduce_input(state, action),
            ScreenAction::Row(id, action) => Self::reduce_row(state, id, action),
            ScreenAction::Task(command) => {
                Self::apply_command(state, command, env);
                smallvec![]
            }
        }
    }
}
