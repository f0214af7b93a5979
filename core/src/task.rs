//! The task entity and the task collection.
//!
//! A task is a plain record: identity, title, completion flag, creation time.
//! [`TaskList`] owns the ordered collection and provides the four mutation
//! operations as total, pure functions: each borrows the current collection
//! and returns a new one. Operations targeting an id that is not present
//! return a collection equal to the input; nothing here signals an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Issued by [`crate::environment::IdSource`]; unique within the collection
/// for the lifetime of the screen.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw integer.
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation and never changed.
    pub id: TaskId,
    /// Display title. Mutable after creation; emptiness is not enforced.
    pub title: String,
    /// Completion flag.
    pub done: bool,
    /// When the task was created. Informational only, never an identity.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not-yet-done task.
    #[must_use]
    pub const fn new(id: TaskId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            done: false,
            created_at,
        }
    }
}

/// The ordered task collection.
///
/// Display order is insertion order; no other ordering is maintained. All
/// mutation operations are copy-on-write: the receiver is left untouched and
/// a new collection is returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.0.iter().filter(|t| t.done).count()
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.0.iter().find(|t| t.id == id)
    }

    /// Returns the task at the given display position, if in range.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Checks whether a task with the given id exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a new collection with `task` appended at the end.
    #[must_use]
    pub fn with_task(&self, task: Task) -> Self {
        let mut tasks = self.0.clone();
        tasks.push(task);
        Self(tasks)
    }

    /// Returns a new collection with the matching task's `done` flag
    /// inverted. Unknown ids yield a collection equal to the input.
    #[must_use]
    pub fn with_toggled(&self, id: TaskId) -> Self {
        Self(
            self.0
                .iter()
                .cloned()
                .map(|mut task| {
                    if task.id == id {
                        task.done = !task.done;
                    }
                    task
                })
                .collect(),
        )
    }

    /// Returns a new collection with the matching task's title replaced.
    /// Unknown ids yield a collection equal to the input.
    #[must_use]
    pub fn with_title(&self, id: TaskId, title: impl Into<String>) -> Self {
        let title = title.into();
        Self(
            self.0
                .iter()
                .cloned()
                .map(|mut task| {
                    if task.id == id {
                        task.title = title.clone();
                    }
                    task
                })
                .collect(),
        )
    }

    /// Returns a new collection with the matching task excluded. Unknown ids
    /// yield a collection equal to the input.
    #[must_use]
    pub fn without(&self, id: TaskId) -> Self {
        Self(self.0.iter().filter(|t| t.id != id).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
