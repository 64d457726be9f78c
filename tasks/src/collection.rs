//! The ordered task collection.
//!
//! A [`TaskCollection`] is never mutated. Every operation that changes it
//! returns a new collection that reuses the records of untouched tasks and
//! holds a fresh record for the task that changed. Operations that would not
//! change anything return `None`, so "did anything happen" is visible in the
//! type and a renderer can compare collections by identity with
//! [`TaskCollection::same_as`].

use crate::types::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Reasons a task cannot be added
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// Another task already has exactly this title (case-sensitive)
    #[error("a task titled {title:?} already exists")]
    DuplicateTitle {
        /// The rejected title
        title: String,
    },

    /// Another task already has this id
    #[error("a task with id {id} already exists")]
    DuplicateId {
        /// The rejected id
        id: TaskId,
    },
}

/// Ordered, copy-on-write sequence of tasks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Arc<[Arc<Task>]>,
}

impl TaskCollection {
    /// Creates an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
        }
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    /// Tasks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().map(AsRef::as_ref)
    }

    /// The shared records backing this collection, in insertion order
    #[must_use]
    pub fn records(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|task| task.id == id)
    }

    /// Zero-based display position of a task
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Checks if any task has exactly this title
    #[must_use]
    pub fn has_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }

    /// Whether `other` is the very same collection value, not merely equal
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    /// Returns a collection with `task` appended
    ///
    /// # Errors
    ///
    /// - [`TaskListError::DuplicateTitle`] if a task already has the same title
    /// - [`TaskListError::DuplicateId`] if a task already has the same id
    pub fn with_added(&self, task: Task) -> Result<Self, TaskListError> {
        if self.has_title(&task.title) {
            return Err(TaskListError::DuplicateTitle { title: task.title });
        }

        if self.contains(task.id) {
            return Err(TaskListError::DuplicateId { id: task.id });
        }

        let tasks: Vec<Arc<Task>> = self
            .tasks
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::new(task)))
            .collect();

        Ok(Self {
            tasks: Arc::from(tasks),
        })
    }

    /// Returns a collection with the task's completion flag flipped
    ///
    /// `None` if no task has this id.
    #[must_use]
    pub fn with_done_toggled(&self, id: TaskId) -> Option<Self> {
        let done = self.get(id)?.done;
        self.with_done(id, !done)
    }

    /// Returns a collection with the task's completion flag set to `done`
    ///
    /// `None` if no task has this id or it already has that flag.
    #[must_use]
    pub fn with_done(&self, id: TaskId, done: bool) -> Option<Self> {
        self.replace(id, |task| (task.done != done).then(|| task.with_done(done)))
    }

    /// Returns a collection with the task renamed
    ///
    /// No uniqueness or emptiness check is made. `None` if no task has this
    /// id or it already has exactly this title.
    #[must_use]
    pub fn with_title(&self, id: TaskId, title: &str) -> Option<Self> {
        self.replace(id, |task| {
            (task.title != title).then(|| task.with_title(title.to_string()))
        })
    }

    /// Returns a collection without the task
    ///
    /// `None` if no task has this id.
    #[must_use]
    pub fn without(&self, id: TaskId) -> Option<Self> {
        self.position(id)?;

        let tasks: Vec<Arc<Task>> = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();

        Some(Self {
            tasks: Arc::from(tasks),
        })
    }

    /// Rebuilds the collection with one record swapped for a fresh one
    fn replace<F>(&self, id: TaskId, change: F) -> Option<Self>
    where
        F: FnOnce(&Task) -> Option<Task>,
    {
        let index = self.position(id)?;
        let replacement = Arc::new(change(self.tasks.get(index)?)?);

        let tasks: Vec<Arc<Task>> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                if i == index {
                    Arc::clone(&replacement)
                } else {
                    Arc::clone(task)
                }
            })
            .collect();

        Some(Self {
            tasks: Arc::from(tasks),
        })
    }
}

impl Default for TaskCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Task> for TaskCollection {
    /// Builds a collection as-is; callers are responsible for unique ids
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let tasks: Vec<Arc<Task>> = iter.into_iter().map(Arc::new).collect();
        Self {
            tasks: Arc::from(tasks),
        }
    }
}
