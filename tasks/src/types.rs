//! Domain types for the task list.
//!
//! A task is an immutable record: changing one produces a new record with the
//! same id. Collections share records between versions, so an unchanged task
//! is the very same allocation before and after a mutation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Unique identifier for a task
///
/// Issued by the environment's id generator when a task is added and never
/// changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Text shown in the row; may be empty
    pub title: String,
    /// Whether the task is completed
    pub done: bool,
    /// When the task was added
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet completed task
    #[must_use]
    pub const fn new(id: TaskId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            done: false,
            created_at,
        }
    }

    /// Returns a copy with the completion flag set to `done`
    #[must_use]
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }

    /// Returns a copy with a new title
    #[must_use]
    pub fn with_title(&self, title: String) -> Self {
        Self {
            title,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_testing::{test_clock, SequentialIdGenerator};
    use tasklist_core::environment::Clock;

    fn task(title: &str) -> Task {
        Task::new(
            TaskId::from_uuid(SequentialIdGenerator::nth(1)),
            title.to_string(),
            test_clock().now(),
        )
    }

    #[test]
    fn task_id_display() {
        let id = TaskId::from_uuid(SequentialIdGenerator::nth(7));
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000007");
    }

    #[test]
    fn new_task_is_not_done() {
        let task = task("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert_eq!(task.created_at, test_clock().now());
    }

    #[test]
    fn with_done_keeps_identity_fields() {
        let original = task("Buy milk");
        let done = original.with_done(true);

        assert!(done.done);
        assert_eq!(done.id, original.id);
        assert_eq!(done.title, original.title);
        assert_eq!(done.created_at, original.created_at);
        assert!(!original.done);
    }

    #[test]
    fn with_title_keeps_id_and_done() {
        let original = task("A").with_done(true);
        let renamed = original.with_title("A2".to_string());

        assert_eq!(renamed.title, "A2");
        assert_eq!(renamed.id, original.id);
        assert!(renamed.done);
    }
}
