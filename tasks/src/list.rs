//! Reducer logic for the task list.
//!
//! Commands come from the user interface and are validated against the
//! current state. A valid command becomes an event, and only events change
//! state. Removal is a two-step protocol: `RequestRemoval` opens a
//! confirmation prompt and only `ConfirmRemoval` removes the task.
//!
//! While a prompt is open the screen is modal: commands other than the
//! prompt's own answers are ignored.

use crate::collection::TaskCollection;
use crate::types::{Task, TaskId};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tasklist_core::{
    effect::Effect,
    environment::{Clock, IdGenerator},
    reducer::Reducer,
    SmallVec,
};
use tasklist_macros::Action;

/// The modal prompt currently shown over the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Alert explaining that a task with this title already exists
    DuplicateTitle {
        /// The title the user tried to add
        title: String,
    },
    /// Yes/no question gating the removal of a task
    ConfirmRemoval {
        /// The task that will be removed on "yes"
        id: TaskId,
    },
}

/// State of the task list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskListState {
    /// All tasks in insertion order
    pub tasks: TaskCollection,
    /// Open prompt, if any
    pub prompt: Option<Prompt>,
}

impl TaskListState {
    /// Creates an empty list with no prompt
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks, as shown in the header
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.completed_count()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Zero-based display position of a task
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.position(id)
    }

    /// Titles in display order
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.tasks.iter().map(|task| task.title.as_str()).collect()
    }
}

/// Actions representing commands and events for the task list
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum TaskListAction {
    // ========== Commands ==========
    /// Command: Add a task with this title
    #[command]
    AddTask {
        /// Raw user input
        title: String,
    },

    /// Command: Flip a task's completion flag
    #[command]
    ToggleDone {
        /// Task to toggle
        id: TaskId,
    },

    /// Command: Ask the user to confirm removing a task
    #[command]
    RequestRemoval {
        /// Task to remove
        id: TaskId,
    },

    /// Command: The user answered "yes" to the removal prompt
    #[command]
    ConfirmRemoval,

    /// Command: The user answered "no" to the removal prompt
    #[command]
    CancelRemoval,

    /// Command: Rename a task
    #[command]
    EditTitle {
        /// Task to rename
        id: TaskId,
        /// New title, taken as-is
        title: String,
    },

    /// Command: Close the open prompt
    ///
    /// Dismissing a removal prompt counts as answering "no".
    #[command]
    DismissPrompt,

    // ========== Events ==========
    /// Event: A task was added
    #[event]
    TaskAdded {
        /// New task's id
        id: TaskId,
        /// Title of the task
        title: String,
        /// When the task was added
        created_at: DateTime<Utc>,
    },

    /// Event: A task was not added because its title is taken
    #[event]
    AddRejected {
        /// The rejected title
        title: String,
    },

    /// Event: A task's completion flag changed
    #[event]
    DoneToggled {
        /// Task identifier
        id: TaskId,
        /// The new flag value
        done: bool,
    },

    /// Event: Removal confirmation was requested
    #[event]
    RemovalRequested {
        /// Task awaiting confirmation
        id: TaskId,
    },

    /// Event: Removal was confirmed
    #[event]
    TaskRemoved {
        /// Task identifier
        id: TaskId,
    },

    /// Event: Removal was declined
    #[event]
    RemovalCancelled {
        /// Task that stays
        id: TaskId,
    },

    /// Event: A task was renamed
    #[event]
    TitleEdited {
        /// Task identifier
        id: TaskId,
        /// The new title
        title: String,
    },

    /// Event: The duplicate title alert was closed
    #[event]
    PromptDismissed,
}

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TaskListEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of task ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskListEnvironment {
    /// Creates a new `TaskListEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Turns a command into the event it produces, if any
    ///
    /// Returns `None` for commands that leave state untouched: unknown ids,
    /// answers with no matching prompt, and anything sent while a different
    /// prompt is open.
    fn decide(
        state: &TaskListState,
        command: TaskListAction,
        env: &TaskListEnvironment,
    ) -> Option<TaskListAction> {
        match (&state.prompt, command) {
            (None, TaskListAction::AddTask { title }) => {
                if state.tasks.has_title(&title) {
                    tracing::debug!(%title, "Rejecting duplicate title");
                    return Some(TaskListAction::AddRejected { title });
                }

                Some(TaskListAction::TaskAdded {
                    id: TaskId::from_uuid(env.ids.next_id()),
                    title,
                    created_at: env.clock.now(),
                })
            },

            (None, TaskListAction::ToggleDone { id }) => {
                let Some(task) = state.get(id) else {
                    tracing::debug!(%id, "Toggle ignored: no such task");
                    return None;
                };

                Some(TaskListAction::DoneToggled {
                    id,
                    done: !task.done,
                })
            },

            (None, TaskListAction::RequestRemoval { id }) => {
                Some(TaskListAction::RemovalRequested { id })
            },

            (None, TaskListAction::EditTitle { id, title }) => {
                if !state.tasks.contains(id) {
                    tracing::debug!(%id, "Edit ignored: no such task");
                    return None;
                }

                Some(TaskListAction::TitleEdited { id, title })
            },

            (Some(Prompt::ConfirmRemoval { id }), TaskListAction::ConfirmRemoval) => {
                Some(TaskListAction::TaskRemoved { id: *id })
            },

            (
                Some(Prompt::ConfirmRemoval { id }),
                TaskListAction::CancelRemoval | TaskListAction::DismissPrompt,
            ) => Some(TaskListAction::RemovalCancelled { id: *id }),

            (Some(Prompt::DuplicateTitle { .. }), TaskListAction::DismissPrompt) => {
                Some(TaskListAction::PromptDismissed)
            },

            (prompt, command) => {
                tracing::debug!(
                    command = command.action_name(),
                    ?prompt,
                    "Command ignored in current prompt state"
                );
                None
            },
        }
    }

    /// Applies an event to state
    ///
    /// Every change to the collection replaces it with a new value.
    fn apply_event(state: &mut TaskListState, event: &TaskListAction) {
        match event {
            TaskListAction::TaskAdded {
                id,
                title,
                created_at,
            } => {
                let task = Task::new(*id, title.clone(), *created_at);
                match state.tasks.with_added(task) {
                    Ok(tasks) => state.tasks = tasks,
                    Err(error) => {
                        tracing::warn!(%error, "Dropping TaskAdded event that conflicts with state");
                    },
                }
            },
            TaskListAction::AddRejected { title } => {
                state.prompt = Some(Prompt::DuplicateTitle {
                    title: title.clone(),
                });
            },
            TaskListAction::DoneToggled { id, done } => {
                if let Some(tasks) = state.tasks.with_done(*id, *done) {
                    state.tasks = tasks;
                }
            },
            TaskListAction::RemovalRequested { id } => {
                state.prompt = Some(Prompt::ConfirmRemoval { id: *id });
            },
            TaskListAction::TaskRemoved { id } => {
                if let Some(tasks) = state.tasks.without(*id) {
                    state.tasks = tasks;
                }
                state.prompt = None;
            },
            TaskListAction::RemovalCancelled { .. } | TaskListAction::PromptDismissed => {
                state.prompt = None;
            },
            TaskListAction::TitleEdited { id, title } => {
                if let Some(tasks) = state.tasks.with_title(*id, title) {
                    state.tasks = tasks;
                }
            },
            // Commands are not applied to state
            TaskListAction::AddTask { .. }
            | TaskListAction::ToggleDone { .. }
            | TaskListAction::RequestRemoval { .. }
            | TaskListAction::ConfirmRemoval
            | TaskListAction::CancelRemoval
            | TaskListAction::EditTitle { .. }
            | TaskListAction::DismissPrompt => {},
        }
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskListAction;
    type Environment = TaskListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if action.is_command() {
            if let Some(event) = Self::decide(state, action, env) {
                tracing::debug!(event = event.event_type(), "Applying event");
                Self::apply_event(state, &event);
            }
        } else {
            // Events replayed or sent directly
            Self::apply_event(state, &action);
        }

        SmallVec::new()
    }
}
