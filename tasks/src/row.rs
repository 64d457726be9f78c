//! Inline rename state machine for one task row.
//!
//! A row is `Viewing` until the user taps the edit icon. While `Editing` it
//! holds a draft title; submitting moves it to `Submitting` and asks the
//! parent screen, through a delegate action, to rename the task. Once the
//! rename is applied the parent reduces `SubmissionFinished`, which always
//! returns the row to `Viewing`.

use crate::types::TaskId;
use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use tasklist_macros::Action;

/// Where the row is in the rename interaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditMode {
    /// Showing the committed title
    Viewing,
    /// The title field is editable and focused
    Editing {
        /// Text currently in the field
        draft: String,
    },
    /// The draft was handed to the list; waiting for the parent to finish
    Submitting {
        /// The submitted text
        draft: String,
    },
}

/// What the edit/cancel icon does when tapped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditToggle {
    /// Shows the pencil; tapping starts editing
    StartEditing,
    /// Shows the cross; tapping cancels editing
    CancelEditing,
}

/// Which row controls are active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowControls {
    /// Completion marker can be tapped
    pub toggle_enabled: bool,
    /// Title field accepts input
    pub title_editable: bool,
    /// State of the edit/cancel icon
    pub edit_toggle: EditToggle,
    /// Trash icon can be tapped
    pub delete_enabled: bool,
}

/// A rendered task row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    task_id: TaskId,
    title: String,
    mode: EditMode,
}

impl TaskRow {
    /// A row in `Viewing` mode showing `title`
    #[must_use]
    pub fn new(task_id: TaskId, title: impl Into<String>) -> Self {
        Self {
            task_id,
            title: title.into(),
            mode: EditMode::Viewing,
        }
    }

    /// The task this row displays
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// The committed title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Whether an edit session is open
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        !matches!(self.mode, EditMode::Viewing)
    }

    /// The draft of the open edit session
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Viewing => None,
            EditMode::Editing { draft } | EditMode::Submitting { draft } => Some(draft),
        }
    }

    /// Text the title field shows
    #[must_use]
    pub fn displayed_title(&self) -> &str {
        self.draft().unwrap_or(&self.title)
    }

    /// Whether the title field holds input focus
    #[must_use]
    pub const fn input_focused(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    /// Control availability for the current mode
    ///
    /// Toggling stays available while editing; only delete is disabled.
    #[must_use]
    pub const fn controls(&self) -> RowControls {
        let editing = self.is_editing();
        RowControls {
            toggle_enabled: true,
            title_editable: self.input_focused(),
            edit_toggle: if editing {
                EditToggle::CancelEditing
            } else {
                EditToggle::StartEditing
            },
            delete_enabled: !editing,
        }
    }
}

/// Work a row asks its parent to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowDelegate {
    /// Rename the task; the owner then finishes the submission
    EditTitle {
        /// Task to rename
        id: TaskId,
        /// Submitted draft
        title: String,
    },
}

/// Actions for one row
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Command: Edit icon tapped
    #[command]
    StartEditing,

    /// Command: The user typed in the title field
    #[command]
    DraftChanged {
        /// Full field contents
        text: String,
    },

    /// Command: Cancel icon tapped
    #[command]
    CancelEditing,

    /// Command: The user confirmed the draft
    #[command]
    SubmitEditing,

    /// Command: The parent finished handling a submission
    #[command]
    SubmissionFinished,

    /// Command: The task's committed title changed
    #[command]
    TitleChanged {
        /// The new committed title
        title: String,
    },

    /// Request for the parent; rows ignore it
    Delegate(RowDelegate),
}

/// Reducer for a single row
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskRowReducer;

impl TaskRowReducer {
    /// Creates a new `TaskRowReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TaskRowReducer {
    type State = TaskRow;
    type Action = RowAction;
    type Environment = ();

    fn reduce(
        &self,
        row: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match (&mut row.mode, action) {
            (EditMode::Viewing, RowAction::StartEditing) => {
                row.mode = EditMode::Editing {
                    draft: row.title.clone(),
                };
            },

            (EditMode::Editing { draft }, RowAction::DraftChanged { text }) => {
                *draft = text;
            },

            (EditMode::Editing { .. }, RowAction::CancelEditing) => {
                row.mode = EditMode::Viewing;
            },

            (EditMode::Editing { draft }, RowAction::SubmitEditing) => {
                let title = std::mem::take(draft);
                row.mode = EditMode::Submitting {
                    draft: title.clone(),
                };

                return smallvec![Effect::Send(RowAction::Delegate(RowDelegate::EditTitle {
                    id: row.task_id,
                    title,
                }))];
            },

            (EditMode::Submitting { .. }, RowAction::SubmissionFinished) => {
                row.mode = EditMode::Viewing;
            },

            (_, RowAction::TitleChanged { title }) => {
                row.title = title;
            },

            (mode, action) => {
                tracing::trace!(
                    task = %row.task_id,
                    action = action.action_name(),
                    ?mode,
                    "Row action ignored in current mode"
                );
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_testing::{assertions, ReducerTest, SequentialIdGenerator};

    fn id() -> TaskId {
        TaskId::from_uuid(SequentialIdGenerator::nth(1))
    }

    fn row() -> TaskRow {
        TaskRow::new(id(), "A")
    }

    fn draft(text: &str) -> RowAction {
        RowAction::DraftChanged {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_new_row_is_viewing() {
        let row = row();

        assert_eq!(row.mode(), &EditMode::Viewing);
        assert!(!row.input_focused());
        assert_eq!(row.displayed_title(), "A");
        assert_eq!(
            row.controls(),
            RowControls {
                toggle_enabled: true,
                title_editable: false,
                edit_toggle: EditToggle::StartEditing,
                delete_enabled: true,
            }
        );
    }

    #[test]
    fn test_start_editing_seeds_draft_and_focuses() {
        ReducerTest::new(TaskRowReducer::new())
            .with_env(())
            .given_state(row())
            .when_action(RowAction::StartEditing)
            .then_state(|row| {
                assert_eq!(row.draft(), Some("A"));
                assert!(row.input_focused());
                assert_eq!(
                    row.controls(),
                    RowControls {
                        toggle_enabled: true,
                        title_editable: true,
                        edit_toggle: EditToggle::CancelEditing,
                        delete_enabled: false,
                    }
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_cancel_discards_draft() {
        ReducerTest::new(TaskRowReducer::new())
            .with_env(())
            .given_state(row())
            .when_actions([RowAction::StartEditing, draft("A2"), RowAction::CancelEditing])
            .then_state(|row| {
                assert_eq!(row.mode(), &EditMode::Viewing);
                assert_eq!(row.title(), "A");
                assert_eq!(row.displayed_title(), "A");
                assert!(!row.input_focused());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_submit_delegates_rename() {
        ReducerTest::new(TaskRowReducer::new())
            .with_env(())
            .given_state(row())
            .when_actions([RowAction::StartEditing, draft("A2"), RowAction::SubmitEditing])
            .then_state(|row| {
                assert_eq!(
                    row.mode(),
                    &EditMode::Submitting {
                        draft: "A2".to_string()
                    }
                );
                assert!(!row.input_focused());
                assert!(!row.controls().delete_enabled);
            })
            .then_effects(|effects| {
                assertions::assert_sends(
                    effects,
                    &[RowAction::Delegate(RowDelegate::EditTitle {
                        id: id(),
                        title: "A2".to_string(),
                    })],
                );
            })
            .run();
    }

    #[test]
    fn test_submission_finished_returns_to_viewing() {
        ReducerTest::new(TaskRowReducer::new())
            .with_env(())
            .given_state(row())
            .when_actions([
                RowAction::StartEditing,
                RowAction::SubmitEditing,
                RowAction::TitleChanged {
                    title: "A".to_string(),
                },
                RowAction::SubmissionFinished,
            ])
            .then_state(|row| {
                assert_eq!(row.mode(), &EditMode::Viewing);
                assert_eq!(row.title(), "A");
            })
            .run();
    }

    #[test]
    fn test_title_change_while_editing_keeps_draft() {
        ReducerTest::new(TaskRowReducer::new())
            .with_env(())
            .given_state(row())
            .when_actions([
                RowAction::StartEditing,
                draft("A2"),
                RowAction::TitleChanged {
                    title: "Z".to_string(),
                },
            ])
            .then_state(|row| {
                assert_eq!(row.title(), "Z");
                assert_eq!(row.draft(), Some("A2"));
            })
            .run();
    }

    #[test]
    fn test_out_of_order_actions_are_ignored() {
        ReducerTest::new(TaskRowReducer::new())
            .with_env(())
            .given_state(row())
            .when_actions([
                draft("typed while viewing"),
                RowAction::CancelEditing,
                RowAction::SubmitEditing,
                RowAction::SubmissionFinished,
            ])
            .then_state(|row| {
                assert_eq!(row, &TaskRow::new(id(), "A"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_start_editing_twice_keeps_draft() {
        ReducerTest::new(TaskRowReducer::new())
            .with_env(())
            .given_state(row())
            .when_actions([RowAction::StartEditing, draft("A2"), RowAction::StartEditing])
            .then_state(|row| {
                assert_eq!(row.draft(), Some("A2"));
            })
            .run();
    }
}
