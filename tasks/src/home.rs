//! The home screen: the task list plus one edit session per rendered row.
//!
//! Rows are kept beside the list rather than inside it. After every list
//! action the rows are reconciled with the collection: new tasks get a row,
//! removed tasks lose theirs, and renamed tasks push their new title into the
//! row.
//!
//! While a prompt is open the rows are modal too: they cannot start editing,
//! change their draft or submit until the prompt is answered.

use crate::list::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
use crate::row::{RowAction, RowDelegate, TaskRow, TaskRowReducer};
use crate::types::TaskId;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tasklist_core::{effect::Effect, reducer::Reducer, SmallVec};

/// State of the home screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    /// The task list and its prompt
    pub list: TaskListState,
    rows: BTreeMap<TaskId, TaskRow>,
}

impl HomeState {
    /// An empty screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number shown in the header
    #[must_use]
    pub fn header_count(&self) -> usize {
        self.list.count()
    }

    /// The row for a task
    #[must_use]
    pub fn row(&self, id: TaskId) -> Option<&TaskRow> {
        self.rows.get(&id)
    }

    /// Rows in display order
    pub fn rows(&self) -> impl Iterator<Item = &TaskRow> {
        self.list
            .tasks
            .iter()
            .filter_map(|task| self.rows.get(&task.id))
    }

    /// Number of mounted rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Actions for the home screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeAction {
    /// An action for the task list
    List(TaskListAction),
    /// An action for one row
    Row {
        /// Task whose row receives the action
        id: TaskId,
        /// The row action
        action: RowAction,
    },
}

/// Reducer for the home screen
#[derive(Clone, Copy, Debug, Default)]
pub struct HomeReducer {
    list: TaskListReducer,
    row: TaskRowReducer,
}

impl HomeReducer {
    /// Creates a new `HomeReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: TaskListReducer::new(),
            row: TaskRowReducer::new(),
        }
    }

    fn reduce_list(
        &self,
        state: &mut HomeState,
        action: TaskListAction,
        env: &TaskListEnvironment,
    ) -> SmallVec<[Effect<HomeAction>; 4]> {
        if let TaskListAction::RequestRemoval { id } = &action {
            if state.row(*id).is_some_and(TaskRow::is_editing) {
                tracing::debug!(%id, "Removal ignored: row is being edited");
                return SmallVec::new();
            }
        }

        let before = state.list.tasks.clone();
        let mut effects: SmallVec<[Effect<HomeAction>; 4]> = self
            .list
            .reduce(&mut state.list, action, env)
            .into_iter()
            .map(|effect| effect.map(HomeAction::List))
            .collect();

        if !state.list.tasks.same_as(&before) {
            effects.extend(self.reconcile_rows(state));
        }

        effects
    }

    /// Brings the mounted rows in line with the collection
    fn reconcile_rows(&self, state: &mut HomeState) -> SmallVec<[Effect<HomeAction>; 4]> {
        let HomeState { list, rows } = state;
        let mut effects = SmallVec::new();

        rows.retain(|id, _| {
            let keep = list.tasks.contains(*id);
            if !keep {
                tracing::trace!(%id, "Unmounting row");
            }
            keep
        });

        for task in list.tasks.iter() {
            let id = task.id;
            let row = match rows.entry(id) {
                Entry::Vacant(entry) => {
                    tracing::trace!(%id, "Mounting row");
                    entry.insert(TaskRow::new(id, task.title.clone()));
                    continue;
                },
                Entry::Occupied(entry) => entry.into_mut(),
            };

            if row.title() != task.title {
                let changed = RowAction::TitleChanged {
                    title: task.title.clone(),
                };
                effects.extend(
                    self.row
                        .reduce(row, changed, &())
                        .into_iter()
                        .map(|effect| effect.map(move |action| HomeAction::Row { id, action })),
                );
            }
        }

        effects
    }

    fn reduce_row(
        &self,
        state: &mut HomeState,
        id: TaskId,
        action: RowAction,
        env: &TaskListEnvironment,
    ) -> SmallVec<[Effect<HomeAction>; 4]> {
        if let RowAction::Delegate(delegate) = action {
            return self.finish_submission(state, id, delegate, env);
        }

        let opens_or_feeds_draft = matches!(
            action,
            RowAction::StartEditing | RowAction::DraftChanged { .. } | RowAction::SubmitEditing
        );
        if opens_or_feeds_draft && state.list.prompt.is_some() {
            tracing::debug!(
                %id,
                action = action.action_name(),
                prompt = ?state.list.prompt,
                "Row action ignored while a prompt is open"
            );
            return SmallVec::new();
        }

        let Some(row) = state.rows.get_mut(&id) else {
            tracing::debug!(%id, action = action.action_name(), "Row action for unmounted row");
            return SmallVec::new();
        };
        let row_effects = self.row.reduce(row, action, &());

        let mut effects = SmallVec::new();
        for action in row_effects.into_iter().flat_map(Effect::into_actions) {
            match action {
                RowAction::Delegate(delegate) => {
                    effects.extend(self.finish_submission(state, id, delegate, env));
                },
                action => effects.push(Effect::Send(HomeAction::Row { id, action })),
            }
        }
        effects
    }

    /// Applies a row's delegated rename and returns the row to viewing
    ///
    /// Runs within the current action so the row cannot be left submitting.
    fn finish_submission(
        &self,
        state: &mut HomeState,
        id: TaskId,
        delegate: RowDelegate,
        env: &TaskListEnvironment,
    ) -> SmallVec<[Effect<HomeAction>; 4]> {
        let RowDelegate::EditTitle { id: task, title } = delegate;
        let mut effects =
            self.reduce_list(state, TaskListAction::EditTitle { id: task, title }, env);

        if let Some(row) = state.rows.get_mut(&id) {
            effects.extend(
                self.row
                    .reduce(row, RowAction::SubmissionFinished, &())
                    .into_iter()
                    .map(|effect| effect.map(move |action| HomeAction::Row { id, action })),
            );
        }

        effects
    }
}

impl Reducer for HomeReducer {
    type State = HomeState;
    type Action = HomeAction;
    type Environment = TaskListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            HomeAction::List(action) => self.reduce_list(state, action, env),
            HomeAction::Row { id, action } => self.reduce_row(state, id, action, env),
        }
    }
}
