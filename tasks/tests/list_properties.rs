//! Property tests for the task list reducer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use tasklist::{
    Prompt, TaskCollection, TaskId, TaskListAction, TaskListEnvironment, TaskListReducer,
    TaskListState,
};
use tasklist_core::reducer::Reducer;
use tasklist_testing::{test_clock, SequentialIdGenerator};

fn env() -> TaskListEnvironment {
    TaskListEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
}

fn id(n: u64) -> TaskId {
    TaskId::from_uuid(SequentialIdGenerator::nth(n))
}

fn reduce_all(
    state: &mut TaskListState,
    env: &TaskListEnvironment,
    actions: impl IntoIterator<Item = TaskListAction>,
) {
    for action in actions {
        let effects = TaskListReducer::new().reduce(state, action, env);
        assert!(effects.is_empty());
    }
}

fn with_titles(titles: &[String]) -> (TaskListState, TaskListEnvironment) {
    let env = env();
    let mut state = TaskListState::new();
    reduce_all(
        &mut state,
        &env,
        titles.iter().map(|title| TaskListAction::AddTask {
            title: title.clone(),
        }),
    );
    (state, env)
}

fn distinct_titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Za-z ]{0,12}", 1..12)
        .prop_map(|titles: BTreeSet<String>| titles.into_iter().collect())
}

proptest! {
    #[test]
    fn distinct_adds_append_in_order(titles in distinct_titles()) {
        let (state, _) = with_titles(&titles);

        prop_assert_eq!(state.count(), titles.len());
        prop_assert!(state.tasks.iter().all(|task| !task.done));
        prop_assert_eq!(state.titles(), titles.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(&state.prompt, &None);
    }

    #[test]
    fn duplicate_add_never_grows(titles in distinct_titles(), pick in any::<prop::sample::Index>()) {
        let (mut state, env) = with_titles(&titles);
        let before = state.tasks.clone();
        let taken = pick.get(&titles).clone();

        reduce_all(&mut state, &env, [TaskListAction::AddTask { title: taken.clone() }]);

        prop_assert_eq!(state.count(), titles.len());
        prop_assert!(state.tasks.same_as(&before));
        prop_assert_eq!(&state.prompt, &Some(Prompt::DuplicateTitle { title: taken }));
    }

    #[test]
    fn toggle_twice_restores(titles in distinct_titles(), pick in any::<prop::sample::Index>()) {
        let (mut state, env) = with_titles(&titles);
        let before = state.tasks.clone();
        let target = id(pick.index(titles.len()) as u64 + 1);

        reduce_all(
            &mut state,
            &env,
            [
                TaskListAction::ToggleDone { id: target },
                TaskListAction::ToggleDone { id: target },
            ],
        );

        prop_assert_eq!(&state.tasks, &before);
    }

    #[test]
    fn unknown_ids_change_nothing(titles in distinct_titles(), title in "[a-z]{0,8}") {
        let (mut state, env) = with_titles(&titles);
        let before: TaskCollection = state.tasks.clone();
        let missing = id(1_000);

        reduce_all(
            &mut state,
            &env,
            [
                TaskListAction::ToggleDone { id: missing },
                TaskListAction::EditTitle { id: missing, title },
                TaskListAction::RequestRemoval { id: missing },
                TaskListAction::ConfirmRemoval,
            ],
        );

        prop_assert!(state.tasks.same_as(&before));
        prop_assert_eq!(&state.prompt, &None);
    }

    #[test]
    fn removal_needs_a_yes(
        titles in distinct_titles(),
        pick in any::<prop::sample::Index>(),
        confirm in any::<bool>(),
    ) {
        let (mut state, env) = with_titles(&titles);
        let before = state.tasks.clone();
        let target = id(pick.index(titles.len()) as u64 + 1);

        reduce_all(&mut state, &env, [TaskListAction::RequestRemoval { id: target }]);
        prop_assert!(state.tasks.same_as(&before));

        let answer = if confirm {
            TaskListAction::ConfirmRemoval
        } else {
            TaskListAction::CancelRemoval
        };
        reduce_all(&mut state, &env, [answer]);

        prop_assert_eq!(&state.prompt, &None);
        if confirm {
            prop_assert_eq!(state.count(), titles.len() - 1);
            prop_assert!(state.get(target).is_none());
        } else {
            prop_assert_eq!(&state.tasks, &before);
        }
    }

    #[test]
    fn edit_changes_exactly_one_title(
        titles in distinct_titles(),
        pick in any::<prop::sample::Index>(),
        new_title in "[A-Za-z ]{0,12}",
    ) {
        let (mut state, env) = with_titles(&titles);
        let before = state.tasks.clone();
        let index = pick.index(titles.len());
        let target = id(index as u64 + 1);

        reduce_all(
            &mut state,
            &env,
            [TaskListAction::EditTitle { id: target, title: new_title.clone() }],
        );

        prop_assert_eq!(state.count(), before.len());
        for (i, (old, new)) in before.iter().zip(state.tasks.iter()).enumerate() {
            prop_assert_eq!(old.id, new.id);
            prop_assert_eq!(old.done, new.done);
            if i == index {
                prop_assert_eq!(&new.title, &new_title);
            } else {
                prop_assert_eq!(&old.title, &new.title);
            }
        }
    }
}
