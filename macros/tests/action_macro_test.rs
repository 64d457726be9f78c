//! Tests for #[derive(Action)] macro

use tasklist_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum ListAction {
    #[command]
    AddTask {
        title: String,
    },

    #[command]
    DismissPrompt,

    #[command]
    Rename(u64, String),

    #[event]
    TaskAdded {
        id: u64,
        title: String,
    },

    #[event]
    DoneToggled {
        id: u64,
        done: bool,
    },

    #[event]
    PromptDismissed,

    Forwarded(Box<ListAction>),
}

#[test]
fn test_is_command() {
    let action = ListAction::AddTask {
        title: "Buy milk".to_string(),
    };
    assert!(action.is_command());
    assert!(!action.is_event());
}

#[test]
fn test_is_event() {
    let action = ListAction::TaskAdded {
        id: 1,
        title: "Buy milk".to_string(),
    };
    assert!(!action.is_command());
    assert!(action.is_event());
}

#[test]
fn test_event_type() {
    let action = ListAction::DoneToggled { id: 1, done: true };
    assert_eq!(action.event_type(), "DoneToggled");
}

#[test]
fn test_command_event_type() {
    let action = ListAction::AddTask {
        title: "Buy milk".to_string(),
    };
    // Commands don't have event types
    assert_eq!(action.event_type(), "unknown");
}

#[test]
fn test_unit_and_tuple_variants() {
    assert!(ListAction::DismissPrompt.is_command());
    assert!(ListAction::Rename(1, "A2".to_string()).is_command());
    assert!(ListAction::PromptDismissed.is_event());
    assert_eq!(ListAction::PromptDismissed.event_type(), "PromptDismissed");
}

#[test]
fn test_unmarked_variant_is_neither() {
    let action = ListAction::Forwarded(Box::new(ListAction::DismissPrompt));
    assert!(!action.is_command());
    assert!(!action.is_event());
    assert_eq!(action.event_type(), "unknown");
}

#[test]
fn test_action_name_covers_every_variant() {
    let cases = vec![
        (
            ListAction::AddTask {
                title: "A".to_string(),
            },
            "AddTask",
        ),
        (ListAction::DismissPrompt, "DismissPrompt"),
        (ListAction::Rename(1, "A".to_string()), "Rename"),
        (
            ListAction::TaskAdded {
                id: 1,
                title: "A".to_string(),
            },
            "TaskAdded",
        ),
        (ListAction::DoneToggled { id: 1, done: false }, "DoneToggled"),
        (ListAction::PromptDismissed, "PromptDismissed"),
        (
            ListAction::Forwarded(Box::new(ListAction::PromptDismissed)),
            "Forwarded",
        ),
    ];

    for (action, expected) in cases {
        assert_eq!(action.action_name(), expected, "{action:?}");
    }
}
