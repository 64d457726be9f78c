//! # Tasklist
//!
//! A single-screen to-do list built on reducers.
//!
//! - [`list`]: the task collection's commands, events and removal prompt
//! - [`row`]: the inline rename session of one row
//! - [`home`]: the screen composing the list with its rows
//! - [`terminal`]: a text front end over the screen's store
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tasklist::{HomeAction, HomeReducer, HomeState, TaskListAction, TaskListEnvironment};
//! use tasklist_core::environment::{RandomIdGenerator, SystemClock};
//! use tasklist_runtime::Store;
//!
//! let env = TaskListEnvironment::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator));
//! let mut store = Store::new(HomeState::new(), HomeReducer::new(), env);
//!
//! store
//!     .send(HomeAction::List(TaskListAction::AddTask { title: "Buy milk".into() }))
//!     .unwrap();
//!
//! assert_eq!(store.state(HomeState::header_count), 1);
//! ```

pub mod collection;
pub mod home;
pub mod list;
pub mod messages;
pub mod row;
pub mod terminal;
pub mod types;

pub use collection::{TaskCollection, TaskListError};
pub use home::{HomeAction, HomeReducer, HomeState};
pub use list::{Prompt, TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
pub use messages::{Locale, Messages};
pub use row::{EditMode, RowAction, RowControls, RowDelegate, TaskRow, TaskRowReducer};
pub use terminal::{Command, Outcome, Terminal, TerminalError};
pub use types::{Task, TaskId};
