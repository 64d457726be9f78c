//! Line-oriented front end for the home screen.
//!
//! Each input line is parsed into a [`Command`], translated into a
//! [`HomeAction`] and sent to the store. Rows are addressed by their 1-based
//! position on screen.

use crate::home::{HomeAction, HomeReducer, HomeState};
use crate::list::{TaskListAction, TaskListEnvironment};
use crate::messages::Messages;
use crate::row::{RowAction, TaskRow};
use crate::types::TaskId;
use std::fmt::Write as _;
use std::str::FromStr;
use tasklist_runtime::{Store, StoreConfig, StoreError};
use thiserror::Error;

/// The store driving the home screen
pub type HomeStore = Store<HomeState, HomeAction, TaskListEnvironment, HomeReducer>;

/// Usage text for the `help` command
pub const HELP: &str = "\
commands:
  add <title>        add a task
  toggle <n>         mark row n done or not done
  edit <n>           start renaming row n
  draft <n> <text>   replace the draft of row n
  submit <n>         save the draft of row n
  cancel <n>         discard the draft of row n
  rm <n>             remove row n (asks for confirmation)
  yes | no           answer the removal prompt
  ok                 close the open prompt
  list               show the screen
  help               show this text
  quit               exit";

/// Errors from parsing or executing a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerminalError {
    /// The first word is not a known command
    #[error("unknown command {0:?}; type \"help\" for a list")]
    UnknownCommand(String),

    /// A required argument was not given
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What is missing
        argument: &'static str,
    },

    /// A row argument is not a positive number
    #[error("{0:?} is not a row number")]
    InvalidRow(String),

    /// No row is shown at this position
    #[error("there is no row {0}")]
    NoSuchRow(usize),

    /// The store rejected the action
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <title>`; everything after the first space is the title
    Add(String),
    /// `toggle <n>`
    Toggle(usize),
    /// `edit <n>`
    Edit(usize),
    /// `draft <n> <text>`
    Draft(usize, String),
    /// `submit <n>`
    Submit(usize),
    /// `cancel <n>`
    Cancel(usize),
    /// `rm <n>`
    Remove(usize),
    /// `yes`
    Yes,
    /// `no`
    No,
    /// `ok`
    Dismiss,
    /// `list`
    List,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

fn parse_row(argument: Option<&str>, command: &'static str) -> Result<usize, TerminalError> {
    let argument = argument
        .map(str::trim)
        .filter(|argument| !argument.is_empty())
        .ok_or(TerminalError::MissingArgument {
            command,
            argument: "row number",
        })?;

    match argument.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TerminalError::InvalidRow(argument.to_string())),
    }
}

impl FromStr for Command {
    type Err = TerminalError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (name, argument) = match line.split_once(' ') {
            Some((name, argument)) => (name, Some(argument)),
            None => (line.trim_end(), None),
        };

        match name.to_ascii_lowercase().as_str() {
            "add" => argument.map(|title| Self::Add(title.to_string())).ok_or(
                TerminalError::MissingArgument {
                    command: "add",
                    argument: "title",
                },
            ),
            "toggle" => parse_row(argument, "toggle").map(Self::Toggle),
            "edit" => parse_row(argument, "edit").map(Self::Edit),
            "draft" => {
                let (row, text) = match argument.map(str::trim_start) {
                    Some(argument) => match argument.split_once(' ') {
                        Some((row, text)) => (Some(row), Some(text)),
                        None => (Some(argument), None),
                    },
                    None => (None, None),
                };
                let row = parse_row(row, "draft")?;
                let text = text.ok_or(TerminalError::MissingArgument {
                    command: "draft",
                    argument: "text",
                })?;
                Ok(Self::Draft(row, text.to_string()))
            },
            "submit" => parse_row(argument, "submit").map(Self::Submit),
            "cancel" => parse_row(argument, "cancel").map(Self::Cancel),
            "rm" | "remove" => parse_row(argument, "rm").map(Self::Remove),
            "yes" | "sim" => Ok(Self::Yes),
            "no" | "não" | "nao" => Ok(Self::No),
            "ok" => Ok(Self::Dismiss),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(TerminalError::UnknownCommand(name.to_string())),
        }
    }
}

/// What the caller should do after a command ran
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the screen
    Render,
    /// Print [`HELP`]
    Help,
    /// Stop reading input
    Quit,
}

/// The home screen behind a text interface
pub struct Terminal {
    store: HomeStore,
    messages: Messages,
}

impl Terminal {
    /// An empty screen using the default store configuration
    #[must_use]
    pub fn new(environment: TaskListEnvironment, messages: Messages) -> Self {
        Self::with_config(environment, messages, StoreConfig::default())
    }

    /// An empty screen with a custom store configuration
    #[must_use]
    pub fn with_config(
        environment: TaskListEnvironment,
        messages: Messages,
        config: StoreConfig,
    ) -> Self {
        let store = Store::with_config(HomeState::new(), HomeReducer::new(), environment, config);
        Self { store, messages }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &HomeStore {
        &self.store
    }

    /// Runs one command
    ///
    /// # Errors
    ///
    /// - [`TerminalError::NoSuchRow`] if a row number is past the last row
    /// - [`TerminalError::Store`] if the store rejects the resulting action
    pub fn execute(&mut self, command: Command) -> Result<Outcome, TerminalError> {
        let action = match command {
            Command::Add(title) => HomeAction::List(TaskListAction::AddTask { title }),
            Command::Toggle(n) => HomeAction::List(TaskListAction::ToggleDone {
                id: self.row_id(n)?,
            }),
            Command::Edit(n) => self.row_action(n, RowAction::StartEditing)?,
            Command::Draft(n, text) => self.row_action(n, RowAction::DraftChanged { text })?,
            Command::Submit(n) => self.row_action(n, RowAction::SubmitEditing)?,
            Command::Cancel(n) => self.row_action(n, RowAction::CancelEditing)?,
            Command::Remove(n) => HomeAction::List(TaskListAction::RequestRemoval {
                id: self.row_id(n)?,
            }),
            Command::Yes => HomeAction::List(TaskListAction::ConfirmRemoval),
            Command::No => HomeAction::List(TaskListAction::CancelRemoval),
            Command::Dismiss => HomeAction::List(TaskListAction::DismissPrompt),
            Command::List => return Ok(Outcome::Render),
            Command::Help => return Ok(Outcome::Help),
            Command::Quit => return Ok(Outcome::Quit),
        };

        self.store.send(action)?;
        Ok(Outcome::Render)
    }

    /// Draws the screen: header, numbered rows, then the open prompt
    ///
    /// Rows being edited show their draft followed by a pencil.
    #[must_use]
    pub fn render(&self) -> String {
        self.store.state(|state| {
            let mut out = self.messages.header(state.header_count());
            out.push('\n');

            for (n, row) in state.rows().enumerate() {
                let done = state.list.get(row.task_id()).is_some_and(|task| task.done);
                let _ = write!(
                    out,
                    "\n{:>3}. [{}] {}",
                    n + 1,
                    if done { 'x' } else { ' ' },
                    row.displayed_title()
                );
                if row.is_editing() {
                    out.push_str(" ✎");
                }
            }

            if let Some(prompt) = &state.list.prompt {
                let text = self.messages.prompt(prompt);
                let _ = write!(out, "\n\n{}\n{}\n", text.title, text.body);
                let choices: Vec<String> = text
                    .choices
                    .iter()
                    .map(|choice| format!("[{choice}]"))
                    .collect();
                out.push_str(&choices.join(" "));
            }

            out
        })
    }

    fn row_id(&self, n: usize) -> Result<TaskId, TerminalError> {
        self.store
            .state(|state| {
                state
                    .rows()
                    .nth(n.saturating_sub(1))
                    .map(TaskRow::task_id)
            })
            .ok_or(TerminalError::NoSuchRow(n))
    }

    fn row_action(&self, n: usize, action: RowAction) -> Result<HomeAction, TerminalError> {
        Ok(HomeAction::Row {
            id: self.row_id(n)?,
            action,
        })
    }
}
