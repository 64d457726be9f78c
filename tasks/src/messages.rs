//! User-facing strings.
//!
//! Portuguese is the screen's native language; English is provided for the
//! terminal front end.

use crate::list::Prompt;
use std::str::FromStr;
use thiserror::Error;

/// Display language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// Brazilian Portuguese
    #[default]
    Portuguese,
    /// English
    English,
}

/// Returned when a locale name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale {0:?} (expected \"pt\" or \"en\")")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" => Ok(Self::Portuguese),
            "en" | "en-us" | "en_us" => Ok(Self::English),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// A modal prompt ready for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptText {
    /// First line
    pub title: &'static str,
    /// Second line
    pub body: &'static str,
    /// Button labels, in display order
    pub choices: &'static [&'static str],
}

/// The string table for one locale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// String table for `locale`
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Text for a prompt
    ///
    /// Removal prompts list the negative choice first.
    #[must_use]
    pub fn prompt(&self, prompt: &Prompt) -> PromptText {
        match (prompt, self.locale) {
            (Prompt::DuplicateTitle { .. }, Locale::Portuguese) => PromptText {
                title: "Task já cadastrada",
                body: "Você não pode cadastrar uma task com o mesmo nome",
                choices: &["OK"],
            },
            (Prompt::DuplicateTitle { .. }, Locale::English) => PromptText {
                title: "Task already registered",
                body: "You cannot register a task with the same name",
                choices: &["OK"],
            },
            (Prompt::ConfirmRemoval { .. }, Locale::Portuguese) => PromptText {
                title: "Remover item",
                body: "Tem certeza que você deseja remover esse item?",
                choices: &["Não", "Sim"],
            },
            (Prompt::ConfirmRemoval { .. }, Locale::English) => PromptText {
                title: "Remove item",
                body: "Are you sure you want to remove this item?",
                choices: &["No", "Yes"],
            },
        }
    }

    /// Header line showing the live task count
    #[must_use]
    pub fn header(&self, count: usize) -> String {
        match (self.locale, count) {
            (Locale::Portuguese, 1) => "Você tem 1 tarefa".to_string(),
            (Locale::Portuguese, n) => format!("Você tem {n} tarefas"),
            (Locale::English, 1) => "You have 1 task".to_string(),
            (Locale::English, n) => format!("You have {n} tasks"),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
