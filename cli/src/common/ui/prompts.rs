//! # Octopus CLI Interactive Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! The `Asker` trait is the single seam through which the CLI talks to a human.
//! A `ClientFactory` either owns an `Asker` (interactive mode) or owns none
//! (no-prompt mode: `CI` is set or `--no-prompt` was passed). Command handlers
//! ask the factory for its asker and skip prompting when there is none.
//!
//! - `TerminalAsker`: the real implementation, built on `dialoguer`.
//! - `testing::ScriptedAsker` (tests only): replays canned answers and records
//!   which questions were asked.
//!
//! Input validation rules (`InputQuestion`) live here rather than in the
//! terminal implementation so scripted answers are validated the same way.
//!
use crate::common::fs::io;
use crate::core::error::{OctoError, Result};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, MultiSelect, Password, Select};
use std::io::Write as _;
use tracing::debug;

/// A free-text question and the rules its answer must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputQuestion<'a> {
    pub message: &'a str,
    pub help: &'a str,
    pub required: bool,
    pub max_length: Option<usize>,
    /// The answer must name an existing file (after `~` expansion).
    pub existing_file: bool,
}

impl<'a> InputQuestion<'a> {
    pub fn new(message: &'a str, help: &'a str) -> Self {
        InputQuestion {
            message,
            help,
            required: false,
            max_length: None,
            existing_file: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn existing_file(mut self) -> Self {
        self.existing_file = true;
        self
    }

    /// Checks `answer` against this question's rules.
    pub fn validate(&self, answer: &str) -> std::result::Result<(), String> {
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err("Value is required".to_string())
            } else {
                Ok(())
            };
        }
        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(format!("Value is too long, max length is {max}"));
            }
        }
        if self.existing_file {
            io::ensure_existing_file(&io::expand_path(trimmed)).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

/// Interactive prompting capability.
pub trait Asker {
    /// Asks a free-text question; the answer satisfies `question.validate`.
    fn input(&self, question: &InputQuestion<'_>) -> Result<String>;
    /// Asks for a secret without echoing it. Empty answers are allowed.
    fn password(&self, message: &str, help: &str) -> Result<String>;
    /// Asks for optional long-form text. Returns an empty string when skipped.
    fn editor(&self, message: &str, help: &str, extension: &str) -> Result<String>;
    /// Single choice; returns the index into `items`.
    fn select(&self, message: &str, items: &[String]) -> Result<usize>;
    /// Any number of choices; returns indices into `items`.
    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>>;
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Asks the user to pick one of `items`, shown by `label`.
pub fn select_map<'a, T>(
    asker: &dyn Asker,
    message: &str,
    items: &'a [T],
    label: impl Fn(&T) -> String,
) -> Result<&'a T> {
    if items.is_empty() {
        return Err(OctoError::Prompt(format!("{message}: nothing to choose from")).into());
    }
    let labels: Vec<String> = items.iter().map(label).collect();
    let index = asker.select(message, &labels)?;
    items
        .get(index)
        .ok_or_else(|| OctoError::Prompt(format!("selection {index} is out of range")).into())
}

/// `Asker` backed by the terminal.
pub struct TerminalAsker {
    theme: ColorfulTheme,
}

impl TerminalAsker {
    pub fn new() -> Self {
        TerminalAsker {
            theme: ColorfulTheme::default(),
        }
    }

    fn show_help(&self, help: &str) -> Result<()> {
        write_help(&mut Term::stderr(), help)
    }
}

/// Writes `help` dimmed on its own line; nothing when it is empty.
fn write_help(out: &mut dyn std::io::Write, help: &str) -> Result<()> {
    if help.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", style(help).dim()).map_err(|e| OctoError::Prompt(e.to_string()))?;
    Ok(())
}

impl Default for TerminalAsker {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(e: dialoguer::Error) -> anyhow::Error {
    OctoError::Prompt(e.to_string()).into()
}

impl Asker for TerminalAsker {
    fn input(&self, question: &InputQuestion<'_>) -> Result<String> {
        self.show_help(question.help)?;
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(question.message)
            .allow_empty(!question.required)
            .validate_with(|input: &String| question.validate(input))
            .interact_text()
            .map_err(prompt_error)?;
        Ok(answer.trim().to_string())
    }

    fn password(&self, message: &str, help: &str) -> Result<String> {
        self.show_help(help)?;
        Password::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }

    fn editor(&self, message: &str, help: &str, extension: &str) -> Result<String> {
        self.show_help(help)?;
        let open = Confirm::with_theme(&self.theme)
            .with_prompt(format!("{message}: open an editor? (optional)"))
            .default(false)
            .interact()
            .map_err(prompt_error)?;
        if !open {
            return Ok(String::new());
        }
        let text = Editor::new()
            .extension(extension)
            .edit("")
            .map_err(|e| OctoError::Prompt(e.to_string()))?;
        Ok(text.unwrap_or_default().trim().to_string())
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }

    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>> {
        if items.is_empty() {
            debug!("Nothing to choose for '{}'", message);
            return Ok(Vec::new());
        }
        MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}
