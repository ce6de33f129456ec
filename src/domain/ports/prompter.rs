//! Prompter Port
//!
//! Interface for the interactive questions asked while collecting a
//! deployment. Implementations can be interactive (terminal) or scripted.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{PygridError, PygridResult};

/// Trait for asking the user questions.
///
/// Implementations:
/// - `DialoguerPrompter`: terminal prompts
/// - `ScriptedPrompter`: answers from a pre-recorded queue
pub trait Prompter {
    /// Free-text question. An empty answer yields `default` when one is given.
    fn input(&self, prompt: &str, default: Option<&str>) -> PygridResult<String>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> PygridResult<bool>;

    /// Pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> PygridResult<usize>;

    /// Hidden input (passwords).
    fn password(&self, prompt: &str) -> PygridResult<String>;
}

/// One pre-recorded answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text (input or password)
    Text(String),
    /// Yes/no
    Confirm(bool),
    /// Index into the offered items
    Select(usize),
    /// Accept whatever default the prompt offers
    Default,
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Answer::Text(s.into())
    }
}

/// Prompter that replays a queue of answers and records every prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Prompts asked so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> PygridResult<Answer> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| script_error(format!("no scripted answer for '{}'", prompt)))
    }
}

fn script_error(message: String) -> PygridError {
    PygridError::Prompt(dialoguer::Error::IO(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        message,
    )))
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> PygridResult<String> {
        match (self.next(prompt)?, default) {
            (Answer::Text(s), Some(d)) if s.is_empty() => Ok(d.to_string()),
            (Answer::Text(s), _) => Ok(s),
            (Answer::Default, Some(d)) => Ok(d.to_string()),
            (Answer::Default, None) => {
                Err(script_error(format!("'{}' has no default", prompt)))
            }
            (other, _) => Err(script_error(format!(
                "expected text for '{}', got {:?}",
                prompt, other
            ))),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> PygridResult<bool> {
        match self.next(prompt)? {
            Answer::Confirm(b) => Ok(b),
            Answer::Default => Ok(default),
            other => Err(script_error(format!(
                "expected yes/no for '{}', got {:?}",
                prompt, other
            ))),
        }
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> PygridResult<usize> {
        match self.next(prompt)? {
            Answer::Select(i) if i < items.len() => Ok(i),
            Answer::Default => Ok(default),
            other => Err(script_error(format!(
                "expected a choice among {} items for '{}', got {:?}",
                items.len(),
                prompt,
                other
            ))),
        }
    }

    fn password(&self, prompt: &str) -> PygridResult<String> {
        match self.next(prompt)? {
            Answer::Text(s) => Ok(s),
            other => Err(script_error(format!(
                "expected a password for '{}', got {:?}",
                prompt, other
            ))),
        }
    }
}
