//! Terminal Prompter
//!
//! Asks questions on the terminal through `dialoguer`.

use dialoguer::theme::{SimpleTheme, Theme};
use dialoguer::{Confirm, Input, Password, Select};

use crate::domain::ports::Prompter;
use crate::error::PygridResult;

/// Interactive prompter using dialoguer.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new(Box::new(SimpleTheme))
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> PygridResult<String> {
        let mut input = Input::<String>::with_theme(self.theme.as_ref()).with_prompt(prompt);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        Ok(input.interact_text()?.trim().to_string())
    }

    fn confirm(&self, prompt: &str, default: bool) -> PygridResult<bool> {
        Ok(Confirm::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> PygridResult<usize> {
        Ok(Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn password(&self, prompt: &str) -> PygridResult<String> {
        Ok(Password::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?)
    }
}
