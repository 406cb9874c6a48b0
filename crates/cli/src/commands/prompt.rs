use anyhow::Result;
use inquire::{Confirm, Select, Text};

/// Request/response seam between commands and the person at the terminal.
///
/// Commands and the editor wizard only ever need these three interactions,
/// so tests can drive them with a scripted implementation instead of a TTY.
pub trait Prompter {
    /// Ask for a line of text. `None` means the answer was left blank or the
    /// prompt was skipped.
    fn input(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Ask to pick one of `options`.
    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Production prompter backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Text::new(prompt).prompt_skippable()?;
        Ok(answer.map(|text| text.trim().to_string()).filter(|text| !text.is_empty()))
    }

    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<String> {
        let choice = Select::new(prompt, options.to_vec()).prompt()?;
        Ok(choice.to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new(prompt).with_default(false).prompt()?)
    }
}
