//! Line sources for the interactive loop

use super::error::ActionError;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use std::collections::VecDeque;

/// Producer of raw user input, one line at a time
pub trait LineSource {
    /// Next line, or `Ok(None)` when input is exhausted
    ///
    /// # Errors
    ///
    /// Returns `ActionError::Input` if reading fails.
    fn next_line(&mut self) -> Result<Option<String>, ActionError>;
}

/// Interactive prompt on the terminal
pub struct PromptInput {
    theme: ColorfulTheme,
    prompt: String,
}

impl PromptInput {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            prompt: prompt.into(),
        }
    }
}

impl Default for PromptInput {
    fn default() -> Self {
        Self::new("search")
    }
}

impl LineSource for PromptInput {
    fn next_line(&mut self) -> Result<Option<String>, ActionError> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(&self.prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ActionError::Input(e.to_string()))?;
        Ok(Some(line))
    }
}

/// Predetermined lines, for tests and piped input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn next_line(&mut self) -> Result<Option<String>, ActionError> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new(["tarte", ":quit"]);
        assert_eq!(input.next_line(), Ok(Some("tarte".to_string())));
        assert_eq!(input.next_line(), Ok(Some(":quit".to_string())));
        assert_eq!(input.next_line(), Ok(None));
    }
}
