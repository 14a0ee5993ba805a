//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It returns a pre-configured secret
//! when asked for one.
//!
//! # Example
//!
//! ```
//! use safeview::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("- ana");
//! ui.success("Backup created");
//!
//! assert!(ui.messages().contains(&"- ana".to_string()));
//! assert!(ui.has_success("Backup"));
//! ```

use std::collections::VecDeque;

use crate::error::{Result, SafeviewError};
use crate::secrets::SecretString;

use super::{OutputMode, UserInterface};

/// One captured line, tagged with how it was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    /// Plain message.
    Message(String),
    /// Success message.
    Success(String),
    /// Warning message.
    Warning(String),
    /// Error message.
    Error(String),
    /// Section header.
    Header(String),
    /// Secret prompt question.
    Prompt(String),
}

impl Shown {
    /// The captured text.
    pub fn text(&self) -> &str {
        match self {
            Self::Message(s)
            | Self::Success(s)
            | Self::Warning(s)
            | Self::Error(s)
            | Self::Header(s)
            | Self::Prompt(s) => s,
        }
    }
}

/// Mock UI implementation for testing.
///
/// Captures all UI interactions, both per kind and as one ordered
/// transcript, and answers secret prompts from a queue.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    transcript: Vec<Shown>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    prompts_shown: Vec<String>,
    secret_responses: VecDeque<String>,
    cancel_prompt: bool,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Queue the value returned by the next `read_secret`.
    ///
    /// With nothing queued, `read_secret` returns an empty secret.
    pub fn set_secret_response(&mut self, response: &str) {
        self.secret_responses.push_back(response.to_string());
    }

    /// Make `read_secret` fail as if the operator pressed Ctrl-C.
    pub fn cancel_prompt(&mut self) {
        self.cancel_prompt = true;
    }

    /// Everything shown, in order.
    pub fn transcript(&self) -> &[Shown] {
        &self.transcript
    }

    /// All captured text, in order, regardless of kind.
    pub fn lines(&self) -> Vec<&str> {
        self.transcript.iter().map(Shown::text).collect()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all prompts that were shown.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn record(&mut self, shown: Shown) {
        self.transcript.push(shown);
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
            self.record(Shown::Message(msg.to_string()));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
            self.record(Shown::Success(msg.to_string()));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.warnings.push(msg.to_string());
            self.record(Shown::Warning(msg.to_string()));
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record(Shown::Error(msg.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.headers.push(title.to_string());
            self.record(Shown::Header(title.to_string()));
        }
    }

    fn read_secret(&mut self, question: &str) -> Result<SecretString> {
        self.prompts_shown.push(question.to_string());
        self.record(Shown::Prompt(question.to_string()));

        if self.cancel_prompt {
            return Err(SafeviewError::PromptCancelled);
        }
        Ok(SecretString::new(
            self.secret_responses.pop_front().unwrap_or_default(),
        ))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_in_order() {
        let mut ui = MockUI::new();
        ui.warning("careful");
        ui.message("plain");
        ui.show_header("RESULTS");
        assert_eq!(ui.lines(), vec!["careful", "plain", "RESULTS"]);
        assert_eq!(ui.transcript()[2], Shown::Header("RESULTS".to_string()));
    }

    #[test]
    fn secret_responses_are_queued() {
        let mut ui = MockUI::new();
        ui.set_secret_response("first");
        ui.set_secret_response("second");
        assert_eq!(ui.read_secret("?").unwrap().expose(), "first");
        assert_eq!(ui.read_secret("?").unwrap().expose(), "second");
        assert_eq!(ui.read_secret("?").unwrap().expose(), "");
        assert_eq!(ui.prompts_shown().len(), 3);
    }

    #[test]
    fn cancelled_prompt_errors() {
        let mut ui = MockUI::new();
        ui.cancel_prompt();
        let err = ui.read_secret("?").unwrap_err();
        assert!(matches!(err, SafeviewError::PromptCancelled));
    }

    #[test]
    fn silent_mode_drops_status_but_keeps_errors() {
        let mut ui = MockUI::with_mode(OutputMode::Silent);
        ui.message("hidden");
        ui.success("hidden");
        ui.error("shown");
        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
        assert!(ui.has_error("shown"));
    }
}
