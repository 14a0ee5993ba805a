//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage with masked secret entry
//! - [`NonInteractiveUI`] for piped stdin and CI
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use safeview::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_secret_response("letmein");
//!
//! let secret = ui.read_secret("Secret:").unwrap();
//! assert_eq!(secret.expose(), "letmein");
//! assert_eq!(ui.prompts_shown(), &["Secret:".to_string()]);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::{read_masked, MASK_CHAR};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, SafeviewTheme};

use std::io::IsTerminal;

use crate::error::Result;
use crate::secrets::SecretString;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Ask for a secret without echoing it.
    ///
    /// Blocks until Enter or end-of-input.
    fn read_secret(&mut self, question: &str) -> Result<SecretString>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Whether both stdin and stderr are attached to a terminal.
///
/// Masked key-by-key entry needs the terminal on both ends.
pub fn is_interactive_session() -> bool {
    std::io::stdin().is_terminal() && console::Term::stderr().is_term()
}

/// Create the UI for the current session.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
