//! Non-interactive UI for piped input and CI.

use std::io::{self, BufRead, BufReader};

use crate::error::Result;
use crate::secrets::SecretString;

use super::prompts::read_line_secret;
use super::theme::SafeviewTheme;
use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Output is plain text. The secret is read as a single line from stdin
/// (or an injected reader), so it can be piped in.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SafeviewTheme,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(BufReader::new(io::stdin())))
    }

    /// Create with an explicit input source (for testing).
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self {
            mode,
            theme: SafeviewTheme::plain(),
            input,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}", self.theme.format_header(title));
        }
    }

    fn read_secret(&mut self, question: &str) -> Result<SecretString> {
        eprintln!("{}", question);
        read_line_secret(self.input.as_mut())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
