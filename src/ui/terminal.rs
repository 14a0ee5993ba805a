//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::secrets::SecretString;

use super::{read_masked, should_use_colors, OutputMode, SafeviewTheme, UserInterface};

/// Interactive terminal UI implementation.
///
/// The report goes to stdout; the secret prompt and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: SafeviewTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            SafeviewTheme::new()
        } else {
            SafeviewTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn read_secret(&mut self, question: &str) -> Result<SecretString> {
        read_masked(&self.err, question, &self.theme)
    }

    fn is_interactive(&self) -> bool {
        self.err.is_term()
    }
}
