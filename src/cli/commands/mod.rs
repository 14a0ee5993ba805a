//! CLI command implementations.
//!
//! Commands implement the [`Command`] trait, which provides a uniform
//! interface for executing and reporting an exit code.

pub mod view;

pub use view::ViewCommand;

use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Fatal conditions are returned as errors instead.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}
