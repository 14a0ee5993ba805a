//! View command implementation.
//!
//! Reads the record file, backs it up, asks for the secret and shows the
//! records the secret allows.

use std::io::Write;

use tracing::{debug, info};

use crate::backup::{create_backup, Clock, SystemClock};
use crate::config::Settings;
use crate::disclosure::DisclosureGate;
use crate::error::Result;
use crate::records::parse;
use crate::report::{render_preamble, render_results, JsonReport, ReportFormat, RunReport};
use crate::source::read_source;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Question shown at the secret prompt.
pub const SECRET_PROMPT: &str = "Enter the secret to see full records:";

/// The view command implementation.
pub struct ViewCommand {
    settings: Settings,
    clock: Box<dyn Clock>,
}

impl ViewCommand {
    /// Create a view command using the system clock for backup names.
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }

    /// Create a view command with an explicit clock.
    pub fn with_clock(settings: Settings, clock: impl Clock + 'static) -> Self {
        Self {
            settings,
            clock: Box::new(clock),
        }
    }
}

impl Command for ViewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = read_source(&self.settings.input)?;
        let parsed = parse(&source.text());
        info!(
            records = parsed.record_count(),
            errors = parsed.error_count(),
            "Input parsed"
        );

        let backup = create_backup(&source, self.clock.as_ref())?;

        if self.settings.format == ReportFormat::Text {
            render_preamble(&parsed, &backup, ui);
        }

        let entered = ui.read_secret(SECRET_PROMPT)?;
        let gate = DisclosureGate::new(self.settings.disclosure_config());
        let disclosure = gate.disclose(parsed.records(), entered.expose());
        drop(entered);

        let report = RunReport {
            input: &source.path,
            parsed: &parsed,
            backup: &backup,
            disclosure: &disclosure,
        };

        match self.settings.format {
            ReportFormat::Text => render_results(&report, ui),
            ReportFormat::Json => {
                let json = JsonReport::from_run(&report).to_json()?;
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", json)?;
            }
        }

        debug!("View complete");
        Ok(CommandResult::success())
    }
}
