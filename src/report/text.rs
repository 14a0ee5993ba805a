//! Console report.
//!
//! The report is split around the secret prompt: format warnings and the
//! backup confirmation come before it, everything else after.

use crate::backup::Backup;
use crate::records::ParseResult;
use crate::ui::UserInterface;

use super::RunReport;

/// Header shown above the disclosed records.
pub const RESULTS_TITLE: &str = "RESULTS";

/// Format warnings, then the backup confirmation.
pub fn render_preamble(parsed: &ParseResult, backup: &Backup, ui: &mut dyn UserInterface) {
    if !parsed.is_clean() {
        ui.warning("Format problems found:");
        for error in parsed.errors() {
            ui.warning(&format!("  - {}", error));
        }
        ui.message("Only valid lines will be loaded.");
        ui.message("");
    }
    ui.success(&format!("Backup created: {}", backup.path.display()));
}

/// Authorization result, disclosed records and totals.
pub fn render_results(report: &RunReport<'_>, ui: &mut dyn UserInterface) {
    if report.disclosure.outcome.is_authorized() {
        ui.success("Secret accepted.");
    } else {
        ui.warning("Wrong secret. Showing names only.");
    }

    ui.show_header(RESULTS_TITLE);
    for line in report.disclosure.view.lines() {
        ui.message(&line);
    }

    ui.message("");
    ui.message(&format!("Total valid lines: {}", report.parsed.record_count()));
    if !report.parsed.is_clean() {
        ui.message(&format!(
            "Total lines with format errors: {}",
            report.parsed.error_count()
        ));
    }
}
