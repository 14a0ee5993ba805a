//! Run report rendering.
//!
//! - [`text`] - Console report in a fixed order, through a [`crate::ui::UserInterface`]
//! - [`json`] - Single machine-readable document

pub mod json;
pub mod text;

pub use json::{JsonError, JsonReport};
pub use text::{render_preamble, render_results, RESULTS_TITLE};

use std::path::Path;

use clap::ValueEnum;

use crate::backup::Backup;
use crate::disclosure::Disclosure;
use crate::records::ParseResult;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable console report.
    #[default]
    Text,
    /// One JSON document on stdout.
    Json,
}

/// Everything a report needs about one run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    /// Input file that was read.
    pub input: &'a Path,
    /// Parsed contents.
    pub parsed: &'a ParseResult,
    /// Backup that was written.
    pub backup: &'a Backup,
    /// Authorization outcome and view.
    pub disclosure: &'a Disclosure,
}
