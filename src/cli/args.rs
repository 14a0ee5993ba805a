//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_INPUT, DEFAULT_SECRET_ENV};
use crate::report::ReportFormat;

/// Validate a `name;datum` record file, back it up, and show its contents
/// behind a secret.
#[derive(Debug, Parser)]
#[command(name = "safeview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Record file, one `name;datum` per line
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Environment variable holding the access secret
    #[arg(
        long,
        value_name = "NAME",
        env = "SAFEVIEW_SECRET_ENV",
        default_value = DEFAULT_SECRET_ENV
    )]
    pub secret_env: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
