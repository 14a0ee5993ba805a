//! safeview - validate a record file and disclose it behind a secret.
//!
//! safeview reads a file of `name;datum` lines, reports malformed lines,
//! writes a timestamped backup next to the file, then asks for a secret.
//! The right secret shows full records; anything else shows names only.
//!
//! # Modules
//!
//! - [`backup`] - Timestamped, verified backups of the input file
//! - [`cli`] - Command-line interface and the view command
//! - [`config`] - Run settings resolved from arguments and environment
//! - [`disclosure`] - Secret check and full/names-only views
//! - [`error`] - Error types and result aliases
//! - [`records`] - Record file parsing
//! - [`report`] - Console and JSON reports
//! - [`secrets`] - Secret wrapper and constant-time comparison
//! - [`source`] - Input file loading
//! - [`ui`] - Console output and masked secret entry
//!
//! # Example
//!
//! ```
//! use safeview::disclosure::{DisclosureConfig, DisclosureGate};
//! use safeview::records::parse;
//!
//! let parsed = parse("ana;123\nluis;456\nbroken;line;here");
//! assert_eq!(parsed.record_count(), 2);
//! assert_eq!(parsed.error_count(), 1);
//!
//! let gate = DisclosureGate::new(DisclosureConfig::with_secret("pw"));
//! let shown = gate.disclose(parsed.records(), "guess");
//! assert_eq!(shown.view.lines(), vec!["- ana", "- luis"]);
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod records;
pub mod report;
pub mod secrets;
pub mod source;
pub mod ui;

pub use error::{Result, SafeviewError};
