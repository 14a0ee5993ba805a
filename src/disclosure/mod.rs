//! Conditional disclosure of parsed records.
//!
//! The [`DisclosureGate`] compares an entered secret against the configured
//! one and produces a [`DisclosureView`]: full records when they match,
//! names only otherwise. A run gets exactly one view.

pub mod gate;
pub mod view;

pub use gate::{Disclosure, DisclosureConfig, DisclosureGate};
pub use view::{AuthOutcome, DisclosedEntry, DisclosureView};
