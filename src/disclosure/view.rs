//! Rendered views of parsed records.

use serde::Serialize;

use crate::records::Record;

/// Result of checking an entered secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Entered secret matched the configured one.
    Authorized,
    /// Anything else, including when no secret is configured.
    Unauthorized,
}

impl AuthOutcome {
    /// Whether full records may be shown.
    pub fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

impl From<bool> for AuthOutcome {
    fn from(authorized: bool) -> Self {
        if authorized {
            Self::Authorized
        } else {
            Self::Unauthorized
        }
    }
}

impl From<AuthOutcome> for bool {
    fn from(outcome: AuthOutcome) -> Self {
        outcome.is_authorized()
    }
}

/// One disclosed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosedEntry {
    /// Record name, always visible.
    pub name: String,
    /// Record datum, present only in a full view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datum: Option<String>,
}

/// The authorized representation of records for one run.
///
/// A `NamesOnly` view is built without ever copying a datum, so nothing
/// downstream of it can print one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureView {
    /// Name and datum per record.
    Full(Vec<(String, String)>),
    /// Name per record.
    NamesOnly(Vec<String>),
}

impl DisclosureView {
    /// Build the view matching `outcome`.
    pub fn build(records: &[Record], outcome: AuthOutcome) -> Self {
        match outcome {
            AuthOutcome::Authorized => Self::Full(
                records
                    .iter()
                    .map(|r| (r.name().to_string(), r.datum().to_string()))
                    .collect(),
            ),
            AuthOutcome::Unauthorized => {
                Self::NamesOnly(records.iter().map(|r| r.name().to_string()).collect())
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Full(entries) => entries.len(),
            Self::NamesOnly(names) => names.len(),
        }
    }

    /// Whether the view has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether data values are included.
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    /// Console lines, one per entry: `- name | datum` or `- name`.
    ///
    /// # Example
    ///
    /// ```
    /// use safeview::disclosure::{AuthOutcome, DisclosureView};
    /// use safeview::records::parse;
    ///
    /// let parsed = parse("ana;123\nluis;456");
    /// let view = DisclosureView::build(parsed.records(), AuthOutcome::Unauthorized);
    /// assert_eq!(view.lines(), vec!["- ana", "- luis"]);
    ///
    /// let view = DisclosureView::build(parsed.records(), AuthOutcome::Authorized);
    /// assert_eq!(view.lines(), vec!["- ana | 123", "- luis | 456"]);
    /// ```
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Full(entries) => entries
                .iter()
                .map(|(name, datum)| format!("- {} | {}", name, datum))
                .collect(),
            Self::NamesOnly(names) => names.iter().map(|name| format!("- {}", name)).collect(),
        }
    }

    /// Entries in serializable form.
    pub fn entries(&self) -> Vec<DisclosedEntry> {
        match self {
            Self::Full(entries) => entries
                .iter()
                .map(|(name, datum)| DisclosedEntry {
                    name: name.clone(),
                    datum: Some(datum.clone()),
                })
                .collect(),
            Self::NamesOnly(names) => names
                .iter()
                .map(|name| DisclosedEntry {
                    name: name.clone(),
                    datum: None,
                })
                .collect(),
        }
    }
}
