//! Record and parse-error types.

use std::fmt;

/// Field separator inside a record line.
pub const DELIMITER: char = ';';

/// One valid `name;datum` line.
///
/// Both fields are trimmed and non-empty; the only constructor enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    datum: String,
}

impl Record {
    /// Build a record from raw fields, trimming both.
    ///
    /// Returns `None` if either field is empty after trimming.
    ///
    /// # Example
    ///
    /// ```
    /// use safeview::records::Record;
    ///
    /// let record = Record::new("  ana ", "123").unwrap();
    /// assert_eq!(record.name(), "ana");
    /// assert_eq!(record.datum(), "123");
    ///
    /// assert!(Record::new("ana", "   ").is_none());
    /// ```
    pub fn new(name: &str, datum: &str) -> Option<Self> {
        let name = name.trim();
        let datum = datum.trim();
        if name.is_empty() || datum.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            datum: datum.to_string(),
        })
    }

    /// The record's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record's associated datum.
    pub fn datum(&self) -> &str {
        &self.datum
    }
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorReason {
    /// Splitting on the delimiter did not give exactly two fields.
    MalformedDelimiter {
        /// Number of fields actually found.
        fields: usize,
    },
    /// One or both fields were empty after trimming.
    EmptyField,
}

impl ParseErrorReason {
    /// Stable identifier used in machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedDelimiter { .. } => "malformed_delimiter",
            Self::EmptyField => "empty_field",
        }
    }
}

impl fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDelimiter { fields } => write!(
                f,
                "invalid format (expected \"name{}datum\", found {} fields)",
                DELIMITER, fields
            ),
            Self::EmptyField => write!(f, "empty field"),
        }
    }
}

/// A rejected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based position among non-blank lines.
    pub line_number: usize,
    /// Why the line was rejected.
    pub reason: ParseErrorReason,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.reason)
    }
}
