//! Line classification for record files.

use tracing::debug;

use super::record::{ParseError, ParseErrorReason, Record, DELIMITER};

const BOM: char = '\u{feff}';

/// Records and rejected lines from one input, both in input order.
///
/// Built once by [`parse`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    records: Vec<Record>,
    errors: Vec<ParseError>,
}

impl ParseResult {
    /// Valid records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rejected lines.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Number of valid records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of rejected lines.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether every non-blank line was valid.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse raw file content into records and per-line errors.
///
/// Blank lines are skipped and do not advance the line number. Malformed
/// lines never abort parsing; they end up in [`ParseResult::errors`].
///
/// # Example
///
/// ```
/// use safeview::records::{parse, ParseErrorReason};
///
/// let result = parse("ana;123\n\nluis;456;789\n");
/// assert_eq!(result.record_count(), 1);
/// assert_eq!(result.errors()[0].line_number, 2);
/// assert_eq!(
///     result.errors()[0].reason,
///     ParseErrorReason::MalformedDelimiter { fields: 3 }
/// );
/// ```
pub fn parse(content: &str) -> ParseResult {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut result = ParseResult::default();

    let lines = content.lines().filter(|line| !line.trim().is_empty());
    for (index, line) in lines.enumerate() {
        match parse_line(line, index + 1) {
            Ok(record) => result.records.push(record),
            Err(err) => result.errors.push(err),
        }
    }

    debug!(
        records = result.records.len(),
        errors = result.errors.len(),
        "Parsed input"
    );
    result
}

/// Classify a single non-blank line.
pub fn parse_line(line: &str, line_number: usize) -> Result<Record, ParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [name, datum] = fields.as_slice() else {
        return Err(ParseError {
            line_number,
            reason: ParseErrorReason::MalformedDelimiter {
                fields: fields.len(),
            },
        });
    };

    Record::new(name, datum).ok_or(ParseError {
        line_number,
        reason: ParseErrorReason::EmptyField,
    })
}
