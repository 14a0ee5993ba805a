//! Record file parsing.
//!
//! Input files hold one `name;datum` record per non-blank line. Parsing
//! never fails as a whole: each line becomes either a [`Record`] or a
//! [`ParseError`], collected in a [`ParseResult`].
//!
//! # Example
//!
//! ```
//! use safeview::records::{parse, ParseErrorReason};
//!
//! let result = parse(" ; \nluis;456");
//! assert_eq!(result.record_count(), 1);
//! assert_eq!(result.records()[0].name(), "luis");
//! assert_eq!(result.errors()[0].reason, ParseErrorReason::EmptyField);
//! ```

pub mod parser;
pub mod record;

pub use parser::{parse, parse_line, ParseResult};
pub use record::{ParseError, ParseErrorReason, Record, DELIMITER};
