//! Line-level parsing of `<field> <level> <message>` log records.

use crate::models::{LogEntry, ParseFailure, ParseFailureReason};

/// Number of space-delimited fields in a well-formed line.
pub const FIELD_COUNT: usize = 3;

/// Parse one raw line into a [`LogEntry`].
///
/// The line is split on the literal space character into at most three
/// segments; the third absorbs the rest of the line verbatim. The first
/// segment (typically a timestamp) is ignored. Empty level or message
/// segments are accepted as they are.
///
/// ```
/// use analyzer_core::parser::parse_line;
///
/// let entry = parse_line("2024-01-01 ERROR disk  full").unwrap();
/// assert_eq!(entry.level, "ERROR");
/// assert_eq!(entry.message, "disk  full");
/// assert!(parse_line("bad line").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<LogEntry, ParseFailure> {
    let mut fields = line.splitn(FIELD_COUNT, ' ');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(_), Some(level), Some(message)) => Ok(LogEntry::new(level, message)),
        (first, second, _) => Err(ParseFailure {
            line: line.to_string(),
            reason: ParseFailureReason::TooFewFields {
                found: usize::from(first.is_some()) + usize::from(second.is_some()),
            },
        }),
    }
}
