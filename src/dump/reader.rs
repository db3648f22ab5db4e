//! Lazy line-by-line reader for credential dumps.
//!
//! [`DumpReader`] wraps any [`BufRead`] source and yields one
//! `Result<Record, DumpError>` per non-empty line. It is a finite,
//! non-restartable sequence: parsing happens on demand, nothing is
//! buffered beyond the current line, and the reader performs no side
//! effects other than consuming the source.

use std::io::{self, BufRead};

use crate::dump::record::{DumpError, Record};

/// Iterator over the records of a dump source.
///
/// Empty lines (after trimming) are skipped silently. Malformed lines are
/// yielded as recoverable errors carrying their 1-based line number so the
/// caller can count and report them without stopping.
///
/// # Example
///
/// ```
/// use hashhound::dump::DumpReader;
///
/// let dump = "admin:500:lm:5f4dcc3b5aa765d61d8327deb882cf99:::\n\nbroken-line\n";
/// let records: Vec<_> = DumpReader::new(dump.as_bytes()).collect();
///
/// assert_eq!(records.len(), 2); // the blank line is skipped
/// assert!(records[0].is_ok());
/// assert!(records[1].is_err());
/// ```
#[derive(Debug)]
pub struct DumpReader<R> {
    lines: io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> DumpReader<R> {
    /// Create a reader over a buffered source.
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = Result<Record, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => {
                    self.line_no += 1;
                    return Some(Err(DumpError::Io(err)));
                }
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(Record::parse(trimmed, self.line_no));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(dump: &str) -> Vec<Result<Record, DumpError>> {
        DumpReader::new(dump.as_bytes()).collect()
    }

    #[test]
    fn test_reads_records_in_order() {
        let dump = "a:1:lm:hash1:::\nb:2:lm:hash2:::\n";
        let parsed = records(dump);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].as_ref().unwrap().username, "a");
        assert_eq!(parsed[1].as_ref().unwrap().username, "b");
    }

    #[test]
    fn test_skips_empty_and_whitespace_lines() {
        let dump = "\n   \na:1:lm:hash:::\n\t\n";
        let parsed = records(dump);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].as_ref().unwrap().username, "a");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let dump = "  a:1:lm:hash:::  \n";
        let parsed = records(dump);
        assert_eq!(parsed[0].as_ref().unwrap().nt_hash, "hash");
    }

    #[test]
    fn test_line_numbers_account_for_skipped_lines() {
        let dump = "\n\nbroken\n";
        let parsed = records(dump);
        assert_eq!(parsed.len(), 1);
        match parsed[0].as_ref().unwrap_err() {
            DumpError::FieldCount { line, .. } => assert_eq!(*line, 3),
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_lines_do_not_stop_iteration() {
        let dump = "broken\nb:2:lm:hash2:::\nalso:broken\nc:3:lm:hash3:::\n";
        let parsed = records(dump);
        assert_eq!(parsed.len(), 4);
        assert!(parsed[0].is_err());
        assert!(parsed[1].is_ok());
        assert!(parsed[2].is_err());
        assert!(parsed[3].is_ok());
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        assert!(records("").is_empty());
    }

    #[test]
    fn test_missing_trailing_newline() {
        let parsed = records("a:1:lm:hash:::");
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].is_ok());
    }
}
