//! Single-line record validation for credential dumps.
//!
//! A well-formed dump line looks like:
//!
//! ```text
//! username:RID:LM_hash:NT_hash:::
//! ```
//!
//! The two trailing fields are conventionally empty and never validated.
//! Only the username and the NT hash participate in duplicate detection;
//! the RID and LM hash are carried as opaque strings and ignored.

use std::io;
use thiserror::Error;

/// Errors produced while reading and validating a dump.
///
/// Malformed lines are recoverable: the caller skips the line, counts it,
/// and keeps reading. An I/O failure is terminal for the whole run.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Reading the underlying source failed.
    #[error("I/O error while reading dump: {0}")]
    Io(#[from] io::Error),

    /// The line does not split into enough colon-delimited fields.
    #[error("line {line}: expected at least 4 colon-delimited fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// The username field is empty after trimming.
    #[error("line {line}: record has an empty username")]
    EmptyUsername { line: usize },
}

impl DumpError {
    /// Whether this error must abort the run (I/O) or can be skipped
    /// (malformed line).
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// One parsed dump line.
///
/// Constructed per line during parsing and folded into the grouping
/// structure immediately; only `username` and `nt_hash` survive grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Account identifier (field 1). Never empty.
    pub username: String,
    /// Relative identifier (field 2). Opaque, unused in grouping.
    pub rid: String,
    /// LM hash (field 3). Opaque, unused in grouping.
    pub lm_hash: String,
    /// NT hash (field 4). The grouping key, compared byte-for-byte with
    /// case preserved. No length or charset validation is imposed, so the
    /// tool also works on dumps carrying differently-sized hash strings.
    pub nt_hash: String,
}

impl Record {
    /// Validate and extract a record from a trimmed, non-empty dump line.
    ///
    /// `line_no` is the 1-based line number, carried into errors so that
    /// malformed lines can be reported by position.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::FieldCount`] if the line has fewer than 4
    /// colon-delimited fields, or [`DumpError::EmptyUsername`] if field 1
    /// is empty after trimming.
    ///
    /// # Example
    ///
    /// ```
    /// use hashhound::dump::Record;
    ///
    /// let record = Record::parse(
    ///     "admin:500:aad3b435b51404eeaad3b435b51404ee:5f4dcc3b5aa765d61d8327deb882cf99:::",
    ///     1,
    /// )
    /// .unwrap();
    /// assert_eq!(record.username, "admin");
    /// assert_eq!(record.nt_hash, "5f4dcc3b5aa765d61d8327deb882cf99");
    /// ```
    pub fn parse(line: &str, line_no: usize) -> Result<Self, DumpError> {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 4 {
            return Err(DumpError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let username = fields[0].trim();
        if username.is_empty() {
            return Err(DumpError::EmptyUsername { line: line_no });
        }

        Ok(Self {
            username: username.to_string(),
            rid: fields[1].to_string(),
            lm_hash: fields[2].to_string(),
            nt_hash: fields[3].to_string(),
        })
    }
}
