//! CSV output formatter for shared-password reports.
//!
//! Provides machine-readable CSV output for spreadsheets and data analysis.
//! One row is generated per shared-password group, in the same order as the
//! console table.
//!
//! # Columns
//!
//! - `NT Hash`: the shared hash string, verbatim
//! - `Shared By (Count)`: number of accounts in the group
//! - `User Accounts`: the complete comma-joined member list, never
//!   truncated (the csv crate quotes the field since it contains commas)
//!
//! # Example
//!
//! ```
//! use hashhound::duplicates::HashGroup;
//! use hashhound::output::CsvOutput;
//!
//! let groups = vec![HashGroup::new(
//!     "202cb962ac59075b964b07152d234b70".to_string(),
//!     vec!["user1".to_string(), "user2".to_string()],
//! )];
//! let csv = CsvOutput::new(&groups).to_string().unwrap();
//! assert!(csv.starts_with("NT Hash,Shared By (Count),User Accounts"));
//! ```

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::duplicates::HashGroup;

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A single row in the CSV output.
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "NT Hash")]
    nt_hash: String,
    #[serde(rename = "Shared By (Count)")]
    shared_by: usize,
    #[serde(rename = "User Accounts")]
    user_accounts: String,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    groups: &'a [HashGroup],
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(groups: &'a [HashGroup]) -> Self {
        Self { groups }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        // Write the header ourselves so it appears even with zero rows.
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(["NT Hash", "Shared By (Count)", "User Accounts"])?;

        for group in self.groups {
            csv_writer.serialize(CsvRow {
                nt_hash: group.nt_hash.clone(),
                shared_by: group.len(),
                user_accounts: group.member_list(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
