//! JSON output formatter for shared-password reports.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "groups": [
//!     {
//!       "nt_hash": "202cb962ac59075b964b07152d234b70",
//!       "shared_by": 2,
//!       "members": ["user1", "user2"]
//!     }
//!   ],
//!   "summary": {
//!     "total_records": 3,
//!     "malformed_lines": 0,
//!     "unique_accounts": 3,
//!     "distinct_hashes": 2,
//!     "shared_groups": 1,
//!     "shared_accounts": 2
//!   }
//! }
//! ```
//!
//! Groups appear in the same order as the console table and the CSV export;
//! member lists are complete and never truncated.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::duplicates::{AnalysisSummary, HashGroup};

/// Errors that can occur during JSON output generation.
#[derive(Debug, Error)]
pub enum JsonOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during JSON serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single shared-password group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonHashGroup<'a> {
    /// The shared NT hash, verbatim
    pub nt_hash: &'a str,
    /// Number of accounts sharing it
    pub shared_by: usize,
    /// Full member list in first-seen dump order
    pub members: &'a [String],
}

impl<'a> JsonHashGroup<'a> {
    fn from_group(group: &'a HashGroup) -> Self {
        Self {
            nt_hash: &group.nt_hash,
            shared_by: group.len(),
            members: &group.members,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    groups: Vec<JsonHashGroup<'a>>,
    summary: &'a AnalysisSummary,
}

/// JSON output formatter.
pub struct JsonOutput<'a> {
    groups: &'a [HashGroup],
    summary: &'a AnalysisSummary,
}

impl<'a> JsonOutput<'a> {
    /// Create a new JSON output formatter.
    #[must_use]
    pub fn new(groups: &'a [HashGroup], summary: &'a AnalysisSummary) -> Self {
        Self { groups, summary }
    }

    fn document(&self) -> JsonDocument<'a> {
        JsonDocument {
            groups: self.groups.iter().map(JsonHashGroup::from_group).collect(),
            summary: self.summary,
        }
    }

    /// Generate compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `JsonOutputError` if serialization fails.
    pub fn to_json(&self) -> Result<String, JsonOutputError> {
        Ok(serde_json::to_string(&self.document())?)
    }

    /// Generate pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `JsonOutputError` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, JsonOutputError> {
        Ok(serde_json::to_string_pretty(&self.document())?)
    }

    /// Write pretty-printed JSON to the given writer, with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `JsonOutputError` if writing or serialization fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), JsonOutputError> {
        serde_json::to_writer_pretty(&mut writer, &self.document())?;
        writeln!(writer)?;
        Ok(())
    }
}
