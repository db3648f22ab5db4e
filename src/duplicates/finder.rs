//! Pipeline orchestration: parse a dump, group by hash, summarize.
//!
//! [`DuplicateFinder`] runs the whole analysis in one synchronous pass:
//! it drains the [`DumpReader`], counts and logs malformed lines, folds
//! well-formed records into a [`HashGrouper`], and finalizes the result
//! into sorted groups plus an [`AnalysisSummary`]. Renderers consume the
//! report afterwards; the finder performs no output of its own.
//!
//! # Example
//!
//! ```
//! use hashhound::duplicates::DuplicateFinder;
//!
//! let dump = "\
//! user1:1001:lm:202cb962ac59075b964b07152d234b70:::
//! user2:1002:lm:202cb962ac59075b964b07152d234b70:::
//! ";
//! let report = DuplicateFinder::new().find_in_source(dump.as_bytes()).unwrap();
//! assert_eq!(report.groups.len(), 1);
//! assert_eq!(report.summary.total_records, 2);
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::dump::{DumpError, DumpReader};
use crate::duplicates::groups::{HashGroup, HashGrouper};

/// Errors that abort an analysis run.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The input file could not be opened.
    #[error("cannot open dump file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input failed partway through.
    #[error("failed while reading dump file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts surfaced in the final report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    /// Well-formed records parsed from the dump
    pub total_records: usize,
    /// Malformed lines skipped (wrong field count, empty username)
    pub malformed_lines: usize,
    /// Distinct usernames seen
    pub unique_accounts: usize,
    /// Distinct hash strings seen
    pub distinct_hashes: usize,
    /// Hashes shared by 2+ accounts
    pub shared_groups: usize,
    /// Accounts belonging to a shared group
    pub shared_accounts: usize,
}

/// Finalized result of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Shared-password groups, sorted by descending member count then
    /// ascending hash string. Read-only from here on.
    pub groups: Vec<HashGroup>,
    /// Parse and grouping counts for the summary line.
    pub summary: AnalysisSummary,
}

/// Single-pass duplicate hash finder.
#[derive(Debug, Default)]
pub struct DuplicateFinder;

impl DuplicateFinder {
    /// Create a finder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Analyze a dump file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] naming the path if the file cannot be opened
    /// or an I/O error interrupts the read. Malformed lines are not errors
    /// at this level; they are counted in the summary.
    pub fn find_in_file(&self, path: &Path) -> Result<AnalysisReport, FinderError> {
        let file = File::open(path).map_err(|source| FinderError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Analyzing dump file: {}", path.display());

        self.find_in_source(BufReader::new(file))
            .map_err(|source| FinderError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Analyze any buffered source.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] if reading fails; the run
    /// terminates without a partial report.
    pub fn find_in_source<R: BufRead>(&self, source: R) -> Result<AnalysisReport, io::Error> {
        let mut grouper = HashGrouper::new();
        let mut total_records = 0usize;
        let mut malformed_lines = 0usize;

        for item in DumpReader::new(source) {
            match item {
                Ok(record) => {
                    total_records += 1;
                    grouper.insert(record);
                }
                Err(DumpError::Io(err)) => return Err(err),
                Err(err) => {
                    malformed_lines += 1;
                    log::warn!("Skipping malformed line: {err}");
                }
            }
        }

        if malformed_lines > 0 {
            log::info!("Skipped {malformed_lines} malformed line(s)");
        }

        let (groups, stats) = grouper.finish();
        let summary = AnalysisSummary {
            total_records,
            malformed_lines,
            unique_accounts: stats.unique_accounts,
            distinct_hashes: stats.distinct_hashes,
            shared_groups: stats.shared_groups,
            shared_accounts: stats.shared_accounts,
        };

        Ok(AnalysisReport { groups, summary })
    }
}
