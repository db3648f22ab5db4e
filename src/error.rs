//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the HashHound application.
///
/// - 0: Success (analysis completed, whether or not shared hashes were found)
/// - 1: General error (input unreadable, export destination unwritable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Analysis completed normally. Finding zero shared-password
    /// groups is still a success.
    Success = 0,
    /// General error: An unexpected error occurred and no report was emitted.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "HH000",
            Self::GeneralError => "HH001",
        }
    }
}

/// Structured error information for JSON output on stderr.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "HH001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message, including context chain
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}
