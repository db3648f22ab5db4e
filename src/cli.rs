//! Command-line interface definitions for HashHound.
//!
//! This module defines all CLI arguments using the clap derive API. The tool
//! performs exactly one operation (analyze a dump for shared NT hashes), so
//! the surface is a single flat command rather than subcommands.
//!
//! # Example
//!
//! ```bash
//! # Analyze a dump and print the report table
//! hashhound -f hashes.txt
//!
//! # Also export the full report as CSV
//! hashhound -f hashes.txt -o results.csv
//!
//! # Verbose mode for debugging
//! hashhound -v -f hashes.txt
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Shared-password detector for NT hash dumps.
///
/// HashHound reads a credential dump in `username:RID:LM_hash:NT_hash:::`
/// format, groups accounts by identical NT hash, and reports every hash
/// shared by two or more accounts. Hashes are treated as opaque strings;
/// no cracking or recovery is attempted.
#[derive(Debug, Parser)]
#[command(name = "hashhound")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the NT hash dump file (one `username:RID:LM_hash:NT_hash:::` record per line)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Write the full report as CSV to this path
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the full report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Emit fatal errors as machine-readable JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_basic() {
        let cli = Cli::try_parse_from(["hashhound", "-f", "hashes.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("hashes.txt"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.json, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "hashhound",
            "--file",
            "dump.txt",
            "--output",
            "results.csv",
            "--json",
            "results.json",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("dump.txt"));
        assert_eq!(cli.output, Some(PathBuf::from("results.csv")));
        assert_eq!(cli.json, Some(PathBuf::from("results.json")));
    }

    #[test]
    fn test_cli_missing_file_is_error() {
        let result = Cli::try_parse_from(["hashhound"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_verbosity() {
        let cli = Cli::try_parse_from(["hashhound", "-vv", "-f", "dump.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["hashhound", "-v", "-q", "-f", "dump.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_help() {
        // --help causes an early exit, which is an error in try_parse_from
        let result = Cli::try_parse_from(["hashhound", "--help"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_json_errors_flag() {
        let cli = Cli::try_parse_from(["hashhound", "--json-errors", "-f", "dump.txt"]).unwrap();
        assert!(cli.json_errors);
    }
}
