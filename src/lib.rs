//! HashHound - Shared-Password Detector for NT Hash Dumps
//!
//! A Rust CLI application for security auditors that ingests a colon-delimited
//! credential dump (`username:RID:LM_hash:NT_hash:::`), groups accounts by
//! identical NT hash, and reports every hash shared by two or more accounts
//! as a console table, a CSV export, or a JSON export.

pub mod app;
pub mod cli;
pub mod dump;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;

pub use app::{run_app, AnalysisConfig};
