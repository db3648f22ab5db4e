//! Credential dump parsing.
//!
//! This module provides functionality for:
//! - Per-line record validation ([`Record`])
//! - Lazy iteration over a dump source ([`DumpReader`])
//! - The parse error taxonomy ([`DumpError`]), separating fatal I/O failures
//!   from recoverable malformed lines

pub mod reader;
pub mod record;

pub use reader::DumpReader;
pub use record::{DumpError, Record};
