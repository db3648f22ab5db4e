//! Output formatters for shared-password reports.
//!
//! This module provides the render targets for a finalized group list:
//! - A bordered console table with a member display cap
//! - CSV for spreadsheet import (member lists always complete)
//! - JSON for automation and scripting
//!
//! All formatters are pure consumers of the same pre-sorted slice; none of
//! them re-derives grouping, so row order always agrees across targets.

pub mod csv;
pub mod json;
pub mod table;

// Re-export main types
pub use csv::CsvOutput;
pub use json::JsonOutput;
pub use table::TableOutput;
