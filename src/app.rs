//! Application orchestration.
//!
//! Wires the parsed CLI options into an explicit [`AnalysisConfig`], runs
//! the engine once, and dispatches the finalized report to the console
//! table and the optional file exports.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use yansi::Paint;

use crate::cli::Cli;
use crate::duplicates::{AnalysisReport, AnalysisSummary, DuplicateFinder};
use crate::error::ExitCode;
use crate::logging;
use crate::output::{CsvOutput, JsonOutput, TableOutput};

/// Explicit configuration for one analysis run.
///
/// Everything the engine needs, resolved up front; the engine never reads
/// ambient process state. Help handling never reaches this point (clap
/// prints usage and exits first).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Input dump path.
    pub input_path: PathBuf,
    /// Optional CSV export destination.
    pub csv_path: Option<PathBuf>,
    /// Optional JSON export destination.
    pub json_path: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Resolve the recognized CLI options into a config value.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input_path: cli.file.clone(),
            csv_path: cli.output.clone(),
            json_path: cli.json.clone(),
        }
    }
}

/// Run the application logic after CLI parsing.
///
/// # Errors
///
/// Returns an error if the input cannot be read or an export destination
/// cannot be written; the caller maps that to a non-zero exit code.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    let config = AnalysisConfig::from_cli(&cli);
    run_with_config(&config)
}

/// Engine entry point: analyze the dump, then render and export.
///
/// # Errors
///
/// Fatal I/O errors only; zero shared groups is a success.
pub fn run_with_config(config: &AnalysisConfig) -> Result<ExitCode> {
    println!(
        "Analyzing NT password hash dump: {}\n",
        config.input_path.display()
    );

    let report = DuplicateFinder::new().find_in_file(&config.input_path)?;
    print_summary(&report.summary);

    if report.groups.is_empty() {
        println!(
            "\n{}",
            "No shared passwords detected. All accounts have unique password hashes.".green()
        );
        if config.csv_path.is_some() || config.json_path.is_some() {
            log::info!("Nothing to report, skipping export file(s)");
        }
        return Ok(ExitCode::Success);
    }

    println!(
        "\n{}\n",
        "Accounts sharing the same password (same NT hash detected):"
            .yellow()
            .bold()
    );
    TableOutput::new(&report.groups)
        .write_to(io::stdout().lock())
        .context("failed to render report table")?;

    if let Some(path) = &config.csv_path {
        write_csv(&report, path)?;
        println!("\nResults saved to {}", path.display());
    }
    if let Some(path) = &config.json_path {
        write_json(&report, path)?;
        println!("\nJSON report saved to {}", path.display());
    }

    Ok(ExitCode::Success)
}

fn print_summary(summary: &AnalysisSummary) {
    println!(
        "Parsed {} record(s) across {} account(s); skipped {} malformed line(s); found {} shared-password group(s).",
        summary.total_records,
        summary.unique_accounts,
        summary.malformed_lines,
        summary.shared_groups.bold(),
    );
}

fn write_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create CSV output file '{}'", path.display()))?;
    CsvOutput::new(&report.groups)
        .write_to(BufWriter::new(file))
        .with_context(|| format!("failed to write CSV report to '{}'", path.display()))?;
    log::info!("CSV report written to {}", path.display());
    Ok(())
}

fn write_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create JSON output file '{}'", path.display()))?;
    JsonOutput::new(&report.groups, &report.summary)
        .write_to(BufWriter::new(file))
        .with_context(|| format!("failed to write JSON report to '{}'", path.display()))?;
    log::info!("JSON report written to {}", path.display());
    Ok(())
}
