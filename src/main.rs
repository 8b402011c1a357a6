//! # timing-report
//!
//! A CLI tool that aggregates per-category timing files into a summary
//! report. Each file in the input directory holds one `label value` record;
//! the report lists every category's accumulated time, a computed `Other`
//! bucket, and the grand total.
//!
//! ## Usage
//!
//! ```bash
//! # Read ./timings and print the report
//! timing-report
//!
//! # Read a different directory
//! timing-report /path/to/measurements
//!
//! # Emit the report as JSON for scripting
//! timing-report --json
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process::exit;
use timing_report::output::{self, JsonReport};
use timing_report::scan_timings;

/// Entry point for the timing-report application.
///
/// Delegates to [`inner_main`], printing any error to stderr and exiting
/// with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Scans the input directory, finishes the aggregate into a report, and
/// prints it. Nothing reaches stdout until the whole report is computed,
/// so a failed run produces no partial output.
///
/// # Errors
///
/// Returns errors from directory access, record parsing, the missing-total
/// check, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let report = scan_timings(&args.dir)?.into_report()?;

    if args.json {
        let json = JsonReport::from_report(&report);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print!("{}", output::render_text(&report));
    }

    Ok(())
}
