//! Report rendering: the fixed text format and the `--json` structures.
//!
//! The text layout is contractual and never styled: a separator line, one
//! line per non-total label in encounter order, the computed `Other` line,
//! another separator, and the `total` line. When `--json` is active the
//! whole report is emitted as a single serialized object instead.

use std::fmt::Write as _;

use serde::Serialize;

use crate::aggregate::Report;

/// Separator line framing the label section of the report.
const SEPARATOR: &str = "===========================";

/// Render the report in its fixed text layout.
///
/// The returned string ends with a newline and is printed to stdout in one
/// write, after all input has been read.
#[must_use]
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    // Infallible: fmt::Write on String never errors.
    let _ = writeln!(out, "{SEPARATOR}");
    for (label, value) in &report.entries {
        let _ = writeln!(out, "{label}: {}", format_value(*value));
    }
    let _ = writeln!(out, "Other: {}", format_value(report.other));
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "total: {}", format_value(report.total));

    out
}

/// Format a timing value for the report.
///
/// Uses `f64`'s `Display`, except that integral values keep one decimal
/// (`60` renders as `60.0`) so category lines always read as times.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Top-level JSON object emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Non-total labels and their accumulated sums, in encounter order.
    pub entries: Vec<JsonEntry>,

    /// Time not attributed to any listed label.
    pub other: f64,

    /// Accumulated grand total.
    pub total: f64,
}

/// One label line of the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonEntry {
    /// Category label.
    pub label: String,

    /// Accumulated sum for this label.
    pub value: f64,
}

impl JsonReport {
    /// Build a `JsonReport` from a finished [`Report`].
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            entries: report
                .entries
                .iter()
                .map(|(label, value)| JsonEntry {
                    label: label.clone(),
                    value: *value,
                })
                .collect(),
            other: report.other,
            total: report.total,
        }
    }
}
