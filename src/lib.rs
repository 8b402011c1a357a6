//! Core library for the timing-report tool.
//!
//! Reads a flat directory of timing files, each holding one `label value`
//! record, sums the values per label, and produces a report with a computed
//! `Other` bucket (`total` minus the sum of all other labels).
//!
//! ## Main parts
//!
//! - [`scan_timings`] - Enumerate the directory and fold every file into an aggregate
//! - [`Aggregate`] - Per-label accumulated sums with a dedicated total
//! - [`Report`] - The finished result: ordered entries, `Other`, and the total
//! - [`output`] - Text rendering in the fixed report layout, plus JSON structures
//! - [`Error`] - One variant per way a run can fail

pub mod aggregate;
pub mod error;
pub mod output;
pub mod record;
pub mod scanner;

pub use aggregate::{Aggregate, Report, TOTAL_LABEL};
pub use error::Error;
pub use record::Record;
pub use scanner::scan_timings;
