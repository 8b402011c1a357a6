//! Accumulation of records and computation of the final report.
//!
//! The [`Aggregate`] folds records in one at a time, keeping the reserved
//! `total` label in a dedicated field instead of as a magic key in the
//! mapping. Non-total labels keep first-encounter order, which follows the
//! directory-listing order and is therefore deliberately unspecified.

use crate::error::Error;
use crate::record::Record;

/// The reserved label carrying the grand total.
pub const TOTAL_LABEL: &str = "total";

/// Per-label accumulated sums across all timing files.
///
/// Duplicate labels across files sum into a single entry. The `total` label
/// accumulates separately and never appears among the ordered entries.
#[derive(Debug, Default)]
pub struct Aggregate {
    /// Accumulated sum of all `total` records, if any were seen.
    total: Option<f64>,

    /// Non-total labels and their sums, in first-encounter order.
    ///
    /// A `Vec` with linear upsert: label counts are a handful per run, and
    /// no map in std keeps insertion order.
    entries: Vec<(String, f64)>,
}

impl Aggregate {
    /// Create an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the aggregate.
    ///
    /// `total` records accumulate into the dedicated total; any other label
    /// is summed into its existing entry or appended as a new one.
    pub fn add(&mut self, record: Record) {
        if record.label == TOTAL_LABEL {
            *self.total.get_or_insert(0.0) += record.value;
            return;
        }

        match self.entries.iter_mut().find(|(l, _)| *l == record.label) {
            Some((_, sum)) => *sum += record.value,
            None => self.entries.push((record.label, record.value)),
        }
    }

    /// Number of distinct non-total labels seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no record at all has been folded in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.total.is_none()
    }

    /// Finish accumulation and compute the report.
    ///
    /// `Other` is the total minus the sum of all non-total entries, printed
    /// as computed: it may be zero or negative when categories overrun the
    /// total, and that is not an error.
    ///
    /// # Errors
    ///
    /// [`Error::MissingTotal`] when no file ever supplied a `total` record
    /// (including the zero-files case).
    pub fn into_report(self) -> Result<Report, Error> {
        let total = self.total.ok_or(Error::MissingTotal)?;
        let attributed: f64 = self.entries.iter().map(|(_, v)| v).sum();

        Ok(Report {
            entries: self.entries,
            other: total - attributed,
            total,
        })
    }
}

/// The finished aggregation result, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Non-total labels and their accumulated sums, in encounter order.
    pub entries: Vec<(String, f64)>,

    /// Time not attributed to any listed label: `total - Σ entries`.
    pub other: f64,

    /// Accumulated sum of the reserved `total` label.
    pub total: f64,
}
