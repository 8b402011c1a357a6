//! Parsing of a single timing file into a [`Record`].
//!
//! A timing file holds exactly one record: a label and a floating-point
//! value separated by whitespace, e.g. `build 12.5`. Anything else is a
//! malformed record and fails the whole run.

use std::path::Path;

use crate::error::Error;

/// One parsed timing measurement: a category label and its value.
///
/// Records are ephemeral; they exist only between parsing a file and folding
/// the value into the [`Aggregate`](crate::Aggregate).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Category label (any token without embedded whitespace).
    pub label: String,

    /// Measured time for this category.
    pub value: f64,
}

impl Record {
    /// Parse the full content of one timing file.
    ///
    /// The content must split on whitespace into exactly two tokens; the
    /// second must parse as an `f64`. Leading and trailing whitespace
    /// (including a trailing newline) is tolerated.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedRecord`] if the token count is not exactly two.
    /// - [`Error::ParseValue`] if the second token is not numeric.
    pub fn parse(path: &Path, content: &str) -> Result<Self, Error> {
        let tokens: Vec<&str> = content.split_whitespace().collect();

        let [label, value] = tokens.as_slice() else {
            return Err(Error::MalformedRecord {
                path: path.to_path_buf(),
                tokens: tokens.len(),
            });
        };

        let value: f64 = value.parse().map_err(|source| Error::ParseValue {
            path: path.to_path_buf(),
            token: (*value).to_string(),
            source,
        })?;

        Ok(Self {
            label: (*label).to_string(),
            value,
        })
    }
}
