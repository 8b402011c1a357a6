//! Failure taxonomy for the aggregation pipeline.
//!
//! Every way a run can fail is a variant here, each carrying enough context
//! to name the offending file or token in its message. There is no recovery
//! path: the first error aborts the run before anything is written to stdout.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while scanning the timings directory and building the report.
#[derive(Debug, Error)]
pub enum Error {
    /// The input directory is missing or cannot be listed.
    #[error("cannot read timings directory {}: {source}", path.display())]
    DirectoryAccess {
        /// The directory that could not be accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory entry is not a regular file (subdirectory, symlink, ...).
    #[error("{} is not a regular file", path.display())]
    NotAFile {
        /// The offending entry.
        path: PathBuf,
    },

    /// A timing file exists but its content could not be read.
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file's content does not split into exactly two whitespace-separated tokens.
    #[error("{}: expected `<label> <value>`, found {tokens} token(s)", path.display())]
    MalformedRecord {
        /// The offending file.
        path: PathBuf,
        /// How many tokens the content actually split into.
        tokens: usize,
    },

    /// The value token of a record is not a valid floating-point literal.
    #[error("{}: `{token}` is not a number: {source}", path.display())]
    ParseValue {
        /// The offending file.
        path: PathBuf,
        /// The token that failed to parse.
        token: String,
        /// The underlying parse error.
        #[source]
        source: ParseFloatError,
    },

    /// No file supplied a `total` record, so `Other` cannot be computed.
    #[error("no timing file supplied a `total` record")]
    MissingTotal,
}
