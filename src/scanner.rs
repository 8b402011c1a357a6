//! Directory enumeration and the per-file read/parse loop.
//!
//! The input directory is flat: every entry is expected to be a regular
//! file holding one record. Files are processed strictly sequentially, each
//! one opened, fully read, and closed before the next, in whatever order
//! the OS yields the listing (not sorted).

use std::fs;
use std::path::Path;

use crate::aggregate::Aggregate;
use crate::error::Error;
use crate::record::Record;

/// Scan `dir` and fold every timing file into an [`Aggregate`].
///
/// The first failing entry aborts the scan; there is no per-file recovery.
///
/// # Errors
///
/// - [`Error::DirectoryAccess`] when `dir` is missing or unlistable.
/// - [`Error::NotAFile`] when an entry is not a regular file.
/// - [`Error::FileRead`] when a file's content cannot be read.
/// - [`Error::MalformedRecord`] / [`Error::ParseValue`] from record parsing.
pub fn scan_timings(dir: &Path) -> Result<Aggregate, Error> {
    let listing = fs::read_dir(dir).map_err(|source| Error::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut aggregate = Aggregate::new();

    for entry in listing {
        let entry = entry.map_err(|source| Error::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?;
        if !file_type.is_file() {
            return Err(Error::NotAFile { path });
        }

        let content = fs::read_to_string(&path).map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?;

        aggregate.add(Record::parse(&path, &content)?);
    }

    Ok(aggregate)
}
