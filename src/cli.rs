//! Command-line interface definition and argument parsing.
//!
//! The baseline invocation takes no arguments and reads `./timings`. An
//! optional positional path overrides the input directory, and `--json`
//! swaps the text report for a machine-readable object.

use std::path::PathBuf;

use clap::Parser;

/// Aggregate per-category timing files into a summary report.
///
/// Each file in the input directory must contain exactly one record of the
/// form `<label> <value>` (e.g. `build 12.5`). Values for the same label
/// are summed across files. Exactly one label is reserved: `total`, the
/// grand total from which the `Other` remainder is computed.
#[derive(Debug, Parser)]
#[command(name = "timing-report", version, about)]
pub struct Cli {
    /// Directory containing one timing file per record
    ///
    /// Defaults to a `timings` directory next to the invocation location.
    #[arg(default_value = "timings")]
    pub dir: PathBuf,

    /// Print the report as a JSON object instead of the text table
    ///
    /// The object carries the ordered label entries, the computed Other
    /// value, and the total. Errors are still reported as text on stderr.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timing-report"]);

        assert_eq!(cli.dir, PathBuf::from("timings"));
        assert!(!cli.json);
    }

    #[test]
    fn test_directory_argument() {
        let cli = Cli::parse_from(["timing-report", "/tmp/measurements"]);

        assert_eq!(cli.dir, PathBuf::from("/tmp/measurements"));
    }

    #[test]
    fn test_json_flag() {
        let cli = Cli::parse_from(["timing-report", "--json"]);

        assert!(cli.json);
    }
}
