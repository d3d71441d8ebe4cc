//! Input parsers for harness CAD exports.

use std::path::Path;

use crate::error::Result;
use crate::lookup::WireLookup;
use crate::model::{FromToRow, IssueLog};

mod rapidharness;

pub use rapidharness::{parse_rapidharness_file, RapidHarnessParser};

/// A parser for one harness CAD export format.
///
/// Implementations read a source workbook and produce the intermediate
/// connection rows, resolving wires against the lookup table as they go.
/// Recoverable findings land in `issues`; only conditions that make the
/// whole input unusable are returned as errors. Supporting another CAD
/// format means adding an implementation, not branching on file type.
pub trait InputParser {
    /// Short name of the source format, for log output.
    fn format_name(&self) -> &'static str;

    /// Parse an input workbook into connection rows.
    fn parse(
        &self,
        input: &Path,
        wires: &WireLookup,
        issues: &mut IssueLog,
    ) -> Result<Vec<FromToRow>>;
}
