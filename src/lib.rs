//! rh-convert-rs - Core library for RapidHarness to E3.series conversion.
//!
//! This library parses RapidHarness workbook exports, resolves wire and
//! device identifiers through user-supplied lookup tables, and produces the
//! From-To List workbook that Zuken E3.series imports.
//!
//! # Example
//!
//! ```no_run
//! use rh_convert_rs::{convert_rapidharness, generate_fromto, workbook, DeviceLookup, WireLookup};
//! use std::path::Path;
//!
//! let wires = WireLookup::load(Path::new("wire_map.csv")).unwrap();
//! let devices = DeviceLookup::load(Path::new("device_map.csv")).unwrap();
//! let conversion = convert_rapidharness(Path::new("harness.wbk"), &wires, &devices).unwrap();
//! let book = generate_fromto(&conversion.rows);
//! workbook::write_file(&book, Path::new("fromto.wbk")).unwrap();
//! ```

pub mod error;
pub mod generator;
pub mod lookup;
pub mod model;
pub mod parser;
pub mod transform;
pub mod workbook;

// Re-exports for convenience
pub use error::{ConvertError, Result};
pub use generator::{generate_fromto, write_issue_log, FROMTO_HEADERS, FROMTO_SHEET};
pub use lookup::{DeviceLookup, WireLookup};
pub use model::{Endpoint, FromToRow, Issue, IssueKind, IssueLog, Severity, WireSpec};
pub use parser::{parse_rapidharness_file, InputParser, RapidHarnessParser};
pub use transform::{apply_device_lookup, resolve_device_partnumbers, SPLICE_PN};

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct Conversion {
    /// Converted connection rows, one per source data row.
    pub rows: Vec<FromToRow>,
    /// Issues recorded across parsing and device resolution.
    pub issues: IssueLog,
}

/// Convert a RapidHarness export through the full pipeline.
///
/// Parses the input workbook, resolving wires as rows are read, then
/// resolves device part numbers across the batch. Recoverable findings
/// land in the returned issue log; only I/O and format problems fail the
/// call. The caller decides what to do with the rows, typically
/// [`generate_fromto`] followed by [`workbook::write_file`].
pub fn convert_rapidharness(
    input: &std::path::Path,
    wires: &WireLookup,
    devices: &DeviceLookup,
) -> Result<Conversion> {
    let mut issues = IssueLog::new();

    let mut rows = parse_rapidharness_file(input, wires, &mut issues)?;

    apply_device_lookup(
        &mut rows,
        devices,
        RapidHarnessParser::DATA_START_ROW,
        &mut issues,
    );

    Ok(Conversion { rows, issues })
}
