//! Parser for RapidHarness workbook exports.

use std::path::Path;

use tracing::{debug, error};

use crate::error::{ConvertError, Result};
use crate::lookup::WireLookup;
use crate::model::{Endpoint, FromToRow, Issue, IssueKind, IssueLog, Severity};
use crate::workbook::{self, Sheet};

use super::InputParser;

/// Parser for RapidHarness workbook exports.
///
/// Reads the fixed-layout `Connections` sheet: data starts at row 11 and
/// every field sits at a fixed column position.
#[derive(Debug, Clone, Copy, Default)]
pub struct RapidHarnessParser;

impl RapidHarnessParser {
    /// Sheet holding the connection table.
    pub const SHEET_NAME: &'static str = "Connections";
    /// First data row. Rows 1-10 are a fixed header block, never data.
    pub const DATA_START_ROW: u32 = 11;

    // Source columns, 1-based.
    const COL_FROM_ENDPOINT: u32 = 2;
    const COL_TO_ENDPOINT: u32 = 3;
    const COL_CONDUCTOR: u32 = 4;
    const COL_WIRE_SKU: u32 = 5;
    const COL_FROM_DEVICE_PN: u32 = 11;
    const COL_TO_DEVICE_PN: u32 = 13;
    const COL_SIGNAL_NAME: u32 = 15;

    /// Parse one connection row from the sheet.
    ///
    /// Every source row yields exactly one record, blank rows included.
    /// Recoverable findings come back alongside the record and never make
    /// this fail.
    pub fn parse_row(sheet: &Sheet, row_num: u32, wires: &WireLookup) -> (FromToRow, Vec<Issue>) {
        let mut row = FromToRow::default();
        let mut issues = Vec::new();

        let from = Endpoint::parse(sheet.cell(row_num, Self::COL_FROM_ENDPOINT));
        let (device, pin) = from.into_parts();
        row.from_device_name = device;
        row.from_pin = pin;

        let to = Endpoint::parse(sheet.cell(row_num, Self::COL_TO_ENDPOINT));
        let (device, pin) = to.into_parts();
        row.to_device_name = device;
        row.to_pin = pin;

        // Conductor labels look like "W19.Black"; the wire number is the
        // first digit run, wherever it sits in the text.
        row.wire_index = sheet
            .cell(row_num, Self::COL_CONDUCTOR)
            .and_then(first_digit_run);

        if let Some(sku) = sheet.cell(row_num, Self::COL_WIRE_SKU) {
            match wires.get(sku) {
                Some(spec) => row.wire = Some(spec.clone()),
                None => {
                    let description = format!("Wire '{sku}' not found in lookup table");
                    error!("row {row_num}: {description}");
                    issues.push(Issue::new(
                        Severity::Error,
                        IssueKind::WireNotFound,
                        row_num,
                        "Wire",
                        sku,
                        description,
                    ));
                }
            }
        }

        row.from_device_pn = sheet
            .cell(row_num, Self::COL_FROM_DEVICE_PN)
            .map(str::to_string);
        row.to_device_pn = sheet
            .cell(row_num, Self::COL_TO_DEVICE_PN)
            .map(str::to_string);
        row.signal_name = sheet
            .cell(row_num, Self::COL_SIGNAL_NAME)
            .map(str::to_string);

        (row, issues)
    }
}

impl InputParser for RapidHarnessParser {
    fn format_name(&self) -> &'static str {
        "RapidHarness"
    }

    fn parse(
        &self,
        input: &Path,
        wires: &WireLookup,
        issues: &mut IssueLog,
    ) -> Result<Vec<FromToRow>> {
        debug!("parsing {} export: {}", self.format_name(), input.display());

        let book = workbook::read_file(input)?;
        let sheet = book
            .sheet(Self::SHEET_NAME)
            .ok_or_else(|| ConvertError::SheetNotFound {
                name: Self::SHEET_NAME.to_string(),
            })?;

        let mut rows = Vec::new();
        for row_num in Self::DATA_START_ROW..=sheet.max_row() {
            let (row, row_issues) = Self::parse_row(sheet, row_num, wires);
            issues.extend(row_issues);
            rows.push(row);
        }

        debug!(
            "parsed {} connections from {}",
            rows.len(),
            input.display()
        );
        Ok(rows)
    }
}

/// Parse a RapidHarness export file.
pub fn parse_rapidharness_file(
    path: &Path,
    wires: &WireLookup,
    issues: &mut IssueLog,
) -> Result<Vec<FromToRow>> {
    RapidHarnessParser.parse(path, wires, issues)
}

/// First run of decimal digits anywhere in the text, parsed as a number.
fn first_digit_run(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

// ==================== tests ====================
