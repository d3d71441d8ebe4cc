//! Device part-number resolution against the device lookup table.

use tracing::warn;

use crate::lookup::DeviceLookup;
use crate::model::{FromToRow, Issue, IssueKind, IssueLog, Severity};

/// Sentinel part number E3.series expects for wire splices.
pub const SPLICE_PN: &str = "SPLICE";

/// Which end of a connection is being resolved.
#[derive(Debug, Clone, Copy)]
enum Side {
    From,
    To,
}

impl Side {
    fn entity_id(self) -> &'static str {
        match self {
            Side::From => "FROM Device",
            Side::To => "TO Device",
        }
    }
}

/// Resolve the device part numbers on both ends of one record.
///
/// Per side: an exact match in the device lookup table always wins and is
/// replaced with the mapped value. On a miss, a splice-named device gets
/// the `SPLICE` sentinel no matter what raw part number it carried. A part
/// number that is present but matched nothing passes through unchanged
/// with a warning; device part numbers are globally unique and may already
/// exist in the destination database. An absent part number stays absent.
pub fn resolve_device_partnumbers(
    row: &FromToRow,
    devices: &DeviceLookup,
    row_num: u32,
) -> (Option<String>, Option<String>, Vec<Issue>) {
    let mut issues = Vec::new();

    let from = resolve_side(
        row.from_device_pn.as_deref(),
        row.from_device_name.as_deref(),
        Side::From,
        devices,
        row_num,
        &mut issues,
    );
    let to = resolve_side(
        row.to_device_pn.as_deref(),
        row.to_device_name.as_deref(),
        Side::To,
        devices,
        row_num,
        &mut issues,
    );

    (from, to, issues)
}

/// Resolve part numbers across a whole batch, mutating rows in place.
///
/// `first_row` is the source row number of `rows[0]`; issues are reported
/// against source rows so they line up with the parser's findings.
pub fn apply_device_lookup(
    rows: &mut [FromToRow],
    devices: &DeviceLookup,
    first_row: u32,
    issues: &mut IssueLog,
) {
    for (index, row) in rows.iter_mut().enumerate() {
        let row_num = first_row + index as u32;
        let (from, to, row_issues) = resolve_device_partnumbers(row, devices, row_num);
        row.from_device_pn = from;
        row.to_device_pn = to;
        issues.extend(row_issues);
    }
}

fn resolve_side(
    part_number: Option<&str>,
    device_name: Option<&str>,
    side: Side,
    devices: &DeviceLookup,
    row_num: u32,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    if let Some(pn) = part_number {
        if let Some(mapped) = devices.get(pn) {
            return Some(mapped.to_string());
        }
    }

    // Table misses fall back to splice detection on the device name.
    if device_name.map_or(false, is_splice_name) {
        return Some(SPLICE_PN.to_string());
    }

    if let Some(pn) = part_number {
        let description = format!("Device part number '{pn}' not found in lookup table");
        warn!("row {row_num} ({}): {description}", side.entity_id());
        issues.push(Issue::new(
            Severity::Warning,
            IssueKind::DeviceNotFound,
            row_num,
            side.entity_id(),
            pn,
            description,
        ));
        return Some(pn.to_string());
    }

    None
}

/// Splice devices are named like `S12`: the designator ends with `S`
/// followed by one or more digits. Splices carry no real part number in
/// RapidHarness but need the `SPLICE` sentinel in E3.series, otherwise the
/// import treats them as generic connectors.
fn is_splice_name(name: &str) -> bool {
    let stripped = name.trim_end_matches(|c: char| c.is_ascii_digit());
    stripped.len() < name.len() && stripped.ends_with('S')
}

// ==================== tests ====================
