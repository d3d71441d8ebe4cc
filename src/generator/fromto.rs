//! From-To List workbook generator.

use crate::model::FromToRow;
use crate::workbook::{Sheet, Workbook};

/// Output sheet name required by the E3.series importer.
pub const FROMTO_SHEET: &str = "From-To List";

/// Header row of the From-To List, in column order.
pub const FROMTO_HEADERS: [&str; 17] = [
    "From Assignment",
    "From Location",
    "From Device Name",
    "From Device Part #",
    "From Pin",
    "From Pin Part #",
    "To Assignment",
    "To Location",
    "To Device Name",
    "To Device Part #",
    "To Pin",
    "To Pin Part #",
    "Wire/Conductor Number",
    "Signal",
    "Wire Type",
    "Wire Color",
    "Wire Gauge",
];

// Output columns, 1-based. Only these 11 of the 17 ever get data; the
// Assignment, Location and Pin Part # columns are reserved for manual
// entry downstream.
const COL_FROM_DEVICE_NAME: u32 = 3;
const COL_FROM_DEVICE_PN: u32 = 4;
const COL_FROM_PIN: u32 = 5;
const COL_TO_DEVICE_NAME: u32 = 9;
const COL_TO_DEVICE_PN: u32 = 10;
const COL_TO_PIN: u32 = 11;
const COL_WIRE_NUMBER: u32 = 13;
const COL_SIGNAL_NAME: u32 = 14;
const COL_WIRE_TYPE: u32 = 15;
const COL_WIRE_COLOR: u32 = 16;
const COL_WIRE_GAUGE: u32 = 17;

/// Build the From-To List workbook for a converted batch.
///
/// Row 1 carries the 17 fixed headers; each record follows at fixed
/// column positions. Absent fields stay blank cells, never empty strings.
/// Every record owns its output row, so the sheet holds one data row per
/// record even when a record sets no cell at all.
pub fn generate_fromto(rows: &[FromToRow]) -> Workbook {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_sheet(FROMTO_SHEET);

    for (index, header) in FROMTO_HEADERS.iter().enumerate() {
        sheet.set_cell(1, index as u32 + 1, *header);
    }

    for (index, row) in rows.iter().enumerate() {
        let out_row = index as u32 + 2;
        write_row(sheet, out_row, row);
    }

    // An all-blank record at the end of the batch still counts.
    sheet.extend_to_row(rows.len() as u32 + 1);

    workbook
}

fn write_row(sheet: &mut Sheet, out_row: u32, row: &FromToRow) {
    set_opt(sheet, out_row, COL_FROM_DEVICE_NAME, row.from_device_name.as_deref());
    set_opt(sheet, out_row, COL_FROM_DEVICE_PN, row.from_device_pn.as_deref());
    set_opt(sheet, out_row, COL_FROM_PIN, row.from_pin.as_deref());

    set_opt(sheet, out_row, COL_TO_DEVICE_NAME, row.to_device_name.as_deref());
    set_opt(sheet, out_row, COL_TO_DEVICE_PN, row.to_device_pn.as_deref());
    set_opt(sheet, out_row, COL_TO_PIN, row.to_pin.as_deref());

    if let Some(index) = row.wire_index {
        sheet.set_cell(out_row, COL_WIRE_NUMBER, index.to_string());
    }
    set_opt(sheet, out_row, COL_SIGNAL_NAME, row.signal_name.as_deref());

    // E3 takes the group under "Wire Type" and the type string under
    // "Wire Gauge". A record without a wire leaves all three blank.
    if let Some(wire) = &row.wire {
        sheet.set_cell(out_row, COL_WIRE_TYPE, wire.wire_group.as_str());
        sheet.set_cell(out_row, COL_WIRE_COLOR, wire.color.as_str());
        sheet.set_cell(out_row, COL_WIRE_GAUGE, wire.wire_type.as_str());
    }
}

fn set_opt(sheet: &mut Sheet, row: u32, col: u32, value: Option<&str>) {
    if let Some(value) = value {
        sheet.set_cell(row, col, value);
    }
}

// ==================== tests ====================
