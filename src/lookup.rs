//! CSV-backed lookup tables mapping RapidHarness names to E3.series values.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::model::WireSpec;

/// One row of the wire mapping CSV.
#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(rename = "RapidHarness_Name")]
    rapidharness_name: String,
    #[serde(rename = "Wire_Group")]
    wire_group: String,
    #[serde(rename = "E3_Wire_Type")]
    wire_type: String,
    #[serde(rename = "AWG_Gauge")]
    cross_section_awg: u32,
    #[serde(rename = "Color")]
    color: String,
}

/// One row of the device mapping CSV.
#[derive(Debug, Deserialize)]
struct DeviceRecord {
    #[serde(rename = "RapidHarness_PartNumber")]
    rapidharness_partnumber: String,
    #[serde(rename = "E3_Device_Name")]
    e3_device_name: String,
}

/// Wire lookup table keyed by the exact RapidHarness wire name.
#[derive(Debug, Clone, Default)]
pub struct WireLookup {
    wires: HashMap<String, WireSpec>,
}

impl WireLookup {
    /// Load a wire mapping CSV. Any malformed row is fatal, including a
    /// quoted line break in any value.
    pub fn load(path: &Path) -> Result<Self> {
        let mut wires = HashMap::new();
        for record in read_records::<WireRecord>(path)? {
            for value in [
                &record.rapidharness_name,
                &record.wire_group,
                &record.wire_type,
                &record.color,
            ] {
                reject_line_breaks(path, value)?;
            }
            let spec = WireSpec {
                wire_group: record.wire_group,
                wire_type: record.wire_type,
                cross_section_awg: record.cross_section_awg,
                color: record.color,
            };
            // Duplicate names keep the last definition.
            wires.insert(record.rapidharness_name, spec);
        }

        debug!("loaded {} wire mappings from {}", wires.len(), path.display());
        Ok(Self { wires })
    }

    /// Look up a wire by its RapidHarness name. Exact match only.
    pub fn get(&self, name: &str) -> Option<&WireSpec> {
        self.wires.get(name)
    }

    /// Number of mappings in the table.
    pub fn len(&self) -> usize {
        self.wires.len()
    }

    /// Whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }
}

/// Device lookup table keyed by the RapidHarness part number.
#[derive(Debug, Clone, Default)]
pub struct DeviceLookup {
    devices: HashMap<String, String>,
}

impl DeviceLookup {
    /// Load a device mapping CSV. Any malformed row is fatal, including a
    /// quoted line break in any value.
    pub fn load(path: &Path) -> Result<Self> {
        let mut devices = HashMap::new();
        for record in read_records::<DeviceRecord>(path)? {
            for value in [&record.rapidharness_partnumber, &record.e3_device_name] {
                reject_line_breaks(path, value)?;
            }
            devices.insert(record.rapidharness_partnumber, record.e3_device_name);
        }

        debug!(
            "loaded {} device mappings from {}",
            devices.len(),
            path.display()
        );
        Ok(Self { devices })
    }

    /// Look up the E3 device name for a part number. Exact match only.
    pub fn get(&self, part_number: &str) -> Option<&str> {
        self.devices.get(part_number).map(String::as_str)
    }

    /// Number of mappings in the table.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// Read and deserialize every record of a headed CSV file.
fn read_records<T>(path: &Path) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| table_error(path, e))?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record.map_err(|e| table_error(path, e))?);
    }
    Ok(records)
}

fn table_error(path: &Path, err: csv::Error) -> ConvertError {
    ConvertError::LookupTable {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Lookup values flow into output workbook cells, which cannot hold line
/// breaks; a quoted line break in the table fails the whole load.
fn reject_line_breaks(path: &Path, value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(ConvertError::LookupTable {
            path: path.to_path_buf(),
            message: format!("value {value:?} contains a line break"),
        });
    }
    Ok(())
}

// ==================== tests ====================
