//! One connection in the E3.series From-To List.

use serde::{Deserialize, Serialize};

use super::wire::WireSpec;

/// A single point-to-point connection, the intermediate record every input
/// parser produces and the output emitter consumes.
///
/// Fields start out absent and are filled in as the source row is read.
/// After parsing, the device part-number resolution pass rewrites
/// `from_device_pn` / `to_device_pn` in place; nothing else mutates a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromToRow {
    /// FROM device/connector designator, for example `J4`.
    pub from_device_name: Option<String>,
    /// FROM device part number (E3 name after resolution).
    pub from_device_pn: Option<String>,
    /// FROM pin designator. Absent for pinless devices.
    pub from_pin: Option<String>,

    /// TO device/connector designator.
    pub to_device_name: Option<String>,
    /// TO device part number (E3 name after resolution).
    pub to_device_pn: Option<String>,
    /// TO pin designator. Absent for pinless devices.
    pub to_pin: Option<String>,

    /// Resolved wire specification. Absent when the source row referenced a
    /// multi-conductor cable or an unknown wire identifier.
    pub wire: Option<WireSpec>,
    /// Signal name carried verbatim from the source row.
    pub signal_name: Option<String>,
    /// Conductor number within the harness, for example `19` from `W19.Black`.
    pub wire_index: Option<u32>,
}
