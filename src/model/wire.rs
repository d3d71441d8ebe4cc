//! Wire specification as known to the E3.series component database.

use serde::{Deserialize, Serialize};

/// A single conductor type recognized by E3.series.
///
/// One instance describes one physical wire product, for example 14AWG TXL
/// in red. Instances are created when the wire lookup table is loaded and
/// never mutated afterwards; connection rows carry their own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSpec {
    /// Wire group, for example `TXL`.
    pub wire_group: String,
    /// Wire type, for example `14-AWG-RED`.
    pub wire_type: String,
    /// Wire cross-section in AWG, for example `14`.
    pub cross_section_awg: u32,
    /// Wire color. E3 expects short color codes like `RED`, `BRN`, `PNK`.
    pub color: String,
}
