//! Transformation logic applied to parsed connection rows.

mod device;

pub use device::{apply_device_lookup, resolve_device_partnumbers, SPLICE_PN};
