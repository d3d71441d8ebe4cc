//! Workbook model and sectioned file format.

mod read;
mod sheet;
mod write;

pub use read::{parse, read_file};
pub use sheet::{Sheet, Workbook};
pub use write::{render, write_file};
