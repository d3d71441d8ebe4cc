//! Output generators for the E3.series import side.

mod fromto;
mod issue_log;

pub use fromto::{generate_fromto, FROMTO_HEADERS, FROMTO_SHEET};
pub use issue_log::write_issue_log;
