//! Data model types for RapidHarness to E3.series conversion.

mod endpoint;
mod issue;
mod row;
mod wire;

pub use endpoint::Endpoint;
pub use issue::{Issue, IssueKind, IssueLog, Severity};
pub use row::FromToRow;
pub use wire::WireSpec;
