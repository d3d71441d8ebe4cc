//! CSV export of the issue log.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::IssueLog;

/// Write the issue log as a CSV file, one record per issue.
///
/// Column order matches the issue fields: severity, error_type,
/// row_number, entity_id, entity_value, description, timestamp. The file
/// is built fully in memory and written in a single call.
pub fn write_issue_log(issues: &IssueLog, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for issue in issues {
            writer.serialize(issue)?;
        }
        writer.flush()?;
    }

    fs::write(path, buf)?;
    debug!("wrote {} issues to {}", issues.len(), path.display());
    Ok(())
}

// ==================== tests ====================
