//! Issue taxonomy and the append-only issue log.
//!
//! Issues record every irregularity met while converting a batch. They are
//! the recoverable channel of the error design: recording one never stops
//! processing, and the log is only consumed once the whole run is finished.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Not necessarily a problem, but worth a look.
    #[serde(rename = "warning")]
    Warning,
    /// Genuine data loss in the converted output.
    #[serde(rename = "error")]
    Error,
}

impl Severity {
    /// Lowercase tag used in the issue log export.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a recorded issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// A non-empty wire identifier had no entry in the wire lookup table.
    #[serde(rename = "WIRE_NOT_FOUND")]
    WireNotFound,
    /// A device part number had no entry in the device lookup table and the
    /// device name did not match the splice pattern.
    #[serde(rename = "DEVICE_NOT_FOUND")]
    DeviceNotFound,
}

impl IssueKind {
    /// Stable tag used in the issue log export.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::WireNotFound => "WIRE_NOT_FOUND",
            IssueKind::DeviceNotFound => "DEVICE_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded irregularity, tied to a source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity of the finding.
    pub severity: Severity,
    /// Category tag.
    #[serde(rename = "error_type")]
    pub kind: IssueKind,
    /// Source sheet row the finding refers to.
    pub row_number: u32,
    /// What was being processed, for example `Wire` or `FROM Device`.
    pub entity_id: String,
    /// The offending value.
    pub entity_value: String,
    /// Human-readable message.
    pub description: String,
    /// RFC 3339 timestamp captured when the issue was recorded.
    pub timestamp: String,
}

impl Issue {
    /// Create an issue stamped with the current time.
    pub fn new(
        severity: Severity,
        kind: IssueKind,
        row_number: u32,
        entity_id: impl Into<String>,
        entity_value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            row_number,
            entity_id: entity_id.into(),
            entity_value: entity_value.into(),
            description: description.into(),
            timestamp: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }
}

/// Ordered, append-only collection of issues for one conversion run.
///
/// The log never deduplicates and never drops entries; issues come out in
/// the order they were recorded.
#[derive(Debug, Default)]
pub struct IssueLog {
    issues: Vec<Issue>,
}

impl IssueLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Append every issue from an iterator, preserving order.
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterate over issues in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Number of `error`-severity issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Number of `warning`-severity issues.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }
}

impl<'a> IntoIterator for &'a IssueLog {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
