use crate::{Finding, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Run mode recorded on the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    #[serde(rename = "DRY-RUN")]
    DryRun,
    #[serde(rename = "REAL")]
    Real,
}

impl Environment {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Environment::DryRun
        } else {
            Environment::Real
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::DryRun => "DRY-RUN",
            Environment::Real => "REAL",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-severity counts. `ok + warn + fail == total` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u32,
    pub ok: u32,
    pub warn: u32,
    pub fail: u32,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Summary::default();
        for f in findings {
            summary.total += 1;
            match f.severity() {
                Severity::Ok => summary.ok += 1,
                Severity::Warn => summary.warn += 1,
                Severity::Fail => summary.fail += 1,
            }
        }
        summary
    }

    pub fn count(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Ok => self.ok,
            Severity::Warn => self.warn,
            Severity::Fail => self.fail,
        }
    }
}

/// Aggregate of one audit run.
///
/// Built exactly once from a finalized findings list; the summary is computed at
/// construction and the report is never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
    environment: Environment,
    dry_run: bool,
    findings: Vec<Finding>,
    summary: Summary,
}

impl AuditReport {
    /// Stamp the current UTC time and aggregate `findings`.
    pub fn create(findings: Vec<Finding>, dry_run: bool) -> Self {
        Self::create_at(findings, dry_run, OffsetDateTime::now_utc())
    }

    pub fn create_at(findings: Vec<Finding>, dry_run: bool, timestamp: OffsetDateTime) -> Self {
        let summary = Summary::from_findings(&findings);
        Self {
            timestamp: timestamp.to_offset(time::UtcOffset::UTC),
            environment: Environment::from_dry_run(dry_run),
            dry_run,
            findings,
            summary,
        }
    }

    /// `3` if any finding failed, else `2` if any warned, else `0`.
    pub fn exit_code(&self) -> i32 {
        match self.worst_severity() {
            Some(Severity::Fail) => 3,
            Some(Severity::Warn) => 2,
            Some(Severity::Ok) | None => 0,
        }
    }

    pub fn worst_severity(&self) -> Option<Severity> {
        self.findings.iter().map(Finding::severity).max()
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// ISO-8601 timestamp with a trailing `Z`.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.timestamp.to_string())
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings at `severity`, in report order.
    pub fn findings_with(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity() == severity)
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }
}
