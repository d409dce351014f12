//! Stable DTOs and IDs used across the lakeaudit workspace.
//!
//! This crate is intentionally boring:
//! - the finding and report types emitted by an audit run
//! - stable check names
//! - the aggregation rules (summary counts, exit code)

#![forbid(unsafe_code)]

pub mod finding;
pub mod ids;
pub mod report;

pub use finding::{Details, Finding, FindingError, Severity};
pub use report::{AuditReport, Environment, Summary};
