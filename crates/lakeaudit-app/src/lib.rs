//! Use case orchestration for lakeaudit.
//!
//! This crate coordinates the gateway, domain and render layers. The CLI crate depends on
//! it and only handles argument parsing and process-level IO.

#![forbid(unsafe_code)]

mod audit;
mod format;
mod save;

pub use audit::{run_audit, run_audit_with};
pub use format::{ReportFormat, parse_formats};
pub use save::{render, report_path, save};
