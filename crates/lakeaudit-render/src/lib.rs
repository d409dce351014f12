//! Rendering of audit reports (JSON, Markdown, HTML).
//!
//! Renderers are pure: the same report always renders to the same bytes.

#![forbid(unsafe_code)]

mod html;
mod json;
mod markdown;

pub use html::to_html;
pub use json::to_json;
pub use markdown::to_markdown;

use lakeaudit_types::Details;
use serde_json::Value;

pub(crate) const TITLE: &str = "Databricks Compliance Audit Report";

pub(crate) fn mode_label(dry_run: bool) -> &'static str {
    if dry_run {
        "DRY-RUN (using fixtures)"
    } else {
        "REAL"
    }
}

/// Two-space indented JSON of a finding's details.
pub(crate) fn pretty_details(details: &Details) -> String {
    format!("{:#}", Value::Object(details.clone()))
}
