//! Shared test utilities for the lakeaudit workspace.
//!
//! A plain library crate because the CLI's `tests/` integration target cannot see
//! `#[cfg(test)]` items of another crate.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Only the root `timestamp` of a report is replaced, and only when the root looks like
/// a report (`timestamp`, `environment`, `findings` and `summary` all present). Finding
/// details are evidence and stay untouched even if they carry a `timestamp` key.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_report = obj.contains_key("timestamp")
            && obj.contains_key("environment")
            && obj.contains_key("findings")
            && obj.contains_key("summary");
        if is_report {
            obj.insert(
                "timestamp".to_string(),
                Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
            );
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replaces_root_report_timestamp() {
        let report = json!({
            "timestamp": "2024-10-01T12:00:00.123456Z",
            "environment": "DRY-RUN",
            "dry_run": true,
            "findings": [],
            "summary": {"total": 0, "ok": 0, "warn": 0, "fail": 0}
        });

        let normalized = normalize_nondeterministic(report);
        assert_eq!(normalized["timestamp"], TIMESTAMP_PLACEHOLDER);
        assert_eq!(normalized["environment"], "DRY-RUN");
    }

    #[test]
    fn leaves_finding_details_alone() {
        let report = json!({
            "timestamp": "2024-10-01T12:00:00Z",
            "environment": "REAL",
            "findings": [{"details": {"timestamp": "keep-me"}}],
            "summary": {}
        });

        let normalized = normalize_nondeterministic(report);
        assert_eq!(normalized["findings"][0]["details"]["timestamp"], "keep-me");
    }

    #[test]
    fn non_report_values_pass_through() {
        let value = json!({"timestamp": "x"});
        assert_eq!(normalize_nondeterministic(value.clone()), value);
    }
}
