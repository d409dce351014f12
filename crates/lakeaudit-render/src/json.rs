use lakeaudit_types::AuditReport;

/// Pretty-printed structural serialization; parses back into an equal report.
pub fn to_json(report: &AuditReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mixed_report;

    #[test]
    fn round_trips_through_json() {
        let report = mixed_report();
        let text = to_json(&report).unwrap();
        let parsed: AuditReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn uses_wire_names() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&mixed_report()).unwrap()).unwrap();

        assert_eq!(value["timestamp"], "2024-10-01T12:00:00Z");
        assert_eq!(value["environment"], "DRY-RUN");
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["findings"][1]["severity"], "FAIL");
        assert_eq!(
            value["summary"],
            serde_json::json!({"total": 3, "ok": 1, "warn": 1, "fail": 1})
        );
    }

    #[test]
    fn rejects_findings_with_empty_message() {
        let text = r#"{
            "timestamp": "2024-10-01T12:00:00Z",
            "environment": "REAL",
            "dry_run": false,
            "findings": [{"check_name": "x", "severity": "OK", "message": ""}],
            "summary": {"total": 1, "ok": 1, "warn": 0, "fail": 0}
        }"#;
        assert!(serde_json::from_str::<AuditReport>(text).is_err());
    }
}
