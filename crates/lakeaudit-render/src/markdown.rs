use crate::{TITLE, mode_label, pretty_details};
use lakeaudit_types::{AuditReport, Severity};

pub fn to_markdown(report: &AuditReport) -> String {
    let summary = report.summary();
    let mut lines = vec![
        format!("# {TITLE}"),
        String::new(),
        format!("**Timestamp:** {}", report.timestamp_rfc3339()),
        format!("**Environment:** {}", report.environment()),
        format!("**Mode:** {}", mode_label(report.dry_run())),
        String::new(),
        "## Summary".to_string(),
        String::new(),
        format!("- Total Checks: {}", summary.total),
        format!("- OK:   {}", summary.ok),
        format!("- WARN: {}", summary.warn),
        format!("- FAIL: {}", summary.fail),
        String::new(),
        "## Findings".to_string(),
        String::new(),
    ];

    for severity in Severity::WORST_FIRST {
        let mut group = report.findings_with(severity).peekable();
        if group.peek().is_none() {
            continue;
        }

        lines.push(format!("### {severity}"));
        lines.push(String::new());

        for f in group {
            lines.push(format!("**{}**", f.check_name()));
            lines.push(format!("- {}", f.message()));
            if !f.details().is_empty() {
                lines.push(format!("- Details: {}", pretty_details(f.details())));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
