use crate::{TITLE, mode_label, pretty_details};
use lakeaudit_types::{AuditReport, Finding, Severity};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; max-width: 1200px; margin: 40px auto; padding: 20px; }
h1 { color: #333; }
.header { background: #f8f9fa; padding: 20px; border-radius: 5px; margin-bottom: 30px; }
.summary { display: flex; gap: 20px; margin: 20px 0; }
.summary-card { flex: 1; padding: 20px; border-radius: 5px; text-align: center; }
.summary-card h3 { margin: 0; font-size: 32px; }
.summary-card p { margin: 5px 0 0 0; color: #666; }
.findings { margin-top: 30px; }
.finding { padding: 15px; margin: 10px 0; border-left: 4px solid; border-radius: 3px; background: #f8f9fa; }
.finding-ok { border-color: #28a745; }
.finding-warn { border-color: #ffc107; }
.finding-fail { border-color: #dc3545; }
.severity { display: inline-block; padding: 2px 8px; border-radius: 3px; color: white; font-size: 12px; font-weight: bold; }
pre { background: #f4f4f4; padding: 10px; border-radius: 3px; overflow-x: auto; }";

fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Fail => "#dc3545",
        Severity::Warn => "#ffc107",
        Severity::Ok => "#28a745",
    }
}

fn css_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Fail => "finding-fail",
        Severity::Warn => "finding-warn",
        Severity::Ok => "finding-ok",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Standalone styled document with the same sections as the Markdown report.
pub fn to_html(report: &AuditReport) -> String {
    let summary = report.summary();
    let mut parts = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<meta charset='utf-8'>".to_string(),
        format!("<title>{TITLE}</title>"),
        "<style>".to_string(),
        STYLE.to_string(),
        "</style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("<h1>{TITLE}</h1>"),
        "<div class='header'>".to_string(),
        format!(
            "<p><strong>Timestamp:</strong> {}</p>",
            report.timestamp_rfc3339()
        ),
        format!(
            "<p><strong>Environment:</strong> {}</p>",
            report.environment()
        ),
        format!(
            "<p><strong>Mode:</strong> {}</p>",
            mode_label(report.dry_run())
        ),
        "</div>".to_string(),
        "<h2>Summary</h2>".to_string(),
        "<div class='summary'>".to_string(),
    ];

    for severity in [Severity::Ok, Severity::Warn, Severity::Fail] {
        parts.push(format!(
            "<div class='summary-card' style='background: {}20;'><h3>{}</h3><p>{severity}</p></div>",
            color(severity),
            summary.count(severity)
        ));
    }
    parts.push("</div>".to_string());

    parts.push("<h2>Findings</h2>".to_string());
    parts.push("<div class='findings'>".to_string());
    for severity in Severity::WORST_FIRST {
        let mut group = report.findings_with(severity).peekable();
        if group.peek().is_none() {
            continue;
        }
        parts.push(format!("<h3>{severity}</h3>"));
        for f in group {
            push_finding(&mut parts, f);
        }
    }
    parts.push("</div>".to_string());

    parts.push("</body>".to_string());
    parts.push("</html>".to_string());
    parts.join("\n")
}

fn push_finding(parts: &mut Vec<String>, f: &Finding) {
    let severity = f.severity();
    parts.push(format!("<div class='finding {}'>", css_class(severity)));
    parts.push(format!(
        "<h4>{} <span class='severity' style='background: {};'>{severity}</span></h4>",
        escape(f.check_name()),
        color(severity)
    ));
    parts.push(format!("<p>{}</p>", escape(f.message())));
    if !f.details().is_empty() {
        parts.push(format!("<pre>{}</pre>", escape(&pretty_details(f.details()))));
    }
    parts.push("</div>".to_string());
}
