use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use lakeaudit_types::AuditReport;

use crate::ReportFormat;

pub fn report_path(out_dir: &Utf8Path, format: ReportFormat) -> Utf8PathBuf {
    out_dir.join(format!("audit_report.{}", format.extension()))
}

pub fn render(report: &AuditReport, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Json => lakeaudit_render::to_json(report).context("serialize report"),
        ReportFormat::Markdown => Ok(lakeaudit_render::to_markdown(report)),
        ReportFormat::Html => Ok(lakeaudit_render::to_html(report)),
    }
}

/// Write one `audit_report.<ext>` per format into `out_dir`, creating it if needed.
///
/// Returns the written paths in request order.
pub fn save(
    report: &AuditReport,
    out_dir: &Utf8Path,
    formats: &[ReportFormat],
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create directory: {}", out_dir))?;

    let mut written = Vec::with_capacity(formats.len());
    for &format in formats {
        let path = report_path(out_dir, format);
        let text = render(report, format)?;
        std::fs::write(&path, text).with_context(|| format!("write report: {}", path))?;
        tracing::debug!(path = %path, "report written");
        written.push(path);
    }
    Ok(written)
}
