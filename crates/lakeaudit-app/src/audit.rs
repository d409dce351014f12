//! The `audit` use case: fetch, evaluate, aggregate.

use anyhow::Context;
use lakeaudit_domain::{AuditContext, Gateway};
use lakeaudit_settings::AuditorConfig;
use lakeaudit_types::AuditReport;

/// Run every evaluator against the gateway selected by `config`.
///
/// Only gateway construction can fail; data-level problems become findings.
pub fn run_audit(config: &AuditorConfig) -> anyhow::Result<AuditReport> {
    let mode = if config.is_dry_run() { "DRY-RUN" } else { "REAL" };
    tracing::info!(mode, host = %config.redacted_host(), "starting audit");
    if config.is_dry_run() {
        tracing::info!("credentials not configured; replaying fixtures");
    }

    let gateway = lakeaudit_gateway::build_gateway(config).context("build gateway")?;
    Ok(run_audit_with(gateway.as_ref(), config.is_dry_run()))
}

pub fn run_audit_with(gateway: &dyn Gateway, dry_run: bool) -> AuditReport {
    let ctx = AuditContext::new(gateway, dry_run);
    let findings = lakeaudit_domain::run_all(&ctx);
    let report = AuditReport::create(findings, dry_run);

    let summary = report.summary();
    tracing::info!(
        total = summary.total,
        ok = summary.ok,
        warn = summary.warn,
        fail = summary.fail,
        "audit finished"
    );
    report
}
