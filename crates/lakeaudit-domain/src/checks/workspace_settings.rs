use crate::evaluator::{AuditContext, EvalError, Evaluator};
use crate::gateway::ResourceKind;
use lakeaudit_types::{Finding, ids};

/// Workspace configuration can be read.
pub struct WorkspaceSettings;

impl Evaluator for WorkspaceSettings {
    fn name(&self) -> &'static str {
        ids::EVALUATOR_WORKSPACE_SETTINGS
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Result<Vec<Finding>, EvalError> {
        let conf = ctx.fetch_raw(ResourceKind::WorkspaceConf)?;
        let entries = conf.as_object().map_or(0, |m| m.len());

        let finding = if entries > 0 {
            Finding::ok(
                ids::CHECK_WORKSPACE_CONFIGURATION_BASELINE,
                "Workspace configuration retrieved successfully",
            )?
            .with_detail("config_count", entries)
            .with_detail("mode", ctx.mode_label())
        } else if ctx.dry_run {
            Finding::warn(
                ids::CHECK_WORKSPACE_CONFIGURATION_BASELINE,
                "DRY-RUN: Workspace config check using fixture data",
            )?
            .with_detail("note", "In real mode, would check actual workspace settings")
        } else {
            Finding::warn(
                ids::CHECK_WORKSPACE_CONFIGURATION_BASELINE,
                "Unable to retrieve workspace configuration (may require admin permissions)",
            )?
        };
        Ok(vec![finding])
    }
}
