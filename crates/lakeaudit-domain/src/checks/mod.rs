use crate::evaluator::{AuditContext, Evaluator, evaluate_checked};
use lakeaudit_types::Finding;

mod cluster_policies;
mod clusters;
mod secret_scopes;
mod tags_cost_controls;
mod utils;
mod workspace_settings;


pub use cluster_policies::{AUTO_TERMINATION_MAX_MINUTES, ClusterPolicies, GUARDRAILS_POLICY_NAME};
pub use clusters::Clusters;
pub use secret_scopes::{PLATFORM_SCOPE_NAME, SecretScopes};
pub use tags_cost_controls::{MAX_WORKERS_LIMIT, REQUIRED_TAGS, TagsCostControls};
pub use workspace_settings::WorkspaceSettings;

/// The closed rule set, in execution order.
pub const EVALUATORS: [&dyn Evaluator; 5] = [
    &ClusterPolicies,
    &TagsCostControls,
    &Clusters,
    &SecretScopes,
    &WorkspaceSettings,
];

/// Run every evaluator in order and concatenate their findings.
pub fn run_all(ctx: &AuditContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for evaluator in EVALUATORS {
        let span = tracing::info_span!("check", name = evaluator.name());
        let _guard = span.enter();
        tracing::info!("running check");
        let emitted = evaluate_checked(evaluator, ctx);
        tracing::debug!(findings = emitted.len(), "check finished");
        findings.extend(emitted);
    }
    findings
}
