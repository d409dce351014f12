//! Stable check names.
//!
//! A check name identifies one rule branch. Evaluators may emit several names; the
//! `*_check` names are reserved for the synthetic finding emitted when an evaluator
//! itself fails.

// Rule: guardrails cluster policy
pub const CHECK_CLUSTER_POLICY_EXISTS: &str = "cluster_policy_exists";
pub const CHECK_CLUSTER_POLICY_DEFINITION: &str = "cluster_policy_definition";
pub const CHECK_AUTO_TERMINATION_ENFORCED: &str = "auto_termination_enforced";

// Rule: tags and cost controls
pub const CHECK_MAX_WORKERS_ENFORCED: &str = "max_workers_enforced";
pub const CHECK_REQUIRED_TAGS_ENFORCED: &str = "required_tags_enforced";

// Rule: running clusters
pub const CHECK_NO_ALL_PURPOSE_CLUSTERS: &str = "no_all_purpose_clusters";

// Rule: secret scopes
pub const CHECK_PLATFORM_SECRET_SCOPE_EXISTS: &str = "platform_secret_scope_exists";

// Rule: workspace configuration
pub const CHECK_WORKSPACE_CONFIGURATION_BASELINE: &str = "workspace_configuration_baseline";

// Evaluator-level failures
pub const EVALUATOR_CLUSTER_POLICIES: &str = "cluster_policy_check";
pub const EVALUATOR_TAGS_COST_CONTROLS: &str = "tags_cost_controls_check";
pub const EVALUATOR_CLUSTERS: &str = "clusters_check";
pub const EVALUATOR_SECRET_SCOPES: &str = "secret_scopes_check";
pub const EVALUATOR_WORKSPACE_SETTINGS: &str = "workspace_settings_check";

/// All rule-branch check names, in evaluator order.
pub fn all_check_names() -> &'static [&'static str] {
    &[
        CHECK_CLUSTER_POLICY_EXISTS,
        CHECK_CLUSTER_POLICY_DEFINITION,
        CHECK_AUTO_TERMINATION_ENFORCED,
        CHECK_MAX_WORKERS_ENFORCED,
        CHECK_REQUIRED_TAGS_ENFORCED,
        CHECK_NO_ALL_PURPOSE_CLUSTERS,
        CHECK_PLATFORM_SECRET_SCOPE_EXISTS,
        CHECK_WORKSPACE_CONFIGURATION_BASELINE,
    ]
}
