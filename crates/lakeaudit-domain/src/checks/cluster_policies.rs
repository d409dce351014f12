use crate::checks::utils::{
    definition_text, find_guardrails_policy, max_value, names, parse_definition, require_number,
    section_or_empty,
};
use crate::evaluator::{AuditContext, EvalError, Evaluator};
use crate::gateway::ResourceKind;
use crate::model::PolicyList;
use lakeaudit_types::{Finding, ids};

pub const GUARDRAILS_POLICY_NAME: &str = "guardrails-default";

/// Upper bound for `autotermination_minutes.maxValue`.
pub const AUTO_TERMINATION_MAX_MINUTES: f64 = 15.0;

const AUTO_TERMINATION_FIELD: &str = "autotermination_minutes";

/// Guardrails policy exists and enforces auto-termination.
pub struct ClusterPolicies;

impl Evaluator for ClusterPolicies {
    fn name(&self) -> &'static str {
        ids::EVALUATOR_CLUSTER_POLICIES
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Result<Vec<Finding>, EvalError> {
        let list: PolicyList = ctx.fetch_as(ResourceKind::ClusterPolicies)?;
        let mut out = Vec::new();

        let Some(policy) = find_guardrails_policy(&list) else {
            out.push(
                Finding::fail(
                    ids::CHECK_CLUSTER_POLICY_EXISTS,
                    format!("Guardrails cluster policy '{GUARDRAILS_POLICY_NAME}' not found"),
                )?
                .with_detail(
                    "available_policies",
                    names(list.policies.iter().map(|p| p.name.as_ref())),
                ),
            );
            return Ok(out);
        };

        out.push(
            Finding::ok(
                ids::CHECK_CLUSTER_POLICY_EXISTS,
                format!("Guardrails cluster policy '{GUARDRAILS_POLICY_NAME}' exists"),
            )?
            .with_detail("policy_id", policy.policy_id.clone()),
        );

        let text = definition_text(policy);
        let definition = match parse_definition(text) {
            Ok(definition) => definition,
            Err(err) => {
                out.push(
                    Finding::fail(
                        ids::CHECK_CLUSTER_POLICY_DEFINITION,
                        "Failed to parse cluster policy definition",
                    )?
                    .with_detail("definition", text)
                    .with_detail("error", err.to_string()),
                );
                return Ok(out);
            }
        };

        let finding = match max_value(&definition, AUTO_TERMINATION_FIELD) {
            None => Finding::warn(
                ids::CHECK_AUTO_TERMINATION_ENFORCED,
                "Auto-termination not enforced in policy",
            )?
            .with_detail(
                "policy_section",
                section_or_empty(&definition, AUTO_TERMINATION_FIELD),
            ),
            Some(raw) => {
                let minutes = require_number(AUTO_TERMINATION_FIELD, raw)?;
                if minutes <= AUTO_TERMINATION_MAX_MINUTES {
                    Finding::ok(
                        ids::CHECK_AUTO_TERMINATION_ENFORCED,
                        format!("Auto-termination enforced at {raw} minutes (≤15)"),
                    )?
                    .with_detail("max_value", raw.clone())
                } else {
                    Finding::fail(
                        ids::CHECK_AUTO_TERMINATION_ENFORCED,
                        format!("Auto-termination max value {raw} exceeds 15 minutes"),
                    )?
                    .with_detail("max_value", raw.clone())
                    .with_detail("expected", "≤15")
                }
            }
        };
        out.push(finding);

        Ok(out)
    }
}
