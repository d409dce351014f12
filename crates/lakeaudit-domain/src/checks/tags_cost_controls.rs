use crate::checks::utils::{
    definition_text, find_guardrails_policy, is_truthy, max_value, parse_definition,
    require_number, section_or_empty,
};
use crate::evaluator::{AuditContext, EvalError, Evaluator};
use crate::gateway::ResourceKind;
use crate::model::PolicyList;
use lakeaudit_types::{Finding, ids};
use serde_json::{Map, Value};

/// Upper bound for every `maxValue` on a worker-count field.
pub const MAX_WORKERS_LIMIT: f64 = 8.0;

/// Tag keys every cluster must carry, in reporting order.
pub const REQUIRED_TAGS: [&str; 3] = ["owner", "cost_center", "env"];

const MAX_WORKERS_FIELDS: [&str; 2] = ["autoscale.max_workers", "num_workers"];

/// Worker caps and required tags on the guardrails policy.
///
/// Silent when the policy or its definition is missing or unparseable: the cluster
/// policy rule already reports that.
pub struct TagsCostControls;

impl Evaluator for TagsCostControls {
    fn name(&self) -> &'static str {
        ids::EVALUATOR_TAGS_COST_CONTROLS
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Result<Vec<Finding>, EvalError> {
        let list: PolicyList = ctx.fetch_as(ResourceKind::ClusterPolicies)?;
        let Some(policy) = find_guardrails_policy(&list) else {
            return Ok(Vec::new());
        };
        if policy.definition.is_none() {
            return Ok(Vec::new());
        }
        let Ok(definition) = parse_definition(definition_text(policy)) else {
            return Ok(Vec::new());
        };

        Ok(vec![
            max_workers_finding(&definition)?,
            required_tags_finding(&definition)?,
        ])
    }
}

fn max_workers_finding(definition: &Map<String, Value>) -> Result<Finding, EvalError> {
    let mut values: Vec<(f64, &Value)> = Vec::new();
    for field in MAX_WORKERS_FIELDS {
        if let Some(raw) = max_value(definition, field) {
            values.push((require_number(field, raw)?, raw));
        }
    }

    let Some(&(max, max_raw)) = values.iter().max_by(|a, b| a.0.total_cmp(&b.0)) else {
        let sections: Vec<Value> = MAX_WORKERS_FIELDS
            .iter()
            .map(|field| section_or_empty(definition, field))
            .collect();
        return Ok(Finding::warn(
            ids::CHECK_MAX_WORKERS_ENFORCED,
            "Max workers not enforced in policy",
        )?
        .with_detail("policy_sections", sections));
    };

    let max_values: Vec<Value> = values.iter().map(|(_, raw)| (*raw).clone()).collect();
    if max <= MAX_WORKERS_LIMIT {
        Ok(Finding::ok(
            ids::CHECK_MAX_WORKERS_ENFORCED,
            format!("Max workers enforced at {max_raw} (≤8)"),
        )?
        .with_detail("max_values", max_values))
    } else {
        Ok(Finding::fail(
            ids::CHECK_MAX_WORKERS_ENFORCED,
            format!("Max workers {max_raw} exceeds 8"),
        )?
        .with_detail("max_values", max_values)
        .with_detail("expected", "≤8"))
    }
}

fn required_tags_finding(definition: &Map<String, Value>) -> Result<Finding, EvalError> {
    let mut configured = Map::new();
    let mut missing: Vec<&str> = Vec::new();
    for tag in REQUIRED_TAGS {
        let section = section_or_empty(definition, &format!("custom_tags.{tag}"));
        if !is_truthy(&section) {
            missing.push(tag);
        }
        configured.insert(tag.to_string(), section);
    }

    if missing.is_empty() {
        Ok(Finding::ok(
            ids::CHECK_REQUIRED_TAGS_ENFORCED,
            format!("All required tags enforced: {}", REQUIRED_TAGS.join(", ")),
        )?
        .with_detail("tags", configured))
    } else {
        Ok(Finding::fail(
            ids::CHECK_REQUIRED_TAGS_ENFORCED,
            format!("Missing required tags in policy: {}", missing.join(", ")),
        )?
        .with_detail("missing_tags", missing)
        .with_detail("configured_tags", configured))
    }
}
