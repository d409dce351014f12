use crate::evaluator::EvalError;
use crate::model::{ClusterPolicy, PolicyList};
use serde_json::{Map, Value};

use super::GUARDRAILS_POLICY_NAME;

/// First policy named exactly `guardrails-default`; duplicates are not flagged.
pub fn find_guardrails_policy(list: &PolicyList) -> Option<&ClusterPolicy> {
    list.policies
        .iter()
        .find(|p| p.name.as_deref() == Some(GUARDRAILS_POLICY_NAME))
}

/// Raw definition text; a policy without one has an empty definition.
pub fn definition_text(policy: &ClusterPolicy) -> &str {
    policy.definition.as_deref().unwrap_or("{}")
}

/// Parse a policy definition. The document must be a JSON object.
pub fn parse_definition(text: &str) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(text)
}

/// `definition[field].maxValue`, if the section is an object that carries a non-null one.
pub fn max_value<'a>(definition: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    definition
        .get(field)
        .and_then(Value::as_object)
        .and_then(|section| section.get("maxValue"))
        .filter(|v| !v.is_null())
}

pub fn require_number(field: &str, value: &Value) -> Result<f64, EvalError> {
    value.as_f64().ok_or_else(|| EvalError::InvalidField {
        field: format!("{field}.maxValue"),
        message: format!("expected a number, got {value}"),
    })
}

/// Truthiness of a policy section: null, false, zero and empty values are not enforced.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

pub fn section_or_empty(definition: &Map<String, Value>, field: &str) -> Value {
    definition
        .get(field)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

pub fn names<'a>(items: impl Iterator<Item = Option<&'a String>>) -> Value {
    Value::Array(
        items
            .map(|name| name.map_or(Value::Null, |n| Value::String(n.clone())))
            .collect(),
    )
}
