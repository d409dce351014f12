use crate::evaluator::AuditContext;
use crate::gateway::{Gateway, GatewayError, ResourceKind};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Canned responses per resource kind; unknown kinds answer `{}`.
#[derive(Default)]
pub struct StaticGateway {
    responses: BTreeMap<ResourceKind, Result<Value, String>>,
    pub calls: RefCell<Vec<ResourceKind>>,
}

impl StaticGateway {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ResourceKind, value: Value) -> Self {
        self.responses.insert(kind, Ok(value));
        self
    }

    pub fn failing(mut self, kind: ResourceKind, message: &str) -> Self {
        self.responses.insert(kind, Err(message.to_string()));
        self
    }

    pub fn ctx(&self, dry_run: bool) -> AuditContext<'_> {
        AuditContext::new(self, dry_run)
    }
}

impl Gateway for StaticGateway {
    fn fetch(&self, kind: ResourceKind) -> Result<Value, GatewayError> {
        self.calls.borrow_mut().push(kind);
        match self.responses.get(&kind) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(GatewayError::Transport {
                kind,
                message: message.clone(),
            }),
            None => Ok(json!({})),
        }
    }
}

/// A policy listing containing `guardrails-default` with `definition` encoded as a string.
pub fn guardrails_policies(definition: Value) -> Value {
    json!({
        "policies": [
            { "policy_id": "ABC123", "name": "legacy-interactive", "definition": "{}" },
            {
                "policy_id": "E0631F5C0D00051E",
                "name": "guardrails-default",
                "definition": definition.to_string()
            }
        ]
    })
}

/// A definition that satisfies every policy rule.
pub fn compliant_definition() -> Value {
    json!({
        "autotermination_minutes": { "type": "range", "maxValue": 15, "defaultValue": 10 },
        "autoscale.max_workers": { "type": "range", "maxValue": 8 },
        "custom_tags.owner": { "type": "unlimited", "isOptional": false },
        "custom_tags.cost_center": { "type": "unlimited", "isOptional": false },
        "custom_tags.env": { "type": "allowlist", "values": ["dev", "staging", "prod"] }
    })
}
