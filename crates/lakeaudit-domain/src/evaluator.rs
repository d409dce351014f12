use crate::gateway::{Gateway, GatewayError, ResourceKind};
use lakeaudit_types::{Finding, FindingError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Read-only inputs shared by every evaluator in a run.
#[derive(Clone, Copy)]
pub struct AuditContext<'a> {
    pub gateway: &'a dyn Gateway,
    pub dry_run: bool,
}

impl<'a> AuditContext<'a> {
    pub fn new(gateway: &'a dyn Gateway, dry_run: bool) -> Self {
        Self { gateway, dry_run }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.dry_run { "DRY-RUN" } else { "REAL" }
    }

    /// Fetch `kind` and decode it into a typed listing.
    pub fn fetch_as<T: DeserializeOwned>(&self, kind: ResourceKind) -> Result<T, EvalError> {
        let value = self.gateway.fetch(kind)?;
        serde_json::from_value(value).map_err(|e| EvalError::Decode {
            kind,
            message: e.to_string(),
        })
    }

    pub fn fetch_raw(&self, kind: ResourceKind) -> Result<Value, EvalError> {
        Ok(self.gateway.fetch(kind)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("unexpected {kind} payload: {message}")]
    Decode { kind: ResourceKind, message: String },
    #[error("policy field {field} is invalid: {message}")]
    InvalidField { field: String, message: String },
    #[error(transparent)]
    InvalidFinding(#[from] FindingError),
}

/// One compliance rule set.
///
/// `evaluate` may fail; callers go through [`evaluate_checked`], which never does.
pub trait Evaluator {
    /// Check name used for the synthetic finding when evaluation fails.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Result<Vec<Finding>, EvalError>;
}

/// Run `evaluator`, converting any failure into exactly one `FAIL` finding.
pub fn evaluate_checked(evaluator: &dyn Evaluator, ctx: &AuditContext<'_>) -> Vec<Finding> {
    match evaluator.evaluate(ctx) {
        Ok(findings) => findings,
        Err(err) => {
            let cause = err.to_string();
            tracing::error!(check = evaluator.name(), error = %cause, "check failed");
            vec![Finding::evaluator_failure(evaluator.name(), &cause)]
        }
    }
}
