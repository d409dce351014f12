use crate::checks::utils::names;
use crate::evaluator::{AuditContext, EvalError, Evaluator};
use crate::gateway::ResourceKind;
use crate::model::ScopeList;
use lakeaudit_types::{Finding, ids};

pub const PLATFORM_SCOPE_NAME: &str = "platform";

/// The shared `platform` secret scope exists.
pub struct SecretScopes;

impl Evaluator for SecretScopes {
    fn name(&self) -> &'static str {
        ids::EVALUATOR_SECRET_SCOPES
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Result<Vec<Finding>, EvalError> {
        let list: ScopeList = ctx.fetch_as(ResourceKind::SecretScopes)?;

        let platform = list
            .scopes
            .iter()
            .find(|s| s.name.as_deref() == Some(PLATFORM_SCOPE_NAME));

        let finding = match platform {
            Some(scope) => Finding::ok(
                ids::CHECK_PLATFORM_SECRET_SCOPE_EXISTS,
                format!("Platform secret scope '{PLATFORM_SCOPE_NAME}' exists"),
            )?
            .with_detail("scope_name", PLATFORM_SCOPE_NAME)
            .with_detail("backend_type", scope.backend_type.clone()),
            None => Finding::fail(
                ids::CHECK_PLATFORM_SECRET_SCOPE_EXISTS,
                format!("Platform secret scope '{PLATFORM_SCOPE_NAME}' not found"),
            )?
            .with_detail(
                "available_scopes",
                names(list.scopes.iter().map(|s| s.name.as_ref())),
            ),
        };
        Ok(vec![finding])
    }
}
