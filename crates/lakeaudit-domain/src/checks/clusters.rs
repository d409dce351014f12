use crate::evaluator::{AuditContext, EvalError, Evaluator};
use crate::gateway::ResourceKind;
use crate::model::{ClusterInfo, ClusterList};
use lakeaudit_types::{Finding, ids};
use serde_json::{Value, json};

/// No all-purpose (interactive) clusters are running.
pub struct Clusters;

impl Evaluator for Clusters {
    fn name(&self) -> &'static str {
        ids::EVALUATOR_CLUSTERS
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Result<Vec<Finding>, EvalError> {
        let list: ClusterList = ctx.fetch_as(ResourceKind::Clusters)?;

        if list.clusters.is_empty() {
            return Ok(vec![
                Finding::ok(
                    ids::CHECK_NO_ALL_PURPOSE_CLUSTERS,
                    "No clusters currently running",
                )?
                .with_detail("cluster_count", 0),
            ]);
        }

        let all_purpose: Vec<Value> = list
            .clusters
            .iter()
            .filter(|c| c.is_all_purpose())
            .map(cluster_summary)
            .collect();

        // Fixture rosters are not live; never pass or fail on them.
        if ctx.dry_run {
            tracing::debug!(
                clusters = list.clusters.len(),
                all_purpose = all_purpose.len(),
                "cluster classification skipped in dry-run"
            );
            return Ok(vec![
                Finding::warn(
                    ids::CHECK_NO_ALL_PURPOSE_CLUSTERS,
                    "DRY-RUN: Cannot validate cluster types from fixture data",
                )?
                .with_detail("cluster_count", list.clusters.len()),
            ]);
        }

        let finding = if all_purpose.is_empty() {
            Finding::ok(
                ids::CHECK_NO_ALL_PURPOSE_CLUSTERS,
                "No all-purpose clusters detected",
            )?
            .with_detail("cluster_count", list.clusters.len())
        } else {
            Finding::fail(
                ids::CHECK_NO_ALL_PURPOSE_CLUSTERS,
                format!("Found {} all-purpose cluster(s)", all_purpose.len()),
            )?
            .with_detail("clusters", all_purpose)
        };
        Ok(vec![finding])
    }
}

fn cluster_summary(cluster: &ClusterInfo) -> Value {
    json!({
        "cluster_id": cluster.cluster_id,
        "cluster_name": cluster.cluster_name,
        "state": cluster.state,
        "cluster_source": cluster.cluster_source,
    })
}
