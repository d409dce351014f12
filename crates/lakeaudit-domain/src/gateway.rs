//! The data source port. Implementations live in `lakeaudit-gateway`.

use serde_json::Value;
use std::fmt;

/// Resource listings the auditor knows how to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    ClusterPolicies,
    Clusters,
    SecretScopes,
    WorkspaceConf,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::ClusterPolicies,
        ResourceKind::Clusters,
        ResourceKind::SecretScopes,
        ResourceKind::WorkspaceConf,
    ];

    /// Path relative to `{host}/api/2.0/`.
    pub fn api_path(self) -> &'static str {
        match self {
            ResourceKind::ClusterPolicies => "policies/clusters/list",
            ResourceKind::Clusters => "clusters/list",
            ResourceKind::SecretScopes => "secrets/scopes/list",
            ResourceKind::WorkspaceConf => "workspace-conf",
        }
    }

    /// Fixture file replayed in dry-run mode.
    pub fn fixture_name(self) -> &'static str {
        match self {
            ResourceKind::ClusterPolicies => "sample_policies.json",
            ResourceKind::Clusters => "sample_clusters.json",
            ResourceKind::SecretScopes => "sample_secrets.json",
            ResourceKind::WorkspaceConf => "sample_workspace_conf.json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::ClusterPolicies => "cluster policies",
            ResourceKind::Clusters => "clusters",
            ResourceKind::SecretScopes => "secret scopes",
            ResourceKind::WorkspaceConf => "workspace configuration",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("host and token are required for real mode")]
    MissingCredentials,
    #[error("{kind} request failed: {message}")]
    Transport { kind: ResourceKind, message: String },
    #[error("{kind} request returned HTTP {status}")]
    Status { kind: ResourceKind, status: u16 },
    #[error("{kind} response is not valid JSON: {message}")]
    Decode { kind: ResourceKind, message: String },
    #[error("fixture {name} could not be loaded: {message}")]
    Fixture { name: String, message: String },
}

/// Fetches the raw JSON listing for one resource kind.
///
/// An empty object means "kind not found"; callers route it through their normal
/// missing-resource branch. No caching: every call re-fetches.
pub trait Gateway {
    fn fetch(&self, kind: ResourceKind) -> Result<Value, GatewayError>;
}

impl<G: Gateway + ?Sized> Gateway for &G {
    fn fetch(&self, kind: ResourceKind) -> Result<Value, GatewayError> {
        (**self).fetch(kind)
    }
}

impl<G: Gateway + ?Sized> Gateway for Box<G> {
    fn fetch(&self, kind: ResourceKind) -> Result<Value, GatewayError> {
        (**self).fetch(kind)
    }
}
