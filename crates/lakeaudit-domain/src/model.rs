//! Typed views over the listing payloads.
//!
//! Only the fields the rules read are modelled; everything else is ignored. A listing
//! key that is absent decodes as an empty list.

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PolicyList {
    #[serde(default)]
    pub policies: Vec<ClusterPolicy>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClusterPolicy {
    #[serde(default)]
    pub policy_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Policy definition, itself a JSON document encoded as a string.
    #[serde(default)]
    pub definition: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClusterList {
    #[serde(default)]
    pub clusters: Vec<ClusterInfo>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClusterInfo {
    #[serde(default)]
    pub cluster_id: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub cluster_source: Option<String>,
}

impl ClusterInfo {
    /// Anything not launched by a job counts as all-purpose, including a missing source.
    pub fn is_all_purpose(&self) -> bool {
        self.cluster_source.as_deref() != Some("JOB")
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScopeList {
    #[serde(default)]
    pub scopes: Vec<SecretScope>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SecretScope {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub backend_type: Option<String>,
}
