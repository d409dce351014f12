use camino::{Utf8Path, Utf8PathBuf};
use lakeaudit_domain::{Gateway, GatewayError, ResourceKind};
use serde_json::{Map, Value};

/// Serves canned listings instead of calling the API.
#[derive(Clone, Debug)]
pub struct FixtureGateway {
    source: FixtureSource,
}

#[derive(Clone, Debug)]
enum FixtureSource {
    /// Fixtures compiled into the binary.
    Bundled,
    Dir(Utf8PathBuf),
}

impl FixtureGateway {
    pub fn bundled() -> Self {
        Self {
            source: FixtureSource::Bundled,
        }
    }

    pub fn from_dir(dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source: FixtureSource::Dir(dir.into()),
        }
    }

    pub fn describe(&self) -> String {
        match &self.source {
            FixtureSource::Bundled => "bundled".to_string(),
            FixtureSource::Dir(dir) => dir.to_string(),
        }
    }

    fn load_from_dir(dir: &Utf8Path, name: &str) -> Result<Value, GatewayError> {
        let path = dir.join(name);
        if !path.exists() {
            tracing::warn!(fixture = name, dir = %dir, "fixture not found; treating as empty");
            return Ok(Value::Object(Map::new()));
        }
        let text = std::fs::read_to_string(&path).map_err(|e| GatewayError::Fixture {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        parse(name, &text)
    }
}

fn bundled_text(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::ClusterPolicies => include_str!("../fixtures/sample_policies.json"),
        ResourceKind::Clusters => include_str!("../fixtures/sample_clusters.json"),
        ResourceKind::SecretScopes => include_str!("../fixtures/sample_secrets.json"),
        ResourceKind::WorkspaceConf => include_str!("../fixtures/sample_workspace_conf.json"),
    }
}

fn parse(name: &str, text: &str) -> Result<Value, GatewayError> {
    serde_json::from_str(text).map_err(|e| GatewayError::Fixture {
        name: name.to_string(),
        message: e.to_string(),
    })
}

impl Gateway for FixtureGateway {
    fn fetch(&self, kind: ResourceKind) -> Result<Value, GatewayError> {
        let name = kind.fixture_name();
        tracing::info!(resource = %kind, fixture = name, "DRY-RUN: loading fixture");
        match &self.source {
            FixtureSource::Bundled => parse(name, bundled_text(kind)),
            FixtureSource::Dir(dir) => Self::load_from_dir(dir, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_gateway() -> (tempfile::TempDir, FixtureGateway) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        (tmp, FixtureGateway::from_dir(dir))
    }

    #[test]
    fn every_bundled_fixture_is_a_json_object() {
        let gateway = FixtureGateway::bundled();
        for kind in ResourceKind::ALL {
            let value = gateway.fetch(kind).unwrap();
            assert!(value.is_object(), "{kind}");
        }
    }

    #[test]
    fn missing_fixture_file_is_empty_object() {
        let (_tmp, gateway) = temp_gateway();
        assert_eq!(gateway.fetch(ResourceKind::Clusters).unwrap(), json!({}));
    }

    #[test]
    fn invalid_fixture_file_is_an_error() {
        let (tmp, gateway) = temp_gateway();
        std::fs::write(tmp.path().join("sample_clusters.json"), "{ nope").unwrap();

        let err = gateway.fetch(ResourceKind::Clusters).unwrap_err();
        assert!(matches!(err, GatewayError::Fixture { ref name, .. } if name == "sample_clusters.json"));
    }

    #[test]
    fn directory_fixture_is_read_verbatim() {
        let (tmp, gateway) = temp_gateway();
        std::fs::write(
            tmp.path().join("sample_workspace_conf.json"),
            r#"{"enableTokensConfig": "false"}"#,
        )
        .unwrap();

        assert_eq!(
            gateway.fetch(ResourceKind::WorkspaceConf).unwrap(),
            json!({"enableTokensConfig": "false"})
        );
    }
}
