//! Adapters for the [`Gateway`] port: fixture replay for dry-run, blocking HTTP for real mode.

#![forbid(unsafe_code)]

mod fixture;
mod http;

pub use fixture::FixtureGateway;
pub use http::HttpGateway;

use lakeaudit_domain::{Gateway, GatewayError};
use lakeaudit_settings::AuditorConfig;

/// Pick the adapter for the configured run mode.
pub fn build_gateway(config: &AuditorConfig) -> anyhow::Result<Box<dyn Gateway>> {
    if config.is_dry_run() {
        let gateway = match config.fixtures_dir() {
            Some(dir) => FixtureGateway::from_dir(dir.to_path_buf()),
            None => FixtureGateway::bundled(),
        };
        tracing::info!(fixtures = %gateway.describe(), "using fixture gateway");
        return Ok(Box::new(gateway));
    }

    let (Some(host), Some(token)) = (config.host(), config.token()) else {
        return Err(GatewayError::MissingCredentials.into());
    };
    let gateway = HttpGateway::new(host, token, config.timeout())?;
    tracing::info!(host = %config.redacted_host(), "using HTTP gateway");
    Ok(Box::new(gateway))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakeaudit_domain::ResourceKind;
    use std::time::Duration;

    #[test]
    fn dry_run_config_replays_bundled_fixtures() {
        let gateway = build_gateway(&AuditorConfig::dry_run()).unwrap();
        let policies = gateway.fetch(ResourceKind::ClusterPolicies).unwrap();
        assert_eq!(policies["policies"][0]["name"], "guardrails-default");
    }

    #[test]
    fn fixtures_dir_override_is_honoured() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("sample_secrets.json"),
            r#"{"scopes": [{"name": "custom"}]}"#,
        )
        .unwrap();
        let dir = camino::Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();

        let gateway = build_gateway(&AuditorConfig::dry_run().with_fixtures_dir(dir)).unwrap();

        let scopes = gateway.fetch(ResourceKind::SecretScopes).unwrap();
        assert_eq!(scopes["scopes"][0]["name"], "custom");
    }

    #[test]
    fn real_mode_builds_http_gateway() {
        let config = AuditorConfig::new(
            Some("https://example.cloud.databricks.com".to_string()),
            Some("dapi-secret".to_string()),
        )
        .with_timeout(Duration::from_secs(1));
        assert!(!config.is_dry_run());
        assert!(build_gateway(&config).is_ok());
    }
}
