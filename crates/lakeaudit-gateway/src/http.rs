use anyhow::Context;
use lakeaudit_domain::{Gateway, GatewayError, ResourceKind};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use std::time::Duration;

/// Authenticated GETs against `{host}/api/2.0/`. No retries, no caching.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    pub fn new(host: &str, token: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            client,
            base_url: format!("{}/api/2.0", host.trim_end_matches('/')),
            token: token.to_string(),
        })
    }

    pub fn url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.api_path())
    }

    fn get(&self, kind: ResourceKind) -> Result<Value, GatewayError> {
        let response = self
            .client
            .get(self.url(kind))
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| GatewayError::Transport {
                kind,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                kind,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| GatewayError::Transport {
            kind,
            message: e.to_string(),
        })?;
        decode_body(kind, &body)
    }
}

/// An empty body is an empty listing.
fn decode_body(kind: ResourceKind, body: &str) -> Result<Value, GatewayError> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|e| GatewayError::Decode {
        kind,
        message: e.to_string(),
    })
}

impl Gateway for HttpGateway {
    fn fetch(&self, kind: ResourceKind) -> Result<Value, GatewayError> {
        tracing::debug!(resource = %kind, path = kind.api_path(), "GET");
        match self.get(kind) {
            Ok(value) => Ok(value),
            // Often needs admin rights; report it as unavailable instead of failing the check.
            Err(err) if kind == ResourceKind::WorkspaceConf => {
                tracing::warn!(error = %err, "failed to fetch workspace configuration");
                Ok(Value::Object(Map::new()))
            }
            Err(err) => {
                tracing::error!(resource = %kind, error = %err, "API request failed");
                Err(err)
            }
        }
    }
}
