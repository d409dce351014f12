use serde::{Deserialize, Serialize};
use std::fmt;
use time::{OffsetDateTime, UtcOffset};

pub const DEFAULT_BASE_PATH: &str = "dbfs:/tmp/guardrails_demo";

/// Medallion layer a metric belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Bronze,
    Silver,
    Gold,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Bronze, Layer::Silver, Layer::Gold];

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Bronze => "bronze",
            Layer::Silver => "silver",
            Layer::Gold => "gold",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table locations derived from one base path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelinePaths {
    base: String,
}

impl PipelinePaths {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn layer(&self, layer: Layer) -> String {
        format!("{}/{}", self.base, layer)
    }

    pub fn metrics(&self) -> String {
        format!("{}/metrics", self.base)
    }
}

impl Default for PipelinePaths {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

/// Run id for an unparameterised run: the UTC time as `YYYYMMDDHHMMSS`.
pub fn default_run_id(now: OffsetDateTime) -> String {
    let t = now.to_offset(UtcOffset::UTC);
    format!(
        "{:04}{:02}{:02}{:02}{:02}{:02}",
        t.year(),
        u8::from(t.month()),
        t.day(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// First non-empty of: job widget value, environment value, default.
pub fn resolve_param(widget: Option<&str>, env: Option<&str>, default: &str) -> String {
    [widget, env]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}
