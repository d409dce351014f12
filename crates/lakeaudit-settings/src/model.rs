use anyhow::Context;
use camino::Utf8PathBuf;
use std::fmt;
use std::time::Duration;

pub const ENV_HOST: &str = "DATABRICKS_HOST";
pub const ENV_TOKEN: &str = "DATABRICKS_TOKEN";
pub const ENV_TIMEOUT_SECONDS: &str = "DATABRICKS_AUDITOR_TIMEOUT_SECONDS";
pub const ENV_FIXTURES_DIR: &str = "DATABRICKS_AUDITOR_FIXTURES_DIR";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Run mode descriptor, constructed once per process and read-only afterwards.
///
/// `dry_run` is true iff either the host or the token is absent.
#[derive(Clone, PartialEq, Eq)]
pub struct AuditorConfig {
    host: Option<String>,
    token: Option<String>,
    dry_run: bool,
    timeout: Duration,
    fixtures_dir: Option<Utf8PathBuf>,
}

impl AuditorConfig {
    pub fn new(host: Option<String>, token: Option<String>) -> Self {
        let host = non_empty(host).map(|h| h.trim_end_matches('/').to_string());
        let token = non_empty(token);
        let dry_run = host.is_none() || token.is_none();
        Self {
            host,
            token,
            dry_run,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            fixtures_dir: None,
        }
    }

    /// Offline configuration replaying the bundled fixtures.
    pub fn dry_run() -> Self {
        Self::new(None, None)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fixtures_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.fixtures_dir = Some(dir.into());
        self
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut cfg = Self::new(lookup(ENV_HOST), lookup(ENV_TOKEN));

        if let Some(raw) = non_empty(lookup(ENV_TIMEOUT_SECONDS)) {
            cfg.timeout = parse_timeout(&raw)
                .with_context(|| format!("invalid {ENV_TIMEOUT_SECONDS}: {raw}"))?;
        }
        if let Some(dir) = non_empty(lookup(ENV_FIXTURES_DIR)) {
            cfg.fixtures_dir = Some(Utf8PathBuf::from(dir));
        }

        Ok(cfg)
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn fixtures_dir(&self) -> Option<&camino::Utf8Path> {
        self.fixtures_dir.as_deref()
    }

    /// Host for display; never includes the token.
    pub fn redacted_host(&self) -> &str {
        self.host.as_deref().unwrap_or("DRY-RUN")
    }
}

impl fmt::Debug for AuditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditorConfig")
            .field("host", &self.host)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("dry_run", &self.dry_run)
            .field("timeout", &self.timeout)
            .field("fixtures_dir", &self.fixtures_dir)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timeout(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw.trim().parse().context("expected a whole number of seconds")?;
    if secs == 0 {
        anyhow::bail!("timeout must be at least one second");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_credentials_force_dry_run() {
        let cfg = AuditorConfig::from_lookup(lookup(&[])).unwrap();
        assert!(cfg.is_dry_run());
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.redacted_host(), "DRY-RUN");

        let host_only =
            AuditorConfig::from_lookup(lookup(&[(ENV_HOST, "https://example.databricks.com")]))
                .unwrap();
        assert!(host_only.is_dry_run());

        let token_only = AuditorConfig::from_lookup(lookup(&[(ENV_TOKEN, "dapi123")])).unwrap();
        assert!(token_only.is_dry_run());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cfg = AuditorConfig::from_lookup(lookup(&[
            (ENV_HOST, "https://example.databricks.com"),
            (ENV_TOKEN, ""),
        ]))
        .unwrap();
        assert!(cfg.is_dry_run());
        assert_eq!(cfg.token(), None);
    }

    #[test]
    fn both_credentials_select_real_mode() {
        let cfg = AuditorConfig::from_lookup(lookup(&[
            (ENV_HOST, "https://example.databricks.com/"),
            (ENV_TOKEN, "dapi123456789"),
            (ENV_TIMEOUT_SECONDS, "5"),
        ]))
        .unwrap();
        assert!(!cfg.is_dry_run());
        assert_eq!(cfg.host(), Some("https://example.databricks.com"));
        assert_eq!(cfg.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn redacted_host_and_debug_never_leak_token() {
        let cfg = AuditorConfig::new(
            Some("https://example.databricks.com".to_string()),
            Some("dapi123456789".to_string()),
        );
        assert!(!cfg.redacted_host().contains("dapi"));
        assert!(cfg.redacted_host().contains("example.databricks.com"));
        assert!(!format!("{cfg:?}").contains("dapi123456789"));
    }

    #[test]
    fn invalid_timeout_is_a_configuration_error() {
        let err = AuditorConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECONDS, "soon")])).unwrap_err();
        assert!(format!("{err:#}").contains(ENV_TIMEOUT_SECONDS));

        assert!(AuditorConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECONDS, "0")])).is_err());
    }

    #[test]
    fn fixtures_dir_is_optional() {
        let cfg = AuditorConfig::from_lookup(lookup(&[(ENV_FIXTURES_DIR, "/tmp/fixtures")])).unwrap();
        assert_eq!(cfg.fixtures_dir().map(|p| p.as_str()), Some("/tmp/fixtures"));
        assert_eq!(AuditorConfig::dry_run().fixtures_dir(), None);
    }
}
