use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Supporting evidence attached to a finding.
pub type Details = Map<String, Value>;

/// Outcome of a single rule branch, ordered by badness: `Ok < Warn < Fail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok,
    Warn,
    Fail,
}

impl Severity {
    /// Rendering order for grouped output: worst first.
    pub const WORST_FIRST: [Severity; 3] = [Severity::Fail, Severity::Warn, Severity::Ok];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warn => "WARN",
            Severity::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FindingError {
    #[error("finding check_name must not be empty")]
    EmptyCheckName,
    #[error("finding '{check_name}' has an empty message")]
    EmptyMessage { check_name: String },
}

/// One evaluation outcome.
///
/// Findings are validated once at construction and are immutable afterwards; the
/// only way to attach evidence is the consuming [`Finding::with_detail`] builder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFinding")]
pub struct Finding {
    check_name: String,
    severity: Severity,
    message: String,
    details: Details,
}

#[derive(Deserialize)]
struct RawFinding {
    check_name: String,
    severity: Severity,
    message: String,
    #[serde(default)]
    details: Details,
}

impl TryFrom<RawFinding> for Finding {
    type Error = FindingError;

    fn try_from(raw: RawFinding) -> Result<Self, Self::Error> {
        Finding::new(raw.check_name, raw.severity, raw.message).map(|f| f.with_details(raw.details))
    }
}

impl Finding {
    pub fn new(
        check_name: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Result<Self, FindingError> {
        let check_name = check_name.into();
        let message = message.into();
        if check_name.trim().is_empty() {
            return Err(FindingError::EmptyCheckName);
        }
        if message.trim().is_empty() {
            return Err(FindingError::EmptyMessage { check_name });
        }
        Ok(Self {
            check_name,
            severity,
            message,
            details: Details::new(),
        })
    }

    pub fn ok(check_name: &str, message: impl Into<String>) -> Result<Self, FindingError> {
        Self::new(check_name, Severity::Ok, message)
    }

    pub fn warn(check_name: &str, message: impl Into<String>) -> Result<Self, FindingError> {
        Self::new(check_name, Severity::Warn, message)
    }

    pub fn fail(check_name: &str, message: impl Into<String>) -> Result<Self, FindingError> {
        Self::new(check_name, Severity::Fail, message)
    }

    /// Synthetic `FAIL` finding for an evaluator that could not complete.
    ///
    /// Infallible: the message always carries the evaluator name.
    pub fn evaluator_failure(evaluator: &str, cause: &str) -> Self {
        let mut details = Details::new();
        details.insert("error".to_string(), Value::String(cause.to_string()));
        Self {
            check_name: evaluator.to_string(),
            severity: Severity::Fail,
            message: format!("Check {evaluator} failed: {cause}"),
            details,
        }
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }

    pub fn check_name(&self) -> &str {
        &self.check_name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &Details {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_is_ordered_by_badness() {
        assert!(Severity::Ok < Severity::Warn);
        assert!(Severity::Warn < Severity::Fail);
        assert_eq!(
            Severity::WORST_FIRST.iter().max(),
            Some(&Severity::Fail)
        );
    }

    #[test]
    fn severity_serializes_uppercase() {
        assert_eq!(serde_json::to_value(Severity::Warn).unwrap(), json!("WARN"));
        assert_eq!(
            serde_json::from_value::<Severity>(json!("FAIL")).unwrap(),
            Severity::Fail
        );
        assert!(serde_json::from_value::<Severity>(json!("ERROR")).is_err());
    }

    #[test]
    fn empty_message_is_rejected() {
        let err = Finding::ok("check", "  ").unwrap_err();
        assert_eq!(
            err,
            FindingError::EmptyMessage {
                check_name: "check".to_string()
            }
        );
        assert_eq!(Finding::ok("", "msg").unwrap_err(), FindingError::EmptyCheckName);
    }

    #[test]
    fn details_default_to_empty_and_accumulate() {
        let finding = Finding::warn("check", "msg").unwrap();
        assert!(finding.details().is_empty());

        let finding = finding
            .with_detail("count", 3)
            .with_detail("names", json!(["a", "b"]));
        assert_eq!(finding.details()["count"], 3);
        assert_eq!(finding.details()["names"], json!(["a", "b"]));
    }

    #[test]
    fn deserialization_validates_and_defaults_details() {
        let finding: Finding = serde_json::from_value(json!({
            "check_name": "check",
            "severity": "OK",
            "message": "fine"
        }))
        .unwrap();
        assert!(finding.details().is_empty());

        let err = serde_json::from_value::<Finding>(json!({
            "check_name": "check",
            "severity": "OK",
            "message": ""
        }));
        assert!(err.is_err());
    }

    #[test]
    fn evaluator_failure_carries_cause() {
        let finding = Finding::evaluator_failure("clusters_check", "connection refused");
        assert_eq!(finding.severity(), Severity::Fail);
        assert_eq!(finding.check_name(), "clusters_check");
        assert_eq!(finding.details()["error"], "connection refused");
        assert!(finding.message().contains("connection refused"));
    }
}
