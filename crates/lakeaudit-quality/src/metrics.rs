use crate::Layer;
use lakeaudit_types::{Details, Severity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `numerator / denominator` rounded to 4 decimal places with ties to even; `0.0` for an
/// empty denominator.
pub fn rate(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let ratio = numerator as f64 / denominator as f64;
    (ratio * 10_000.0).round_ties_even() / 10_000.0
}

/// Outcome of one column-level quality rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub metric_name: String,
    pub status: Severity,
    pub value: u64,
    pub details: Details,
}

impl QualityCheck {
    pub fn into_record(self, run_id: &str, layer: Layer) -> MetricRecord {
        build_metric_record(
            run_id,
            layer,
            &self.metric_name,
            self.status,
            Some(Value::from(self.value)),
            Some(self.details),
        )
    }
}

fn pass_fail(ok: bool) -> Severity {
    if ok { Severity::Ok } else { Severity::Fail }
}

pub fn evaluate_non_null(column: &str, total_rows: u64, null_rows: u64) -> QualityCheck {
    let mut details = Details::new();
    details.insert("null_rows".to_string(), null_rows.into());
    details.insert("total_rows".to_string(), total_rows.into());
    details.insert("null_rate".to_string(), rate(null_rows, total_rows).into());

    QualityCheck {
        metric_name: format!("{column}_non_null"),
        status: pass_fail(null_rows == 0),
        value: null_rows,
        details,
    }
}

pub fn evaluate_uniqueness(column: &str, total_rows: u64, distinct_rows: u64) -> QualityCheck {
    let mut details = Details::new();
    details.insert("distinct_rows".to_string(), distinct_rows.into());
    details.insert("total_rows".to_string(), total_rows.into());
    details.insert(
        "distinct_rate".to_string(),
        rate(distinct_rows, total_rows).into(),
    );

    QualityCheck {
        metric_name: format!("{column}_unique"),
        status: pass_fail(total_rows == distinct_rows),
        value: distinct_rows,
        details,
    }
}

/// One row of the metrics table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub run_id: String,
    pub layer: Layer,
    pub metric: String,
    pub status: Severity,
    pub value: Option<Value>,
    #[serde(default)]
    pub details: Details,
}

pub fn build_metric_record(
    run_id: &str,
    layer: Layer,
    metric_name: &str,
    status: Severity,
    value: Option<Value>,
    details: Option<Details>,
) -> MetricRecord {
    MetricRecord {
        run_id: run_id.to_string(),
        layer,
        metric: metric_name.to_string(),
        status,
        value,
        details: details.unwrap_or_default(),
    }
}

/// The `row_count` metric every layer records; always `OK`.
pub fn row_count(run_id: &str, layer: Layer, rows: u64) -> MetricRecord {
    build_metric_record(
        run_id,
        layer,
        "row_count",
        Severity::Ok,
        Some(rows.into()),
        None,
    )
}
