//! Data-quality helpers for the bronze/silver/gold demo pipeline.
//!
//! The dataframe engine reduces each table to scalar counts; everything here works on
//! those counts only, so it runs without a cluster.

#![forbid(unsafe_code)]

mod metrics;
mod pipeline;

pub use metrics::{
    MetricRecord, QualityCheck, build_metric_record, evaluate_non_null, evaluate_uniqueness,
    rate, row_count,
};
pub use pipeline::{DEFAULT_BASE_PATH, Layer, PipelinePaths, default_run_id, resolve_param};
