//! Pure rule evaluation (IO only through the [`Gateway`] port).
//!
//! Input: a gateway that serves raw JSON listings per resource kind.
//! Output: an ordered list of findings, one evaluator after another.

#![forbid(unsafe_code)]

pub mod checks;
pub mod evaluator;
pub mod gateway;
pub mod model;

#[cfg(test)]
pub(crate) mod test_support;

pub use checks::{EVALUATORS, run_all};
pub use evaluator::{AuditContext, EvalError, Evaluator, evaluate_checked};
pub use gateway::{Gateway, GatewayError, ResourceKind};
