//! Gait module - per-frame gait metric derivation
//!
//! Re-exports only. All logic in submodules.

mod evaluator;
mod metrics;

pub use evaluator::GaitMetricsEvaluator;
pub use metrics::{GaitMetric, GaitMetrics, MetricValue};
