//! Threshold Evaluator - maps one value to a status.
//!
//! Boundaries are inclusive for both polarities: a value exactly at a
//! threshold takes that threshold's severity. Any number is accepted;
//! NaN fails every comparison and classifies as normal.

use crate::registry::{MetricDefinition, MetricRegistry, Polarity};
use crate::status::{Evaluation, Status};

/// Classify a value against an already-resolved definition
pub fn classify(metric: &MetricDefinition, value: f64) -> Status {
    let t = &metric.thresholds;
    match metric.polarity {
        Polarity::LowerIsWorse => {
            if value <= t.critical {
                Status::Critical
            } else if value <= t.warning {
                Status::Warning
            } else {
                Status::Normal
            }
        }
        Polarity::HigherIsWorse => {
            if value >= t.critical {
                Status::Critical
            } else if value >= t.warning {
                Status::Warning
            } else {
                Status::Normal
            }
        }
    }
}

impl MetricRegistry {
    /// Evaluate a value for a metric id; unknown ids yield `Evaluation::Unknown`
    pub fn evaluate(&self, metric_id: &str, value: f64) -> Evaluation {
        match self.lookup(metric_id) {
            Some(metric) => Evaluation::Classified(classify(metric, value)),
            None => Evaluation::Unknown,
        }
    }
}

/// Evaluate against the process-wide registry
pub fn evaluate(metric_id: &str, value: f64) -> Evaluation {
    MetricRegistry::global().evaluate(metric_id, value)
}
