//! Aggregator - folds a batch of readings into a report.
//!
//! Counters and layer worst-status are order independent. Bucket entries
//! and recommendations keep input order.
//!
//! Known gap: readings for metrics missing from the registry are dropped
//! before classification. They still count toward `total_metrics` but never
//! toward normal/warning/critical, and no fourth counter exists for them.

use tracing::debug;

use crate::advice::recommend;
use crate::evaluator::classify;
use crate::reading::Reading;
use crate::registry::MetricRegistry;
use crate::report::{LevelEntry, MetricEntry, TelemetryReport};

impl TelemetryReport {
    /// Build a report for `readings` against `registry`
    pub fn from_readings(registry: &MetricRegistry, readings: &[Reading]) -> Self {
        let mut report = TelemetryReport::with_total(readings.len());
        let mut dropped = 0usize;

        for reading in readings {
            let Some(metric) = registry.lookup(&reading.metric_key) else {
                debug!(metric = %reading.metric_key, "dropping reading for unknown metric");
                dropped += 1;
                continue;
            };

            let status = classify(metric, reading.value);
            report.summary_mut().increment(status);

            report.layer_mut(metric.layer).push(MetricEntry {
                name: metric.name.clone(),
                value: reading.value,
                unit: metric.unit.clone(),
                status,
                t_codes: metric.t_codes.clone(),
            });

            report.level_mut(metric.level).push(LevelEntry {
                name: metric.name.clone(),
                value: reading.value,
                status,
            });

            if let Some(rec) = recommend(reading, metric, status) {
                report.push_recommendation(rec);
            }
        }

        let summary = report.summary();
        debug!(
            total = summary.total_metrics,
            dropped,
            normal = summary.normal,
            warning = summary.warning,
            critical = summary.critical,
            "telemetry batch aggregated"
        );

        report
    }
}

/// Aggregate against the process-wide registry
pub fn aggregate(readings: &[Reading]) -> TelemetryReport {
    TelemetryReport::from_readings(MetricRegistry::global(), readings)
}
