//! Command handlers. Each returns the text to print on stdout.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;
use unicorn_telemetry::{
    Evaluation, MetricRegistry, OutputFormat, Polarity, Reading, Status, TelemetryConfig,
    TelemetryReport,
};

use crate::input::load_readings;
use crate::render::render;

const SAMPLE_TS: &str = "2026-01-29T10:00:00Z";

/// Demonstration batch: five normal readings and two warnings
pub fn sample_readings() -> Vec<Reading> {
    [
        ("connection_latency", 45.0, "normal"),
        ("edge_throughput", 25.0, "normal"),
        ("membrane_utilization", 85.0, "warning"),
        ("thread_pool_depth", 35.0, "normal"),
        ("gradient_entropy", 3.2, "normal"),
        ("topology_coverage", 65.0, "warning"),
        ("system_coherence", 0.82, "normal"),
    ]
    .into_iter()
    .map(|(id, value, claimed)| Reading::new(id, value, SAMPLE_TS).with_status(claimed))
    .collect()
}

fn colored_status(status: Status) -> String {
    match status {
        Status::Normal => status.green().to_string(),
        Status::Warning => status.yellow().to_string(),
        Status::Critical => status.red().bold().to_string(),
    }
}

fn build_registry(config: &TelemetryConfig) -> Result<MetricRegistry> {
    config
        .registry()
        .context("invalid threshold configuration")
}

fn render_report(report: &TelemetryReport, format: OutputFormat) -> Result<String> {
    render(report, format).context("failed to render report")
}

/// `unicornctl report`
pub fn report(
    config: &TelemetryConfig,
    input: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<String> {
    let registry = build_registry(config)?;
    let readings = load_readings(input)?;
    let report = TelemetryReport::from_readings(&registry, &readings);
    info!(
        readings = readings.len(),
        warnings = report.warning_count(),
        criticals = report.critical_count(),
        overall = %report.overall_status(),
        "report built"
    );
    render_report(&report, format.unwrap_or(config.output.format))
}

/// `unicornctl sample`
pub fn sample(config: &TelemetryConfig, format: Option<OutputFormat>) -> Result<String> {
    let registry = build_registry(config)?;
    let report = TelemetryReport::from_readings(&registry, &sample_readings());
    render_report(&report, format.unwrap_or(config.output.format))
}

/// `unicornctl evaluate`
pub fn evaluate(config: &TelemetryConfig, metric: &str, value: f64) -> Result<String> {
    let registry = build_registry(config)?;
    let line = match registry.evaluate(metric, value) {
        Evaluation::Classified(status) => {
            // evaluate() only classifies ids the registry resolves
            let unit = registry.lookup(metric).map(|d| d.unit.as_str()).unwrap_or_default();
            format!("{} = {} {} -> {}", metric, value, unit, colored_status(status))
        }
        Evaluation::Unknown => format!("{} = {} -> unknown (not in registry)", metric, value),
    };
    Ok(line)
}

/// `unicornctl metrics`
pub fn metrics(config: &TelemetryConfig) -> Result<String> {
    let registry = build_registry(config)?;
    let mut lines = vec![format!(
        "{:<22} {:<5} {:<3} {:<3} {:>9} {:>9}  {:<8} {}",
        "METRIC", "LAYER", "DIM", "LVL", "WARNING", "CRITICAL", "UNIT", "POLARITY"
    )];
    for def in registry.iter() {
        let polarity = match def.polarity {
            Polarity::HigherIsWorse => "higher",
            Polarity::LowerIsWorse => "lower",
        };
        lines.push(format!(
            "{:<22} {:<5} {:<3} {:<3} {:>9} {:>9}  {:<8} {}",
            def.id,
            def.layer.as_str(),
            def.dimension.code(),
            def.level.index(),
            def.thresholds.warning,
            def.thresholds.critical,
            def.unit,
            polarity
        ));
    }
    Ok(lines.join("\n"))
}
