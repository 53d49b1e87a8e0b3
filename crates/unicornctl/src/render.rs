//! Report rendering (Markdown and JSON).
//!
//! Consumes a finished `TelemetryReport`; no classification happens here.

use unicorn_telemetry::{Layer, OutputFormat, Status, TelemetryReport};

fn status_glyph(status: Status) -> &'static str {
    match status {
        Status::Normal => "🟢",
        Status::Warning => "🟡",
        Status::Critical => "🔴",
    }
}

fn layer_heading(layer: Layer) -> String {
    format!("{} ({})", layer, layer.title())
}

/// Render a report as Markdown
pub fn render_markdown(report: &TelemetryReport) -> String {
    let summary = report.summary();
    let mut lines = vec![
        "# Unicorn Dynamics Telemetry Report".to_string(),
        String::new(),
        "## Summary".to_string(),
        String::new(),
        "| Status | Count |".to_string(),
        "|--------|-------|".to_string(),
        format!("| Normal | {} |", summary.normal),
        format!("| Warning | {} |", summary.warning),
        format!("| Critical | {} |", summary.critical),
        String::new(),
        "---".to_string(),
        String::new(),
        "## Layer Status".to_string(),
        String::new(),
    ];

    for (layer, bucket) in report.by_layer().iter() {
        lines.push(format!("### {} {}", status_glyph(bucket.status), layer_heading(layer)));
        lines.push(String::new());

        if bucket.is_empty() {
            lines.push("*No metrics reported*".to_string());
        } else {
            lines.push("| Metric | Value | Status | T-Codes |".to_string());
            lines.push("|--------|-------|--------|---------|".to_string());
            for m in &bucket.metrics {
                lines.push(format!(
                    "| {} | {} {} | {} | {} |",
                    m.name,
                    m.value,
                    m.unit,
                    m.status,
                    m.t_codes.join(", ")
                ));
            }
        }
        lines.push(String::new());
    }

    let recommendations = report.recommendations();
    if !recommendations.is_empty() {
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push("## Recommendations".to_string());
        lines.push(String::new());

        for rec in recommendations {
            lines.push(format!("### {} ({})", rec.metric, rec.status.as_str().to_uppercase()));
            lines.push(format!("- **Layer:** {} | **Dimension:** {}", rec.layer, rec.dimension));
            lines.push(format!("- **T-Codes:** {}", rec.t_codes.join(", ")));
            lines.push(format!(
                "- **Suggested Grove Guides:** {}",
                rec.suggested_guides.join(", ")
            ));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &TelemetryReport) -> serde_json::Result<String> {
    report.to_json_pretty()
}

pub fn render(report: &TelemetryReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(report)),
        OutputFormat::Json => render_json(report),
    }
}
