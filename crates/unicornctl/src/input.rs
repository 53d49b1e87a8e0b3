//! Loading reading batches from files or stdin.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use unicorn_telemetry::Reading;

/// Parse a JSON array of readings
pub fn parse_readings(content: &str) -> Result<Vec<Reading>> {
    serde_json::from_str(content)
        .context("readings must be a JSON array of {metric_key, value, timestamp, status}")
}

/// Read readings from `path`, or stdin when the path is absent or "-"
pub fn load_readings(path: Option<&Path>) -> Result<Vec<Reading>> {
    let content = match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("failed to read readings from {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read readings from stdin")?;
            buf
        }
    };
    parse_readings(&content)
}
