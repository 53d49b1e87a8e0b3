//! Telemetry configuration.
//!
//! Optional TOML file, every section may be omitted:
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [output]
//! format = "markdown"
//!
//! [thresholds.membrane_utilization]
//! warning = 75
//! critical = 90
//! ```
//!
//! Threshold overrides are validated against each metric's polarity when the
//! registry is built, so a bad file fails at startup instead of misclassifying.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::registry::{MetricRegistry, Thresholds};

/// Rendered output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other} (expected markdown or json)")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub output: OutputSettings,

    /// Per-metric threshold overrides keyed by metric id
    #[serde(default)]
    pub thresholds: BTreeMap<String, Thresholds>,
}

impl TelemetryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            overrides = config.thresholds.len(),
            "loaded telemetry config"
        );
        Ok(config)
    }

    /// Load when a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Embedded catalog with this config's overrides applied
    pub fn registry(&self) -> Result<MetricRegistry> {
        MetricRegistry::global().with_overrides(&self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TelemetryError;
    use crate::status::Status;
    use std::io::Write;

    #[test]
    fn test_empty_config_defaults() {
        let config = TelemetryConfig::from_toml_str("").unwrap();
        assert_eq!(config, TelemetryConfig::default());
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.registry().unwrap().len(), 12);
    }

    #[test]
    fn test_threshold_override_changes_classification() {
        let config = TelemetryConfig::from_toml_str(
            r#"
            [thresholds.membrane_utilization]
            warning = 60
            critical = 70
            "#,
        )
        .unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(
            registry.evaluate("membrane_utilization", 75.0).status(),
            Some(Status::Critical)
        );
    }

    #[test]
    fn test_inconsistent_override_fails_fast() {
        let config = TelemetryConfig::from_toml_str(
            r#"
            [thresholds.edge_throughput]
            warning = 1
            critical = 10
            "#,
        )
        .unwrap();
        let err = config.registry().unwrap_err();
        assert!(err.is_registry_invariant());
    }

    #[test]
    fn test_unknown_override_rejected() {
        let config = TelemetryConfig::from_toml_str(
            r#"
            [thresholds.disk_usage]
            warning = 80
            critical = 90
            "#,
        )
        .unwrap();
        assert!(matches!(config.registry(), Err(TelemetryError::UnknownMetric(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"\n[logging]\nlevel = \"debug\"").unwrap();

        let config = TelemetryConfig::load(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TelemetryConfig::load(Path::new("/nonexistent/unicorn.toml")).unwrap_err();
        assert!(matches!(err, TelemetryError::Io(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = TelemetryConfig::from_toml_str("[output\nformat=").unwrap_err();
        assert!(matches!(err, TelemetryError::Toml(_)));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
