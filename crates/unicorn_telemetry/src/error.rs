//! Error types for the telemetry engine.
//!
//! Only registry construction and configuration loading can fail.
//! Evaluation and aggregation never return errors.

use thiserror::Error;

use crate::registry::Polarity;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid thresholds for {metric}: warning={warning}, critical={critical} ({polarity})")]
    InvalidThresholds {
        metric: String,
        warning: f64,
        critical: f64,
        polarity: Polarity,
    },

    #[error("Duplicate metric id: {0}")]
    DuplicateMetric(String),

    #[error("Metric id must not be empty")]
    EmptyMetricId,

    #[error("Metric {0} has no T-codes")]
    EmptyTCodes(String),

    #[error("Unknown metric in configuration: {0}")]
    UnknownMetric(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TelemetryError {
    /// True for errors raised while building a registry
    pub fn is_registry_invariant(&self) -> bool {
        matches!(
            self,
            TelemetryError::InvalidThresholds { .. }
                | TelemetryError::DuplicateMetric(_)
                | TelemetryError::EmptyMetricId
                | TelemetryError::EmptyTCodes(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
