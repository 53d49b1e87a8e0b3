//! Input records for an aggregation batch.

use serde::{Deserialize, Serialize};

/// One point-in-time reading.
///
/// `timestamp` is passed through unexamined. `status` is whatever the
/// producer claimed; the engine ignores it and recomputes the status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(alias = "metric_id")]
    pub metric_key: String,
    pub value: f64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub status: String,
}

impl Reading {
    pub fn new(metric_key: impl Into<String>, value: f64, timestamp: impl Into<String>) -> Self {
        Self {
            metric_key: metric_key.into(),
            value,
            timestamp: timestamp.into(),
            status: String::new(),
        }
    }

    /// Attach the producer's status label
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_optional_fields_missing() {
        let reading: Reading =
            serde_json::from_str(r#"{"metric_key": "scope_nesting", "value": 9}"#).unwrap();
        assert_eq!(reading.metric_key, "scope_nesting");
        assert_eq!(reading.value, 9.0);
        assert!(reading.timestamp.is_empty());
        assert!(reading.status.is_empty());
    }

    #[test]
    fn test_metric_id_alias() {
        let reading: Reading = serde_json::from_str(
            r#"{"metric_id": "edge_throughput", "value": 0.5, "timestamp": "2026-01-29T10:00:00Z", "status": "normal"}"#,
        )
        .unwrap();
        assert_eq!(reading.metric_key, "edge_throughput");
        assert_eq!(reading.status, "normal");
    }
}
