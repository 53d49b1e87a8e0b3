//! Report snapshot produced by one aggregation pass.
//!
//! A report is built once and handed out by value; its fields are only
//! reachable through shared accessors, so consumers cannot alter it.
//! Serialized shape:
//!
//! ```text
//! summary.{total_metrics,normal,warning,critical}
//! by_layer.{b9,p9,j9}.{metrics,status}
//! by_awareness_level.{0,1,2,3}
//! recommendations
//! ```

use serde::{Deserialize, Serialize};

use crate::advice::Recommendation;
use crate::status::Status;
use crate::taxonomy::{AwarenessLevel, Layer};

/// Status counters for a batch.
///
/// `total_metrics` is the size of the input batch. Readings for unknown
/// metrics are part of that total but land in none of the three counters,
/// so the counters can sum to less than the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_metrics: usize,
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
}

impl ReportSummary {
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Normal => self.normal,
            Status::Warning => self.warning,
            Status::Critical => self.critical,
        }
    }

    /// Readings that were classified
    pub fn classified(&self) -> usize {
        self.normal + self.warning + self.critical
    }

    pub(crate) fn increment(&mut self, status: Status) {
        match status {
            Status::Normal => self.normal += 1,
            Status::Warning => self.warning += 1,
            Status::Critical => self.critical += 1,
        }
    }
}

/// Layer bucket entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub status: Status,
    pub t_codes: Vec<String>,
}

/// Awareness-level bucket entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub name: String,
    pub value: f64,
    pub status: Status,
}

/// Entries routed to one layer plus the worst status seen among them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerBucket {
    pub metrics: Vec<MetricEntry>,
    pub status: Status,
}

impl LayerBucket {
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub(crate) fn push(&mut self, entry: MetricEntry) {
        self.status = self.status.escalate(entry.status);
        self.metrics.push(entry);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerBuckets {
    pub b9: LayerBucket,
    pub p9: LayerBucket,
    pub j9: LayerBucket,
}

impl LayerBuckets {
    pub fn get(&self, layer: Layer) -> &LayerBucket {
        match layer {
            Layer::B9 => &self.b9,
            Layer::P9 => &self.p9,
            Layer::J9 => &self.j9,
        }
    }

    /// Buckets in b9, p9, j9 order
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &LayerBucket)> {
        Layer::ALL.into_iter().map(move |layer| (layer, self.get(layer)))
    }

    pub(crate) fn get_mut(&mut self, layer: Layer) -> &mut LayerBucket {
        match layer {
            Layer::B9 => &mut self.b9,
            Layer::P9 => &mut self.p9,
            Layer::J9 => &mut self.j9,
        }
    }
}

/// Entries keyed by awareness level index. The mapper's older
/// `0_emission`-style keys are still accepted on input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelBuckets {
    #[serde(rename = "0", alias = "0_emission")]
    pub emission: Vec<LevelEntry>,
    #[serde(rename = "1", alias = "1_patterns")]
    pub patterns: Vec<LevelEntry>,
    #[serde(rename = "2", alias = "2_self_image")]
    pub self_image: Vec<LevelEntry>,
    #[serde(rename = "3", alias = "3_optimization")]
    pub optimization: Vec<LevelEntry>,
}

impl LevelBuckets {
    pub fn get(&self, level: AwarenessLevel) -> &[LevelEntry] {
        match level {
            AwarenessLevel::Emission => &self.emission,
            AwarenessLevel::Patterns => &self.patterns,
            AwarenessLevel::SelfImage => &self.self_image,
            AwarenessLevel::Optimization => &self.optimization,
        }
    }

    pub(crate) fn get_mut(&mut self, level: AwarenessLevel) -> &mut Vec<LevelEntry> {
        match level {
            AwarenessLevel::Emission => &mut self.emission,
            AwarenessLevel::Patterns => &mut self.patterns,
            AwarenessLevel::SelfImage => &mut self.self_image,
            AwarenessLevel::Optimization => &mut self.optimization,
        }
    }
}

/// Derived snapshot for one batch of readings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetryReport {
    summary: ReportSummary,
    by_layer: LayerBuckets,
    #[serde(alias = "by_autognosis_level")]
    by_awareness_level: LevelBuckets,
    recommendations: Vec<Recommendation>,
}

impl TelemetryReport {
    pub(crate) fn with_total(total_metrics: usize) -> Self {
        Self {
            summary: ReportSummary {
                total_metrics,
                ..ReportSummary::default()
            },
            ..Self::default()
        }
    }

    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    pub fn by_layer(&self) -> &LayerBuckets {
        &self.by_layer
    }

    pub fn layer(&self, layer: Layer) -> &LayerBucket {
        self.by_layer.get(layer)
    }

    pub fn level(&self, level: AwarenessLevel) -> &[LevelEntry] {
        self.by_awareness_level.get(level)
    }

    /// Recommendations in discovery order
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Worst status across all layers
    pub fn overall_status(&self) -> Status {
        self.by_layer
            .iter()
            .map(|(_, bucket)| bucket.status)
            .max()
            .unwrap_or_default()
    }

    /// Recommendations raised for critical readings
    pub fn critical_count(&self) -> usize {
        self.count_recommendations(Status::Critical)
    }

    /// Recommendations raised for warning readings
    pub fn warning_count(&self) -> usize {
        self.count_recommendations(Status::Warning)
    }

    fn count_recommendations(&self, status: Status) -> usize {
        self.recommendations
            .iter()
            .filter(|r| r.status == status)
            .count()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn summary_mut(&mut self) -> &mut ReportSummary {
        &mut self.summary
    }

    pub(crate) fn layer_mut(&mut self, layer: Layer) -> &mut LayerBucket {
        self.by_layer.get_mut(layer)
    }

    pub(crate) fn level_mut(&mut self, level: AwarenessLevel) -> &mut Vec<LevelEntry> {
        self.by_awareness_level.get_mut(level)
    }

    pub(crate) fn push_recommendation(&mut self, recommendation: Recommendation) {
        self.recommendations.push(recommendation);
    }
}
