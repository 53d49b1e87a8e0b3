//! Metric Registry - the static catalog of known metrics.
//!
//! A registry is validated once when built and is read-only afterwards.
//! The process-wide instance is built from the embedded catalog on first use.
//! Missing ids are an expected outcome of `lookup`, not an error.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TelemetryError};
use crate::taxonomy::{AwarenessLevel, Dimension, Layer};

/// Which direction of the value scale indicates trouble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    HigherIsWorse,
    LowerIsWorse,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::HigherIsWorse => write!(f, "higher is worse"),
            Polarity::LowerIsWorse => write!(f, "lower is worse"),
        }
    }
}

/// Warning/critical threshold pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Thresholds {
    pub fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }

    /// Both values finite and critical on the bad side of warning
    pub fn is_consistent_with(&self, polarity: Polarity) -> bool {
        if !self.warning.is_finite() || !self.critical.is_finite() {
            return false;
        }
        match polarity {
            Polarity::HigherIsWorse => self.critical >= self.warning,
            Polarity::LowerIsWorse => self.critical <= self.warning,
        }
    }
}

/// A catalog entry describing one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Unique key (e.g., "connection_latency")
    pub id: String,
    /// Display name (e.g., "Connection Latency")
    pub name: String,
    pub layer: Layer,
    pub dimension: Dimension,
    pub level: AwarenessLevel,
    /// T-system codes in catalog order (e.g., ["T1", "T8"])
    pub t_codes: Vec<String>,
    pub description: String,
    pub unit: String,
    pub thresholds: Thresholds,
    #[serde(default)]
    pub polarity: Polarity,
}

impl MetricDefinition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        layer: Layer,
        dimension: Dimension,
        level: AwarenessLevel,
        t_codes: &[&str],
        description: impl Into<String>,
        unit: impl Into<String>,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer,
            dimension,
            level,
            t_codes: t_codes.iter().map(|c| c.to_string()).collect(),
            description: description.into(),
            unit: unit.into(),
            thresholds,
            polarity: Polarity::HigherIsWorse,
        }
    }

    /// Mark this metric as "lower is worse"
    pub fn lower_is_worse(mut self) -> Self {
        self.polarity = Polarity::LowerIsWorse;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TelemetryError::EmptyMetricId);
        }
        if self.t_codes.is_empty() {
            return Err(TelemetryError::EmptyTCodes(self.id.clone()));
        }
        if !self.thresholds.is_consistent_with(self.polarity) {
            return Err(TelemetryError::InvalidThresholds {
                metric: self.id.clone(),
                warning: self.thresholds.warning,
                critical: self.thresholds.critical,
                polarity: self.polarity,
            });
        }
        Ok(())
    }
}

static GLOBAL_REGISTRY: LazyLock<MetricRegistry> = LazyLock::new(|| {
    MetricRegistry::builtin()
        .unwrap_or_else(|e| panic!("embedded metric catalog is invalid: {e}"))
});

/// Validated, read-only metric catalog
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    definitions: Vec<MetricDefinition>,
    index: HashMap<String, usize>,
}

impl MetricRegistry {
    /// Build a registry, rejecting any definition that breaks an invariant
    pub fn from_definitions(definitions: Vec<MetricDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (pos, def) in definitions.iter().enumerate() {
            def.validate()?;
            if index.insert(def.id.clone(), pos).is_some() {
                return Err(TelemetryError::DuplicateMetric(def.id.clone()));
            }
        }
        debug!(metrics = definitions.len(), "metric registry built");
        Ok(Self { definitions, index })
    }

    /// Registry holding the embedded catalog
    pub fn builtin() -> Result<Self> {
        Self::from_definitions(builtin_definitions())
    }

    /// Process-wide registry, initialized on first access
    pub fn global() -> &'static MetricRegistry {
        &GLOBAL_REGISTRY
    }

    /// Copy of this registry with threshold overrides applied and re-validated
    pub fn with_overrides(&self, overrides: &BTreeMap<String, Thresholds>) -> Result<Self> {
        let mut definitions = self.definitions.clone();
        for (id, thresholds) in overrides {
            let pos = self
                .index
                .get(id)
                .ok_or_else(|| TelemetryError::UnknownMetric(id.clone()))?;
            debug!(
                metric = %id,
                warning = thresholds.warning,
                critical = thresholds.critical,
                "threshold override"
            );
            definitions[*pos].thresholds = *thresholds;
        }
        Self::from_definitions(definitions)
    }

    pub fn lookup(&self, metric_id: &str) -> Option<&MetricDefinition> {
        self.index.get(metric_id).map(|&pos| &self.definitions[pos])
    }

    /// Definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &MetricDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Embedded catalog for Unicorn Dynamics
#[rustfmt::skip]
fn builtin_definitions() -> Vec<MetricDefinition> {
    use AwarenessLevel::*;
    use Dimension::*;
    use Layer::*;

    vec![
        // b9 - Connection Edges
        MetricDefinition::new(
            "connection_latency", "Connection Latency", B9, Performance, Emission,
            &["T1", "T8"],
            "Time to establish localhost terminal connections", "ms",
            Thresholds::new(100.0, 500.0),
        ),
        MetricDefinition::new(
            "edge_throughput", "Edge Throughput", B9, Performance, Emission,
            &["T1"],
            "Data transfer rate across connection edges", "MB/s",
            Thresholds::new(10.0, 1.0),
        )
        .lower_is_worse(),
        MetricDefinition::new(
            "terminal_sessions", "Terminal Sessions", B9, Performance, Patterns,
            &["T8"],
            "Active localhost terminal session count", "count",
            Thresholds::new(100.0, 200.0),
        ),
        // p9 - Execution Membranes
        MetricDefinition::new(
            "membrane_utilization", "Membrane Utilization", P9, Potential, Patterns,
            &["T2", "T7"],
            "Percentage of execution membrane capacity in use", "%",
            Thresholds::new(80.0, 95.0),
        ),
        MetricDefinition::new(
            "thread_pool_depth", "Thread Pool Depth", P9, Potential, Patterns,
            &["T2"],
            "Globalhost thread pool queue depth", "count",
            Thresholds::new(50.0, 100.0),
        ),
        MetricDefinition::new(
            "scope_nesting", "Scope Nesting Level", P9, Potential, SelfImage,
            &["T3", "T6"],
            "Current P-system nested scope depth", "level",
            Thresholds::new(8.0, 12.0),
        ),
        MetricDefinition::new(
            "memory_allocation", "Memory Allocation", P9, Potential, Emission,
            &["T7"],
            "Memory allocated to execution membranes", "GB",
            Thresholds::new(12.0, 15.0),
        ),
        // j9 - Distribution Gradients
        MetricDefinition::new(
            "gradient_entropy", "Gradient Entropy", J9, Commitment, SelfImage,
            &["T3", "T6"],
            "Distribution uniformity across orgalhost topology", "bits",
            Thresholds::new(2.5, 1.5),
        )
        .lower_is_worse(),
        MetricDefinition::new(
            "topology_coverage", "Topology Coverage", J9, Commitment, Patterns,
            &["T4", "T5"],
            "Percentage of topology nodes actively participating", "%",
            Thresholds::new(70.0, 50.0),
        )
        .lower_is_worse(),
        MetricDefinition::new(
            "compute_distribution", "Compute Distribution", J9, Commitment, Optimization,
            &["T4", "T5", "T9"],
            "Evenness of compute load across distribution gradients", "ratio",
            Thresholds::new(0.7, 0.5),
        )
        .lower_is_worse(),
        // Cross-layer
        MetricDefinition::new(
            "system_coherence", "System Coherence", B9, Performance, SelfImage,
            &["T9"],
            "Overall system integration and alignment score", "score",
            Thresholds::new(0.7, 0.5),
        )
        .lower_is_worse(),
        MetricDefinition::new(
            "renewal_cycle_time", "Renewal Cycle Time", P9, Potential, Optimization,
            &["T9"],
            "Time to complete full T-system renewal cycle", "seconds",
            Thresholds::new(300.0, 600.0),
        ),
    ]
}
