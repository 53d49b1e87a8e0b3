//! Rule-based remediation recommendations.
//!
//! Every warning or critical reading yields one recommendation pointing at
//! the Grove guides mapped to the metric's layer. Order follows discovery;
//! nothing here sorts by severity.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reading::Reading;
use crate::registry::MetricDefinition;
use crate::status::Status;
use crate::taxonomy::{Dimension, Layer};

const B9_GUIDES: [&str; 3] = ["Context Map", "Stakeholder Map", "Graphic History"];
const P9_GUIDES: [&str; 3] = ["Graphic Gameplan", "Graphic Roadmap", "Five Bold Steps"];
const J9_GUIDES: [&str; 3] = [
    "Investment Portfolio",
    "Value Proposition",
    "Industry Structure Map",
];

/// Grove guides suggested for a layer, in table order
pub fn grove_guides(layer: Layer) -> &'static [&'static str; 3] {
    match layer {
        Layer::B9 => &B9_GUIDES,
        Layer::P9 => &P9_GUIDES,
        Layer::J9 => &J9_GUIDES,
    }
}

/// A single remediation suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Metric display name
    pub metric: String,
    /// Warning or Critical
    pub status: Status,
    pub layer: Layer,
    pub dimension: Dimension,
    pub suggested_guides: Vec<String>,
    pub t_codes: Vec<String>,
}

/// Build a recommendation for a classified reading (None when normal)
pub fn recommend(
    reading: &Reading,
    metric: &MetricDefinition,
    status: Status,
) -> Option<Recommendation> {
    if !status.needs_attention() {
        return None;
    }

    debug!(
        metric = %reading.metric_key,
        value = reading.value,
        %status,
        layer = %metric.layer,
        "recommendation issued"
    );

    Some(Recommendation {
        metric: metric.name.clone(),
        status,
        layer: metric.layer,
        dimension: metric.dimension,
        suggested_guides: grove_guides(metric.layer)
            .iter()
            .map(|g| g.to_string())
            .collect(),
        t_codes: metric.t_codes.clone(),
    })
}
