//! Unicorn Telemetry - threshold classification and layer aggregation.
//!
//! Maps operational readings onto the b9/p9/j9 architecture layers and the
//! autognosis levels, and derives Grove guide recommendations from anything
//! that is not normal. Pure in-memory computation; rendering lives in
//! `unicornctl`.

pub mod advice;
pub mod aggregator;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod reading;
pub mod registry;
pub mod report;
pub mod status;
pub mod taxonomy;

pub use advice::{grove_guides, recommend, Recommendation};
pub use aggregator::aggregate;
pub use config::{OutputFormat, TelemetryConfig};
pub use error::TelemetryError;
pub use evaluator::{classify, evaluate};
pub use reading::Reading;
pub use registry::{MetricDefinition, MetricRegistry, Polarity, Thresholds};
pub use report::{LayerBucket, LevelEntry, MetricEntry, ReportSummary, TelemetryReport};
pub use status::{Evaluation, Status};
pub use taxonomy::{AwarenessLevel, Dimension, Layer};
