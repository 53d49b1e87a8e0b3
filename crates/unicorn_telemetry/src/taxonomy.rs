//! Classification axes for metrics.
//!
//! Every metric carries exactly one value from each axis:
//! - Layer: the architecture tier (b9 edges, p9 membranes, j9 gradients)
//! - Dimension: the M/G/C triad (Performance, Potential, Commitment)
//! - AwarenessLevel: how reflective the signal is (0 emission .. 3 optimization)

use serde::{Deserialize, Serialize};

/// Architecture layer a metric belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Connection Edges - localhost terminal patterns
    B9,
    /// Execution Membranes - globalhost thread pools
    P9,
    /// Distribution Gradients - orgalhost topology
    J9,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::B9, Layer::P9, Layer::J9];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::B9 => "b9",
            Layer::P9 => "p9",
            Layer::J9 => "j9",
        }
    }

    /// Human-readable tier name
    pub fn title(&self) -> &'static str {
        match self {
            Layer::B9 => "Connection Edges",
            Layer::P9 => "Execution Membranes",
            Layer::J9 => "Distribution Gradients",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Triad dimension, orthogonal to layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// M: execution, output, response
    Performance,
    /// G: ideas, resources, memory
    Potential,
    /// C: work, feedback, integration
    Commitment,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Performance => "Performance",
            Dimension::Potential => "Potential",
            Dimension::Commitment => "Commitment",
        }
    }

    /// Single-letter triad code
    pub fn code(&self) -> char {
        match self {
            Dimension::Performance => 'M',
            Dimension::Potential => 'G',
            Dimension::Commitment => 'C',
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Autognosis level (stable ordering by sophistication)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwarenessLevel {
    /// Raw telemetry signals
    Emission = 0,
    /// Recognized patterns
    Patterns = 1,
    /// System self-model
    SelfImage = 2,
    /// Improvement recommendations
    Optimization = 3,
}

impl AwarenessLevel {
    pub const ALL: [AwarenessLevel; 4] = [
        AwarenessLevel::Emission,
        AwarenessLevel::Patterns,
        AwarenessLevel::SelfImage,
        AwarenessLevel::Optimization,
    ];

    pub fn index(&self) -> u8 {
        *self as u8
    }

}

impl std::fmt::Display for AwarenessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwarenessLevel::Emission => write!(f, "Emission"),
            AwarenessLevel::Patterns => write!(f, "Patterns"),
            AwarenessLevel::SelfImage => write!(f, "Self-Image"),
            AwarenessLevel::Optimization => write!(f, "Optimization"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awareness_ordering() {
        assert!(AwarenessLevel::Emission < AwarenessLevel::Patterns);
        assert!(AwarenessLevel::Patterns < AwarenessLevel::SelfImage);
        assert!(AwarenessLevel::SelfImage < AwarenessLevel::Optimization);
    }

    #[test]
    fn test_awareness_index_matches_position() {
        for (pos, level) in AwarenessLevel::ALL.into_iter().enumerate() {
            assert_eq!(level.index() as usize, pos);
        }
    }

    #[test]
    fn test_layer_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Layer::P9).unwrap(), "\"p9\"");
    }

    #[test]
    fn test_dimension_codes() {
        assert_eq!(Dimension::Performance.code(), 'M');
        assert_eq!(Dimension::Potential.code(), 'G');
        assert_eq!(Dimension::Commitment.code(), 'C');
    }
}
