//! Reading status and the evaluation outcome.

use serde::{Deserialize, Serialize};

/// Health status of a reading (stable ordering: normal < warning < critical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Normal = 0,
    Warning = 1,
    Critical = 2,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Critical => "critical",
        }
    }

    /// Worst-status-wins merge
    pub fn escalate(self, other: Status) -> Status {
        self.max(other)
    }

    /// Warning or critical
    pub fn needs_attention(&self) -> bool {
        *self != Status::Normal
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of evaluating a metric id and value.
///
/// `Unknown` is returned for ids missing from the registry. It is a valid
/// outcome, not a failure, and is never counted in a report summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    Classified(Status),
    Unknown,
}

impl Evaluation {
    pub fn status(&self) -> Option<Status> {
        match self {
            Evaluation::Classified(status) => Some(*status),
            Evaluation::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Evaluation::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Evaluation::Classified(status) => status.as_str(),
            Evaluation::Unknown => "unknown",
        }
    }
}

impl From<Status> for Evaluation {
    fn from(status: Status) -> Self {
        Evaluation::Classified(status)
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
