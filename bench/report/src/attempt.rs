use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a single attempt did not produce a latency sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    Timeout,
    NonOkStatus,
    TransportError,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Timeout => write!(f, "timeout"),
            FailureReason::NonOkStatus => write!(f, "non-ok status"),
            FailureReason::TransportError => write!(f, "transport error"),
        }
    }
}

/// Outcome of one fetch attempt. Produced exactly once per attempt and
/// never mutated afterwards. Failures carry no latency sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttemptResult {
    Success { latency_ms: f64 },
    Failure { reason: FailureReason },
}

impl AttemptResult {
    pub fn success(latency_ms: f64) -> Self {
        AttemptResult::Success { latency_ms }
    }

    pub fn failure(reason: FailureReason) -> Self {
        AttemptResult::Failure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AttemptResult::Success { .. })
    }
}
