use crate::attempt::{AttemptResult, FailureReason};
use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Latency statistics over the successful attempts of one run.
///
/// Present only when at least one attempt succeeded; a run with zero
/// successes has no statistics rather than zeroed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyStatistics {
    #[serde(serialize_with = "round_float")]
    pub avg_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub median_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub min_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub max_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub std_dev_latency_ms: f64,
}

/// Statistical reduction of a completed run. `success_count` plus
/// `failure_count` always equals the configured request total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub success_count: u64,
    pub failure_count: u64,
    pub timeout_count: u64,
    pub non_ok_status_count: u64,
    pub transport_error_count: u64,
    pub latency: Option<LatencyStatistics>,
}

impl BenchmarkSummary {
    pub fn from_attempts(attempts: &[AttemptResult]) -> Self {
        let mut latencies_ms = Vec::with_capacity(attempts.len());
        let mut timeout_count = 0;
        let mut non_ok_status_count = 0;
        let mut transport_error_count = 0;

        for attempt in attempts {
            match attempt {
                AttemptResult::Success { latency_ms } => latencies_ms.push(*latency_ms),
                AttemptResult::Failure { reason } => match reason {
                    FailureReason::Timeout => timeout_count += 1,
                    FailureReason::NonOkStatus => non_ok_status_count += 1,
                    FailureReason::TransportError => transport_error_count += 1,
                },
            }
        }

        let success_count = latencies_ms.len() as u64;
        let failure_count = timeout_count + non_ok_status_count + transport_error_count;

        BenchmarkSummary {
            success_count,
            failure_count,
            timeout_count,
            non_ok_status_count,
            transport_error_count,
            latency: latency_statistics(&mut latencies_ms),
        }
    }
}

fn latency_statistics(latencies_ms: &mut [f64]) -> Option<LatencyStatistics> {
    if latencies_ms.is_empty() {
        return None;
    }
    latencies_ms.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let count = latencies_ms.len();
    let avg_latency_ms = latencies_ms.iter().sum::<f64>() / count as f64;
    let mid = count / 2;
    let median_latency_ms = if count % 2 == 0 {
        (latencies_ms[mid - 1] + latencies_ms[mid]) / 2.0
    } else {
        latencies_ms[mid]
    };

    // Sample standard deviation with Bessel's correction; a single
    // sample has no observable variance, so it reports 0 rather than
    // dividing by zero.
    let std_dev_latency_ms = if count == 1 {
        0.0
    } else {
        let variance = latencies_ms
            .iter()
            .map(|l| (l - avg_latency_ms).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    };

    Some(LatencyStatistics {
        avg_latency_ms,
        median_latency_ms,
        min_latency_ms: latencies_ms[0],
        max_latency_ms: latencies_ms[count - 1],
        std_dev_latency_ms,
    })
}
