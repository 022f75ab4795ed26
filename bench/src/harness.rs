use crate::error::BenchmarkError;
use async_trait::async_trait;
use futures::future::join_all;
use pulse_bench_report::attempt::{AttemptResult, FailureReason};
use pulse_bench_report::summary::BenchmarkSummary;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::warn;

/// Fetch capability supplied by the caller. One call performs a single
/// GET against a fixed target and resolves within the client's own
/// timeout; `Ok` means the server answered with an ok status.
#[async_trait]
pub trait FetchClient: Send + Sync {
    async fn fetch(&self) -> Result<(), FailureReason>;
}

/// Validated parameters of one benchmark run. Construction is the only
/// place the request count and concurrency are checked, so a config in
/// hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    total_requests: u32,
    concurrency: u32,
}

impl BenchmarkConfig {
    pub fn new(total_requests: u32, concurrency: u32) -> Result<Self, BenchmarkError> {
        if total_requests == 0 {
            return Err(BenchmarkError::InvalidConfiguration(
                "total requests must be at least 1".to_owned(),
            ));
        }
        if concurrency == 0 {
            return Err(BenchmarkError::InvalidConfiguration(
                "concurrency must be at least 1".to_owned(),
            ));
        }
        if concurrency > total_requests {
            return Err(BenchmarkError::InvalidConfiguration(format!(
                "concurrency ({concurrency}) cannot exceed total requests ({total_requests})"
            )));
        }
        Ok(Self {
            total_requests,
            concurrency,
        })
    }

    pub fn total_requests(&self) -> u32 {
        self.total_requests
    }

    pub fn concurrency(&self) -> u32 {
        self.concurrency
    }
}

/// Drives one benchmark run: `total_requests` attempts in sequential
/// batches of at most `concurrency`, each batch fully retired before
/// the next one launches.
pub struct BenchmarkHarness {
    config: BenchmarkConfig,
    client: Arc<dyn FetchClient>,
}

impl BenchmarkHarness {
    pub fn new(config: BenchmarkConfig, client: Arc<dyn FetchClient>) -> Self {
        Self { config, client }
    }

    pub async fn run(&self) -> BenchmarkSummary {
        let mut results = Vec::with_capacity(self.config.total_requests() as usize);
        let mut remaining = self.config.total_requests();

        while remaining > 0 {
            let batch_size = remaining.min(self.config.concurrency());
            let mut handles = Vec::with_capacity(batch_size as usize);
            for _ in 0..batch_size {
                let client = Arc::clone(&self.client);
                handles.push(tokio::spawn(attempt(client)));
            }

            // Batch barrier: peak in-flight attempts never exceed the
            // configured concurrency because batches do not overlap.
            for joined in join_all(handles).await {
                results.push(joined.unwrap_or_else(|e| {
                    warn!("Attempt task aborted: {e}");
                    AttemptResult::failure(FailureReason::TransportError)
                }));
            }
            remaining -= batch_size;
        }

        BenchmarkSummary::from_attempts(&results)
    }
}

async fn attempt(client: Arc<dyn FetchClient>) -> AttemptResult {
    let start = Instant::now();
    match client.fetch().await {
        Ok(()) => AttemptResult::success(start.elapsed().as_secs_f64() * 1000.0),
        Err(reason) => AttemptResult::failure(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use tokio::time::sleep;

    struct AlwaysOk {
        calls: AtomicU32,
    }

    impl AlwaysOk {
        fn new() -> Self {
            Self {
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl FetchClient for AlwaysOk {
        async fn fetch(&self) -> Result<(), FailureReason> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct AlwaysFailing {
        reason: FailureReason,
    }

    #[async_trait]
    impl FetchClient for AlwaysFailing {
        async fn fetch(&self) -> Result<(), FailureReason> {
            Err(self.reason)
        }
    }

    /// Fails every odd-indexed attempt with a non-ok status.
    struct Alternating {
        counter: AtomicU32,
    }

    #[async_trait]
    impl FetchClient for Alternating {
        async fn fetch(&self) -> Result<(), FailureReason> {
            let index = self.counter.fetch_add(1, Ordering::SeqCst);
            if index % 2 == 1 {
                Err(FailureReason::NonOkStatus)
            } else {
                Ok(())
            }
        }
    }

    /// Records the largest number of fetches observed in flight at once.
    struct OverlapRecording {
        in_flight: AtomicU32,
        peak: AtomicU32,
    }

    impl OverlapRecording {
        fn new() -> Self {
            Self {
                in_flight: AtomicU32::new(0),
                peak: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl FetchClient for OverlapRecording {
        async fn fetch(&self) -> Result<(), FailureReason> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn config_rejects_zero_requests() {
        let result = BenchmarkConfig::new(0, 1);
        assert!(matches!(
            result,
            Err(BenchmarkError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn config_rejects_zero_concurrency() {
        let result = BenchmarkConfig::new(10, 0);
        assert!(matches!(
            result,
            Err(BenchmarkError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn config_rejects_concurrency_above_request_count() {
        let result = BenchmarkConfig::new(5, 6);
        assert!(matches!(
            result,
            Err(BenchmarkError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn config_accepts_concurrency_equal_to_request_count() {
        let config = BenchmarkConfig::new(5, 5).unwrap();
        assert_eq!(config.total_requests(), 5);
        assert_eq!(config.concurrency(), 5);
    }

    #[tokio::test]
    async fn every_attempt_is_issued_and_counted_once() {
        let client = Arc::new(AlwaysOk::new());
        let config = BenchmarkConfig::new(10, 3).unwrap();
        let harness = BenchmarkHarness::new(config, client.clone());

        let summary = harness.run().await;

        assert_eq!(client.calls.load(Ordering::SeqCst), 10);
        assert_eq!(summary.success_count, 10);
        assert_eq!(summary.failure_count, 0);
        let latency = summary.latency.unwrap();
        assert!(latency.min_latency_ms >= 0.0);
        assert!(latency.min_latency_ms <= latency.max_latency_ms);
    }

    #[tokio::test]
    async fn all_failures_yield_summary_without_statistics() {
        let client = Arc::new(AlwaysFailing {
            reason: FailureReason::Timeout,
        });
        let config = BenchmarkConfig::new(4, 2).unwrap();

        let summary = BenchmarkHarness::new(config, client).run().await;

        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.failure_count, 4);
        assert_eq!(summary.timeout_count, 4);
        assert!(summary.latency.is_none());
    }

    #[tokio::test]
    async fn alternating_failures_are_tallied_not_propagated() {
        let client = Arc::new(Alternating {
            counter: AtomicU32::new(0),
        });
        let config = BenchmarkConfig::new(5, 5).unwrap();

        let summary = BenchmarkHarness::new(config, client).run().await;

        // Attempts 1 and 3 fail out of indices 0..=4.
        assert_eq!(summary.success_count, 3);
        assert_eq!(summary.failure_count, 2);
        assert_eq!(summary.non_ok_status_count, 2);
    }

    #[tokio::test]
    async fn peak_in_flight_attempts_never_exceed_concurrency() {
        let client = Arc::new(OverlapRecording::new());
        let config = BenchmarkConfig::new(10, 3).unwrap();
        let harness = BenchmarkHarness::new(config, client.clone());

        let summary = harness.run().await;

        let peak = client.peak.load(Ordering::SeqCst);
        assert!(peak <= 3, "peak in-flight attempts was {peak}");
        assert!(peak >= 1);
        assert_eq!(summary.success_count + summary.failure_count, 10);
    }

    #[tokio::test]
    async fn final_partial_batch_is_sized_by_the_remainder() {
        let client = Arc::new(OverlapRecording::new());
        let config = BenchmarkConfig::new(7, 3).unwrap();
        let harness = BenchmarkHarness::new(config, client.clone());

        let summary = harness.run().await;

        // Batches of 3, 3 and a remainder batch of 1.
        assert!(client.peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(summary.success_count, 7);
        assert_eq!(summary.failure_count, 0);
    }
}
