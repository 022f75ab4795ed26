use colored::{ColoredString, Colorize};
use tracing::info;

use crate::report::{BenchmarkReport, EndpointMetrics};

impl BenchmarkReport {
    pub fn print_summary(&self) {
        println!();
        let params_print = format!(
            "Benchmark: {} endpoints against {}, {}\n",
            self.endpoints.len(),
            self.params.server_url,
            self.params.format_run_info(),
        )
        .blue();

        info!("{}", params_print);

        self.endpoints
            .iter()
            .for_each(|e| info!("{}\n", e.formatted_string()));
    }
}

impl EndpointMetrics {
    pub fn formatted_string(&self) -> ColoredString {
        let total = self.summary.success_count + self.summary.failure_count;

        match &self.summary.latency {
            Some(latency) => {
                let avg = format!("{:.2}", latency.avg_latency_ms);
                let median = format!("{:.2}", latency.median_latency_ms);
                let min = format!("{:.2}", latency.min_latency_ms);
                let max = format!("{:.2}", latency.max_latency_ms);
                let std_dev = format!("{:.2}", latency.std_dev_latency_ms);

                format!(
                    "{}: average latency: {} ms, median latency: {} ms, \
                    min: {} ms, max: {} ms, std dev: {} ms, \
                    errors: {}/{}",
                    self.name, avg, median, min, max, std_dev, self.summary.failure_count, total,
                )
                .green()
            }
            None => format!(
                "{}: all {} requests failed (timeouts: {}, non-ok: {}, transport: {})",
                self.name,
                total,
                self.summary.timeout_count,
                self.summary.non_ok_status_count,
                self.summary.transport_error_count,
            )
            .red(),
        }
    }
}
