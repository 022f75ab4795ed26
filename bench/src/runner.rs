use crate::args::{endpoint_name, Args};
use crate::error::BenchmarkError;
use crate::estimate;
use crate::harness::{BenchmarkConfig, BenchmarkHarness};
use crate::http::HttpFetchClient;
use pulse_bench_report::hardware::BenchmarkHardware;
use pulse_bench_report::params::BenchmarkParams;
use pulse_bench_report::report::{BenchmarkReport, EndpointMetrics};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct BenchmarkRunner {
    args: Args,
}

impl BenchmarkRunner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub async fn run(&self) -> Result<(), BenchmarkError> {
        let config = BenchmarkConfig::new(self.args.requests, self.args.concurrency)?;
        let timeout = Duration::from_secs(self.args.timeout_secs);

        info!(
            "Starting to benchmark: {} endpoints against {}",
            self.args.paths.len(),
            self.args.server_url
        );

        let mut endpoints = Vec::with_capacity(self.args.paths.len());
        for path in &self.args.paths {
            let url = self.args.endpoint_url(path);
            let name = endpoint_name(path);
            let client = Arc::new(HttpFetchClient::new(&url, timeout)?);

            info!(
                "Benchmarking {name} ({url}): {} requests, concurrency {}",
                config.total_requests(),
                config.concurrency()
            );
            let summary = BenchmarkHarness::new(config, client).run().await;
            endpoints.push(EndpointMetrics { name, url, summary });
        }

        info!("Benchmarking finished");

        let params = BenchmarkParams {
            server_url: self.args.server_url.clone(),
            requests_per_endpoint: self.args.requests,
            concurrency: self.args.concurrency,
            timeout_secs: self.args.timeout_secs,
            remark: self.args.remark.clone(),
        };
        let hardware = BenchmarkHardware::capture(self.args.identifier.clone());
        let report = BenchmarkReport::new(hardware, params, endpoints);

        info!("Printing summary");
        report.print_summary();

        if self.args.runtime_estimates {
            estimate::print_runtime_estimates(&report);
        }

        if let Some(output_dir) = &self.args.output_dir {
            report.dump_to_json(output_dir)?;
            info!("Report written to {output_dir}");
        }

        Ok(())
    }
}
