use crate::hardware::BenchmarkHardware;
use crate::params::BenchmarkParams;
use crate::summary::BenchmarkSummary;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use uuid::Uuid;

/// Summary of one benchmarked endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointMetrics {
    /// Human-readable endpoint name, e.g. "Health Endpoint"
    pub name: String,

    /// Full URL the requests were issued against
    pub url: String,

    pub summary: BenchmarkSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchmarkReport {
    /// Benchmark unique identifier
    pub uuid: Uuid,

    /// Timestamp when the benchmark was finished
    pub timestamp: String,

    /// Machine the benchmark ran on
    pub hardware: BenchmarkHardware,

    /// Benchmark parameters
    pub params: BenchmarkParams,

    /// Per-endpoint summaries, in benchmark order
    pub endpoints: Vec<EndpointMetrics>,
}

impl BenchmarkReport {
    pub fn new(
        hardware: BenchmarkHardware,
        params: BenchmarkParams,
        endpoints: Vec<EndpointMetrics>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339(),
            hardware,
            params,
            endpoints,
        }
    }

    pub fn dump_to_json(&self, output_dir: &str) -> io::Result<()> {
        std::fs::create_dir_all(output_dir)?;
        let report_path = Path::new(output_dir).join("report.json");
        let report_json = serde_json::to_string(self)?;
        std::fs::write(report_path, report_json)
    }
}
