use serde::{Deserialize, Serialize};

/// Parameters shared by every endpoint run of one benchmark invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchmarkParams {
    pub server_url: String,
    pub requests_per_endpoint: u32,
    pub concurrency: u32,
    pub timeout_secs: u64,
    pub remark: Option<String>,
}

impl BenchmarkParams {
    pub fn format_run_info(&self) -> String {
        format!(
            "{} requests per endpoint, concurrency {}, timeout {} s",
            self.requests_per_endpoint, self.concurrency, self.timeout_secs
        )
    }
}
