use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the server under test
    #[arg(long, default_value = "http://localhost:8787")]
    pub server_url: String,

    /// Endpoint paths to benchmark, relative to the server URL
    #[arg(long, value_delimiter = ',', default_value = "/health,/ready,/version")]
    pub paths: Vec<String>,

    /// Number of requests per endpoint
    #[arg(long, default_value_t = 50)]
    pub requests: u32,

    /// Maximum number of in-flight requests
    #[arg(long, default_value_t = 10)]
    pub concurrency: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Output directory path for storing benchmark results
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Identifier for the benchmark run (e.g., machine name)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Additional remark for the benchmark (e.g., no-cache)
    #[arg(long)]
    pub remark: Option<String>,

    /// Print an estimated comparison against an event-loop runtime
    #[arg(long, default_value_t = false)]
    pub runtime_estimates: bool,
}

impl Args {
    /// Full URL for an endpoint path, e.g. "/health" against
    /// "http://localhost:8787".
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Display name derived from an endpoint path: "/health" becomes
/// "Health Endpoint".
pub fn endpoint_name(path: &str) -> String {
    let stem = path.trim_matches('/');
    if stem.is_empty() {
        return "Root Endpoint".to_owned();
    }
    let mut chars = stem.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => stem.to_owned(),
    };
    format!("{capitalized} Endpoint")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_path_with_one_slash() {
        let args = Args {
            server_url: "http://localhost:8787/".to_owned(),
            paths: vec![],
            requests: 1,
            concurrency: 1,
            timeout_secs: 10,
            output_dir: None,
            identifier: None,
            remark: None,
            runtime_estimates: false,
        };

        assert_eq!(args.endpoint_url("/health"), "http://localhost:8787/health");
        assert_eq!(args.endpoint_url("ready"), "http://localhost:8787/ready");
    }

    #[test]
    fn endpoint_name_capitalizes_the_path_stem() {
        assert_eq!(endpoint_name("/health"), "Health Endpoint");
        assert_eq!(endpoint_name("version"), "Version Endpoint");
        assert_eq!(endpoint_name("/"), "Root Endpoint");
    }
}
