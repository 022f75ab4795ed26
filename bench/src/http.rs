use crate::error::BenchmarkError;
use crate::harness::FetchClient;
use async_trait::async_trait;
use pulse_bench_report::attempt::FailureReason;
use reqwest::Url;
use std::time::Duration;

/// Production fetch capability: one GET per call against a fixed URL,
/// with the request timeout configured on the underlying client.
#[derive(Debug)]
pub struct HttpFetchClient {
    url: Url,
    client: reqwest::Client,
}

impl HttpFetchClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, BenchmarkError> {
        let url = Url::parse(url).map_err(|_| BenchmarkError::CannotParseUrl(url.to_owned()))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|_| BenchmarkError::CannotCreateHttpClient)?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl FetchClient for HttpFetchClient {
    async fn fetch(&self) -> Result<(), FailureReason> {
        match self.client.get(self.url.clone()).send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(_) => Err(FailureReason::NonOkStatus),
            Err(e) if e.is_timeout() => Err(FailureReason::Timeout),
            Err(_) => Err(FailureReason::TransportError),
        }
    }
}
