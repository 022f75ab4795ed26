use thiserror::Error;

/// Errors that abort a benchmark before or outside of the attempts
/// themselves. Individual attempt failures are counted in the summary
/// and never surface here.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot parse URL: {0}")]
    CannotParseUrl(String),
    #[error("Cannot create HTTP client")]
    CannotCreateHttpClient,
    #[error("Cannot write report to file: {0}")]
    CannotWriteToFile(#[from] std::io::Error),
}
