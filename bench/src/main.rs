mod args;
mod error;
mod estimate;
mod harness;
mod http;
mod runner;

use crate::args::Args;
use crate::error::BenchmarkError;
use crate::runner::BenchmarkRunner;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), BenchmarkError> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    info!("Starting the benchmarks...");
    BenchmarkRunner::new(args).run().await?;
    info!("Finished the benchmarks.");
    Ok(())
}
