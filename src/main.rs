// s3cost: Reports the storage usage and cost of AWS S3 buckets.
#![forbid(unsafe_code)]
use anyhow::Result;
use aws_config::BehaviorVersion;
use chrono::Utc;
use std::io;
use tracing::{
    debug,
    info,
};
use tracing_subscriber::EnvFilter;

mod cli;
mod cloudwatch;
mod common;
mod report;
mod s3;

use report::ReportContext;

// Logs go to stderr so they never mix with the report. Nothing below ERROR
// is shown unless RUST_LOG asks for it.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let _matches = cli::parse_args();

    let config = {
        let stdin  = io::stdin();
        let stdout = io::stdout();

        cli::Prompter::new(stdin.lock(), stdout.lock()).run_config()?
    };

    debug!("main: Loading AWS config");

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .load()
        .await;

    let storage = s3::Client::new(&aws_config);
    let metrics = cloudwatch::Client::new(&aws_config);

    // Every metric window in the run ends at the same instant.
    let now = Utc::now();

    info!("Starting report at {}", now);

    let ctx = ReportContext::new(&storage, &metrics, &config, now);

    let stdout  = io::stdout();
    let mut out = stdout.lock();

    report::run(&ctx, &mut out).await
}
