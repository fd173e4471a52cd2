// MetricsService trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::{
    MetricQuery,
    MetricSeries,
};

/// `MetricsService` represents the CloudWatch calls needed to build the
/// report.
#[async_trait]
pub trait MetricsService {
    /// Run every query in `query` as a single batch, returning one series per
    /// query ID.
    async fn metric_series(&self, query: &MetricQuery) -> Result<Vec<MetricSeries>>;
}
