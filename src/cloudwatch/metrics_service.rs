// Implements the MetricsService trait for CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    MetricQuery,
    MetricSeries,
    MetricsService,
};
use super::client::Client;

#[async_trait]
impl MetricsService for Client {
    /// Return the series for each storage type in `query`.
    async fn metric_series(&self, query: &MetricQuery) -> Result<Vec<MetricSeries>> {
        self.get_metric_data(query).await
    }
}
