// ReportContext
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use chrono::{
    DateTime,
    Utc,
};
use crate::common::{
    sum_latest_positive,
    MetricQuery,
    MetricsService,
    RunConfig,
};
use tracing::debug;

/// Everything a report needs, shared by every bucket in the run.
#[derive(Debug)]
pub struct ReportContext<'a, S, M> {
    /// Answers bucket and object listings and the metadata probes.
    pub storage: &'a S,

    /// Answers metric queries.
    pub metrics: &'a M,

    /// What the user asked for.
    pub config: &'a RunConfig,

    /// Taken once when the run starts, all metric windows end here.
    pub now: DateTime<Utc>,
}

impl<'a, S, M> ReportContext<'a, S, M>
where
    M: MetricsService,
{
    /// Create a new `ReportContext`.
    pub fn new(
        storage: &'a S,
        metrics: &'a M,
        config: &'a RunConfig,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            storage,
            metrics,
            config,
            now,
        }
    }

    /// Sum of the latest positive datapoint of `metric_name` for each of
    /// `storage_types` in `bucket`.
    pub async fn metric_sum(
        &self,
        metric_name: &str,
        bucket: &str,
        storage_types: &[&str],
    ) -> Result<f64> {
        let query  = MetricQuery::new(metric_name, bucket, storage_types, self.now);
        let series = self.metrics.metric_series(&query).await?;
        let sum    = sum_latest_positive(&series);

        debug!("metric_sum: {} for '{}' is {}", metric_name, bucket, sum);

        Ok(sum)
    }
}
