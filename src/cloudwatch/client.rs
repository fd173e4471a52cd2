// Implement the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::client::Client as CloudWatchClient;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{
    Dimension,
    Metric,
    MetricDataQuery,
    MetricStat,
};
use chrono::Utc;
use crate::common::{
    MetricQuery,
    MetricSeries,
    PERIOD_SECONDS,
    S3_NAMESPACE,
    STATISTIC,
};
use tracing::debug;

/// A `CloudWatch` `Client`
#[derive(Debug)]
pub struct Client {
    /// The AWS SDK `CloudWatchClient`.
    pub client: CloudWatchClient,
}

// CloudWatch wants smithy timestamps.
fn to_smithy(time: chrono::DateTime<Utc>) -> DateTime {
    DateTime::from_millis(time.timestamp_millis())
}

impl Client {
    /// Return a new `Client` using the shared AWS `config`.
    pub fn new(config: &SdkConfig) -> Self {
        debug!(
            "new: Creating CloudWatchClient in region '{:?}'",
            config.region(),
        );

        Self {
            client: CloudWatchClient::new(config),
        }
    }

    /// Build the `MetricDataQuery` list for the given `MetricQuery`.
    ///
    /// There is one query for each storage type, each selecting the metric
    /// for the bucket and storage type pair.
    fn metric_data_queries(query: &MetricQuery) -> Vec<MetricDataQuery> {
        query.query_ids()
            .into_iter()
            .map(|(id, storage_type)| {
                let dimensions = vec![
                    Dimension::builder()
                        .name("StorageType")
                        .value(storage_type)
                        .build(),
                    Dimension::builder()
                        .name("BucketName")
                        .value(query.bucket_name.clone())
                        .build(),
                ];

                let metric = Metric::builder()
                    .namespace(S3_NAMESPACE)
                    .metric_name(query.metric_name.clone())
                    .set_dimensions(Some(dimensions))
                    .build();

                let stat = MetricStat::builder()
                    .metric(metric)
                    .period(PERIOD_SECONDS)
                    .stat(STATISTIC)
                    .build();

                MetricDataQuery::builder()
                    .id(id)
                    .metric_stat(stat)
                    .return_data(true)
                    .build()
            })
            .collect()
    }

    /// Runs the given `MetricQuery` as a single `GetMetricData` call.
    ///
    /// Returns one `MetricSeries` per query ID. CloudWatch returns values
    /// newest first, so the first value of each series is the most recent.
    pub async fn get_metric_data(
        &self,
        query: &MetricQuery,
    ) -> Result<Vec<MetricSeries>> {
        debug!(
            "get_metric_data: {} for '{}' over {} storage types",
            query.metric_name,
            query.bucket_name,
            query.storage_types.len(),
        );

        let queries = Self::metric_data_queries(query);

        let output = self.client.get_metric_data()
            .set_metric_data_queries(Some(queries))
            .start_time(to_smithy(query.start_time))
            .end_time(to_smithy(query.end_time))
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to get {} metric data for '{}'",
                    query.metric_name,
                    query.bucket_name,
                )
            })?;

        debug!("get_metric_data: API returned: {:#?}", output);

        let series = output.metric_data_results()
            .iter()
            .map(|result| {
                MetricSeries::new(
                    result.id().unwrap_or_default(),
                    result.values().to_vec(),
                )
            })
            .collect();

        Ok(series)
    }
}
