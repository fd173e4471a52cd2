// MetricQuery and the series it returns
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Duration,
    Utc,
};
use tracing::debug;

/// CloudWatch namespace that S3 publishes its storage metrics in.
pub const S3_NAMESPACE: &str = "AWS/S3";

/// Metric holding the number of objects in a bucket.
pub const NUMBER_OF_OBJECTS: &str = "NumberOfObjects";

/// Metric holding the bytes stored in a bucket, per storage type.
pub const BUCKET_SIZE_BYTES: &str = "BucketSizeBytes";

/// Aggregation period of each datapoint, one hour.
pub const PERIOD_SECONDS: i32 = 3_600;

/// Statistic requested for every query.
pub const STATISTIC: &str = "Sum";

// S3 storage metrics are only emitted daily, looking back two days makes sure
// there's at least one datapoint.
const WINDOW_DAYS: i64 = 2;

/// A batch of queries for one metric of one bucket, one per storage type.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricQuery {
    /// The CloudWatch metric name.
    pub metric_name: String,

    /// The `BucketName` dimension value.
    pub bucket_name: String,

    /// The `StorageType` dimension values, one query each.
    pub storage_types: Vec<String>,

    /// Start of the query window.
    pub start_time: DateTime<Utc>,

    /// End of the query window.
    pub end_time: DateTime<Utc>,
}

impl MetricQuery {
    /// Create a query for `metric_name` on `bucket_name` over the two days
    /// leading up to `now`.
    pub fn new(
        metric_name: &str,
        bucket_name: &str,
        storage_types: &[&str],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            metric_name:   metric_name.into(),
            bucket_name:   bucket_name.into(),
            storage_types: storage_types.iter().map(|st| st.to_string()).collect(),
            start_time:    now - Duration::days(WINDOW_DAYS),
            end_time:      now,
        }
    }

    /// Returns `(id, storage_type)` for each query in the batch.
    ///
    /// IDs must be unique within a `GetMetricData` call and start with a
    /// lowercase letter.
    pub fn query_ids(&self) -> Vec<(String, &str)> {
        self.storage_types
            .iter()
            .enumerate()
            .map(|(idx, st)| (format!("metric_alias{idx}"), st.as_str()))
            .collect()
    }
}

/// The values returned for a single query ID, most recent first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricSeries {
    /// ID of the query this series answers.
    pub id: String,

    /// Datapoint values, newest first.
    pub values: Vec<f64>,
}

impl MetricSeries {
    /// Create a new series.
    pub fn new(id: &str, values: Vec<f64>) -> Self {
        Self {
            id:     id.into(),
            values: values,
        }
    }
}

/// Sum the newest datapoint of each series.
///
/// Series without datapoints, or whose newest datapoint isn't positive, add
/// nothing. Older datapoints are ignored even when the newest is skipped.
pub fn sum_latest_positive(series: &[MetricSeries]) -> f64 {
    let total: f64 = series.iter()
        .filter_map(|s| s.values.first().copied())
        .filter(|value| *value > 0.0)
        .sum();

    debug!("sum_latest_positive: {} series summed to {}", series.len(), total);

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sum_latest_positive() {
        let series = vec![
            MetricSeries::new("metric_alias0", vec![5.0, -1.0]),
            MetricSeries::new("metric_alias1", vec![0.0]),
            MetricSeries::new("metric_alias2", vec![]),
        ];

        assert_eq!(sum_latest_positive(&series), 5.0);
    }

    #[test]
    fn test_sum_latest_positive_ignores_older_points() {
        let series = vec![
            MetricSeries::new("metric_alias0", vec![-3.0, 100.0]),
            MetricSeries::new("metric_alias1", vec![10.0, 20.0, 30.0]),
            MetricSeries::new("metric_alias2", vec![2.5]),
        ];

        assert_eq!(sum_latest_positive(&series), 12.5);
    }

    #[test]
    fn test_sum_latest_positive_empty() {
        assert_eq!(sum_latest_positive(&[]), 0.0);
    }

    #[test]
    fn test_metric_query_new() {
        let now = Utc.with_ymd_and_hms(2020, 3, 3, 12, 0, 0).unwrap();

        let query = MetricQuery::new(
            BUCKET_SIZE_BYTES,
            "a-bucket",
            &["StandardStorage", "GlacierStorage"],
            now,
        );

        let expected_start = Utc.with_ymd_and_hms(2020, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(query.start_time, expected_start);
        assert_eq!(query.end_time, now);
        assert_eq!(query.query_ids(), vec![
            ("metric_alias0".to_string(), "StandardStorage"),
            ("metric_alias1".to_string(), "GlacierStorage"),
        ]);
    }
}
