// In-memory services for exercising the report without AWS
use anyhow::{
    anyhow,
    Result,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use super::{
    Buckets,
    Capability,
    MetricQuery,
    MetricSeries,
    MetricsService,
    ObjectPage,
    StorageService,
    WebsiteCapability,
};

/// A recorded `list_objects` call: `(bucket, prefix, continuation_token)`.
pub type ListCall = (String, Option<String>, Option<String>);

/// Fake S3.
///
/// Pages are keyed by continuation token, `None` being the first page. The
/// prefix isn't used for lookup, only recorded.
#[derive(Debug, Default)]
pub struct FakeStorage {
    pub buckets:             Buckets,
    pub pages:               HashMap<String, HashMap<Option<String>, ObjectPage>>,
    pub public_access_block: HashMap<String, Capability>,
    pub website:             HashMap<String, WebsiteCapability>,
    pub encryption:          HashMap<String, Capability>,
    pub list_calls:          Mutex<Vec<ListCall>>,
    pub fail_listing:        bool,
}

impl FakeStorage {
    pub fn list_calls(&self) -> Vec<ListCall> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageService for FakeStorage {
    async fn buckets(&self) -> Result<Buckets> {
        Ok(self.buckets.clone())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        self.list_calls.lock().unwrap().push((
            bucket.to_string(),
            prefix.map(String::from),
            continuation_token.clone(),
        ));

        if self.fail_listing {
            return Err(anyhow!("AccessDenied"));
        }

        let page = self.pages
            .get(bucket)
            .and_then(|pages| pages.get(&continuation_token))
            .cloned()
            .unwrap_or_default();

        Ok(page)
    }

    async fn public_access_block(&self, bucket: &str) -> Capability {
        self.public_access_block
            .get(bucket)
            .cloned()
            .unwrap_or(Capability::NotConfigured)
    }

    async fn website(&self, bucket: &str) -> WebsiteCapability {
        self.website
            .get(bucket)
            .cloned()
            .unwrap_or_else(|| WebsiteCapability::disabled(Capability::NotConfigured))
    }

    async fn encryption(&self, bucket: &str) -> Capability {
        self.encryption
            .get(bucket)
            .cloned()
            .unwrap_or(Capability::NotConfigured)
    }
}

/// Fake CloudWatch.
///
/// Series are keyed by `(bucket, metric)` and returned as-is, so they don't
/// need to line up with the query IDs.
#[derive(Debug, Default)]
pub struct FakeMetrics {
    pub series:  HashMap<(String, String), Vec<MetricSeries>>,
    pub queries: Mutex<Vec<MetricQuery>>,
}

impl FakeMetrics {
    pub fn with_series(
        mut self,
        bucket: &str,
        metric: &str,
        values: Vec<Vec<f64>>,
    ) -> Self {
        let series = values
            .into_iter()
            .enumerate()
            .map(|(idx, v)| MetricSeries::new(&format!("metric_alias{idx}"), v))
            .collect();

        self.series.insert((bucket.into(), metric.into()), series);
        self
    }

    pub fn queries(&self) -> Vec<MetricQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricsService for FakeMetrics {
    async fn metric_series(&self, query: &MetricQuery) -> Result<Vec<MetricSeries>> {
        self.queries.lock().unwrap().push(query.clone());

        let key = (query.bucket_name.clone(), query.metric_name.clone());
        let series = self.series
            .get(&key)
            .cloned()
            .unwrap_or_default();

        Ok(series)
    }
}
