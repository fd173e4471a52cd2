// BucketSummary and how it's gathered
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use chrono::{
    DateTime,
    Utc,
};
use crate::common::{
    monthly_cost,
    Bucket,
    Capability,
    MetricsService,
    StorageService,
    WebsiteCapability,
    ALL_STORAGE_TYPES,
    BUCKET_SIZE_BYTES,
    NUMBER_OF_OBJECTS,
    STORAGE_CLASSES,
};
use super::context::ReportContext;
use super::object_size::{
    prefix_size_kb,
    BYTES_PER_KB,
};
use tracing::{
    debug,
    info,
};

/// Results of the metadata probes for a bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketMetadata {
    /// Public access block configuration.
    pub public_access_block: Capability,

    /// Website configuration.
    pub website: WebsiteCapability,

    /// Default encryption configuration.
    pub encryption: Capability,
}

impl BucketMetadata {
    /// Run the three probes against `bucket`.
    pub async fn probe<S>(storage: &S, bucket: &str) -> Self
    where
        S: StorageService + ?Sized,
    {
        Self {
            public_access_block: storage.public_access_block(bucket).await,
            website:             storage.website(bucket).await,
            encryption:          storage.encryption(bucket).await,
        }
    }
}

/// Size and cost of a non-empty bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketUsage {
    /// Total size in KB.
    pub total_size_kb: f64,

    /// Newest modification time on the first listing page.
    pub last_modified: Option<DateTime<Utc>>,

    /// Estimated monthly storage cost in USD.
    pub cost_usd: f64,
}

/// Everything reported about a single bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketSummary {
    /// Name of the bucket.
    pub name: String,

    /// When the bucket was created.
    pub creation_date: Option<DateTime<Utc>>,

    /// Object count from the `NumberOfObjects` metric.
    pub object_count: f64,

    /// Present when metadata reporting is enabled.
    pub metadata: Option<BucketMetadata>,

    /// Present when the bucket isn't empty.
    pub usage: Option<BucketUsage>,
}

impl BucketSummary {
    /// Gather the summary of `bucket`.
    ///
    /// The object count always comes from CloudWatch. Only buckets with a
    /// positive object count are listed and sized.
    pub async fn gather<S, M>(
        ctx: &ReportContext<'_, S, M>,
        bucket: &Bucket,
    ) -> Result<Self>
    where
        S: StorageService,
        M: MetricsService,
    {
        let name = &bucket.name;

        info!("Gathering summary for '{}'", name);

        let object_count = ctx.metric_sum(
            NUMBER_OF_OBJECTS,
            name,
            &[ALL_STORAGE_TYPES],
        ).await?;

        let metadata = if ctx.config.include_metadata {
            Some(BucketMetadata::probe(ctx.storage, name).await)
        }
        else {
            None
        };

        let usage = if object_count > 0.0 {
            Some(Self::usage(ctx, name).await?)
        }
        else {
            debug!("gather: '{}' is empty", name);
            None
        };

        Ok(Self {
            name:          name.clone(),
            creation_date: bucket.creation_date,
            object_count:  object_count,
            metadata:      metadata,
            usage:         usage,
        })
    }

    // Size comes from listing the prefix when we have one, otherwise from the
    // BucketSizeBytes metric across every storage class.
    async fn usage<S, M>(
        ctx: &ReportContext<'_, S, M>,
        bucket: &str,
    ) -> Result<BucketUsage>
    where
        S: StorageService,
        M: MetricsService,
    {
        let first_page    = ctx.storage.list_objects(bucket, None, None).await?;
        let last_modified = first_page.last_modified();

        let total_size_kb = match ctx.config.prefix() {
            Some(prefix) => {
                prefix_size_kb(ctx.storage, bucket, prefix, first_page).await?
            },
            None => {
                let bytes = ctx.metric_sum(
                    BUCKET_SIZE_BYTES,
                    bucket,
                    STORAGE_CLASSES,
                ).await?;

                bytes.trunc() / BYTES_PER_KB
            },
        };

        let cost_usd = monthly_cost(total_size_kb);

        debug!(
            "usage: '{}' is {} KB costing {} USD",
            bucket,
            total_size_kb,
            cost_usd,
        );

        Ok(BucketUsage {
            total_size_kb,
            last_modified,
            cost_usd,
        })
    }
}
