// Implement the StorageService trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    Buckets,
    Capability,
    ObjectPage,
    StorageService,
    WebsiteCapability,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl StorageService for Client {
    /// Return `Buckets` discovered in S3.
    async fn buckets(&self) -> Result<Buckets> {
        let buckets = self.list_buckets().await?;

        debug!("buckets: Found {} buckets", buckets.len());

        Ok(buckets)
    }

    /// Return one page of objects from `bucket`.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        self.list_objects_page(bucket, prefix, continuation_token).await
    }

    async fn public_access_block(&self, bucket: &str) -> Capability {
        self.get_public_access_block(bucket).await
    }

    async fn website(&self, bucket: &str) -> WebsiteCapability {
        self.get_bucket_website(bucket).await
    }

    async fn encryption(&self, bucket: &str) -> Capability {
        self.get_bucket_encryption(bucket).await
    }
}
