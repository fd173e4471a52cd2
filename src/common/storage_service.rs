// StorageService trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use chrono::{
    DateTime,
    Utc,
};
use super::{
    Buckets,
    Capability,
    WebsiteCapability,
};

/// A single object from a bucket listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectEntry {
    /// Size of the object in bytes.
    pub size: u64,

    /// When the object was last modified.
    pub last_modified: Option<DateTime<Utc>>,
}

/// One page of a bucket listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectPage {
    /// Objects on this page.
    pub objects: Vec<ObjectEntry>,

    /// Whether more pages follow this one.
    pub is_truncated: bool,

    /// Token to pass back to fetch the next page.
    pub next_continuation_token: Option<String>,
}

impl ObjectPage {
    /// Total size of the objects on this page, in bytes.
    pub fn size(&self) -> u64 {
        self.objects.iter().map(|o| o.size).sum()
    }

    /// The newest modification time on this page.
    ///
    /// Returns `None` if the page is empty or no object has a timestamp.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.objects
            .iter()
            .filter_map(|o| o.last_modified)
            .max()
    }
}

/// `StorageService` represents the S3 calls needed to build the report.
///
/// This trait should be implemented by all `Client`s talking to S3.
#[async_trait]
pub trait StorageService {
    /// Returns every bucket visible to the current credentials.
    async fn buckets(&self) -> Result<Buckets>;

    /// Returns one page of objects from `bucket`, optionally filtered by
    /// `prefix` and continuing from `continuation_token`.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage>;

    /// Whether `bucket` has a public access block configuration.
    async fn public_access_block(&self, bucket: &str) -> Capability;

    /// Whether `bucket` has a website configuration.
    async fn website(&self, bucket: &str) -> WebsiteCapability;

    /// Whether `bucket` has a default encryption configuration.
    async fn encryption(&self, bucket: &str) -> Capability;
}
