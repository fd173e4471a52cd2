// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Utc,
};

/// Represents an S3 bucket as returned by the bucket listing.
///
/// This will always have a `name` and optionally a `creation_date`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    /// Name of the bucket.
    pub name: String,

    /// When the bucket was created, if S3 told us.
    pub creation_date: Option<DateTime<Utc>>,
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;
