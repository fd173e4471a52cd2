// Easily handle converting from a ListBucketsOutput into our own BucketList
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Error,
    Result,
};
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    Bucket,
    Buckets,
};

/// Holds the discovered S3 buckets, in the order S3 listed them.
#[derive(Debug)]
pub struct BucketList(Buckets);

/// Implement a conversion from `ListBucketsOutput` to `BucketList`.
///
/// Buckets without a name are skipped. This fails only if a creation date
/// can't be represented as a `chrono` timestamp.
impl TryFrom<ListBucketsOutput> for BucketList {
    type Error = Error;

    fn try_from(output: ListBucketsOutput) -> Result<Self> {
        let mut buckets = Buckets::new();

        for bucket in output.buckets() {
            let name = match bucket.name() {
                Some(name) => name.to_string(),
                None       => continue,
            };

            let creation_date = bucket.creation_date()
                .map(|date| date.to_chrono_utc())
                .transpose()
                .with_context(|| format!("creation date of '{name}'"))?;

            buckets.push(Bucket {
                name,
                creation_date,
            });
        }

        Ok(BucketList(buckets))
    }
}

impl BucketList {
    /// Return the discovered `Buckets`.
    pub fn into_buckets(self) -> Buckets {
        self.0
    }
}
