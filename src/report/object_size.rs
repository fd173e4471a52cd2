// Sizing a bucket prefix from the object listing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    anyhow,
    Result,
};
use crate::common::{
    ObjectPage,
    StorageService,
};
use tracing::debug;

/// Bytes per KB. Sizes are reported in decimal units.
pub const BYTES_PER_KB: f64 = 1_000.0;

/// Size in KB of the objects under `prefix`, following on from `first_page`.
///
/// Only the pages fetched after `first_page` are counted, `first_page` itself
/// never adds to the total. Each of those pages continues from the token of
/// the page before it, with the listing filtered by `prefix`.
pub async fn prefix_size_kb<S>(
    storage: &S,
    bucket: &str,
    prefix: &str,
    first_page: ObjectPage,
) -> Result<f64>
where
    S: StorageService + ?Sized,
{
    let mut page       = first_page;
    let mut size: u64  = 0;
    let mut page_count = 0;

    while page.is_truncated {
        let token = page.next_continuation_token
            .take()
            .ok_or_else(|| {
                anyhow!("Listing of '{bucket}' is truncated but has no continuation token")
            })?;

        page = storage.list_objects(bucket, Some(prefix), Some(token)).await?;
        size += page.size();
        page_count += 1;
    }

    debug!(
        "prefix_size_kb: '{}' prefix '{}' is {} bytes over {} pages",
        bucket,
        prefix,
        size,
        page_count,
    );

    Ok(size as f64 / BYTES_PER_KB)
}
