// Text output of the report
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Utc,
};
use crate::common::format_two_decimal_points;
use std::io::{
    self,
    Write,
};
use super::bucket_summary::{
    BucketMetadata,
    BucketSummary,
};

// Shown in place of a timestamp S3 didn't give us.
const UNKNOWN: &str = "unknown";

fn timestamp(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(time) => time.to_string(),
        None       => UNKNOWN.to_string(),
    }
}

/// Write the line giving the number of buckets in the report.
pub fn render_total<W: Write>(out: &mut W, total_buckets: usize) -> io::Result<()> {
    writeln!(out, "Total number of Buckets: {total_buckets} \n")
}

fn render_metadata<W: Write>(out: &mut W, metadata: &BucketMetadata) -> io::Result<()> {
    writeln!(
        out,
        "Public Access Block enabled: {}",
        metadata.public_access_block.is_enabled(),
    )?;

    writeln!(out, "Encryption enabled: {}", metadata.encryption.is_enabled())?;

    match metadata.website.as_report() {
        (true, Some(host)) => {
            writeln!(out, "Website enabled: true, Host: {host}")
        },
        (enabled, _) => writeln!(out, "Website enabled: {enabled}"),
    }
}

/// Write the block for a single bucket, followed by a blank line.
pub fn render_bucket<W: Write>(out: &mut W, summary: &BucketSummary) -> io::Result<()> {
    writeln!(out, "------ {} ------", summary.name)?;
    writeln!(out, "CreationDate: {}", timestamp(summary.creation_date))?;

    if let Some(metadata) = &summary.metadata {
        render_metadata(out, metadata)?;
    }

    match &summary.usage {
        Some(usage) => {
            // Counts are whole objects, drop anything after the point.
            let object_count = summary.object_count.trunc() as u64;

            writeln!(out, "Number of objects: {object_count}")?;
            writeln!(
                out,
                "Total size: {} KB",
                format_two_decimal_points(usage.total_size_kb),
            )?;
            writeln!(out, "Last modified: {}", timestamp(usage.last_modified))?;
            writeln!(
                out,
                "Total storage cost: {} USD",
                format_two_decimal_points(usage.cost_usd),
            )?;
        },
        None => {
            writeln!(out, "The bucket is empty, skipping cost and usage details...")?;
        },
    }

    writeln!(out, "\n")
}
