// Runs the report across the selected buckets
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    bail,
    Result,
};
use crate::common::{
    Bucket,
    Buckets,
    MetricsService,
    ScanMode,
    StorageService,
};
use std::io::Write;
use super::bucket_summary::BucketSummary;
use super::context::ReportContext;
use super::render::{
    render_bucket,
    render_total,
};
use tracing::debug;

/// Pick `bucket_name` out of `buckets`.
///
/// Failing to find the bucket is fatal to the run, nothing is reported.
pub fn select_bucket(buckets: Buckets, bucket_name: &str) -> Result<Bucket> {
    debug!("select_bucket: Looking for '{}'", bucket_name);

    match buckets.into_iter().find(|b| b.name == bucket_name) {
        Some(bucket) => Ok(bucket),
        None         => bail!("Bucket {bucket_name} not found. Terminating..."),
    }
}

async fn report_bucket<S, M, W>(
    ctx: &ReportContext<'_, S, M>,
    bucket: &Bucket,
    out: &mut W,
) -> Result<()>
where
    S: StorageService,
    M: MetricsService,
    W: Write,
{
    let summary = BucketSummary::gather(ctx, bucket).await?;

    render_bucket(out, &summary)?;

    Ok(())
}

/// Write the report for the buckets selected by the run configuration to
/// `out`.
///
/// Buckets are processed one at a time, in the order S3 lists them. Any
/// error other than a failed metadata probe ends the run.
pub async fn run<S, M, W>(ctx: &ReportContext<'_, S, M>, out: &mut W) -> Result<()>
where
    S: StorageService,
    M: MetricsService,
    W: Write,
{
    let buckets = ctx.storage.buckets().await?;

    match &ctx.config.scan_mode {
        ScanMode::SinglePrefix { bucket, .. } => {
            let bucket = select_bucket(buckets, bucket)?;

            report_bucket(ctx, &bucket, out).await?;
        },
        ScanMode::AllBuckets => {
            render_total(out, buckets.len())?;

            for bucket in &buckets {
                report_bucket(ctx, bucket, out).await?;
            }
        },
    }

    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{
        TimeZone,
        Utc,
    };
    use crate::common::fakes::{
        FakeMetrics,
        FakeStorage,
    };
    use crate::common::{
        ObjectEntry,
        ObjectPage,
        RunConfig,
        NUMBER_OF_OBJECTS,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn bucket(name: &str) -> Bucket {
        Bucket {
            name:          name.into(),
            creation_date: Some(Utc.with_ymd_and_hms(2020, 3, 12, 14, 45, 0).unwrap()),
        }
    }

    fn storage(names: &[&str]) -> FakeStorage {
        FakeStorage {
            buckets: names.iter().map(|name| bucket(name)).collect(),
            ..Default::default()
        }
    }

    async fn run_to_string(
        storage: &FakeStorage,
        metrics: &FakeMetrics,
        config: &RunConfig,
    ) -> (Result<()>, String) {
        let now = Utc.with_ymd_and_hms(2020, 3, 14, 0, 0, 0).unwrap();
        let ctx = ReportContext::new(storage, metrics, config, now);

        let mut out = Vec::new();
        let ret     = run(&ctx, &mut out).await;

        (ret, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_select_bucket() {
        let buckets = vec![bucket("a-bucket"), bucket("b-bucket")];

        let ret = select_bucket(buckets.clone(), "b-bucket").unwrap();
        assert_eq!(ret, bucket("b-bucket"));

        let err = select_bucket(buckets, "c-bucket").unwrap_err();
        assert_eq!(err.to_string(), "Bucket c-bucket not found. Terminating...");
    }

    #[tokio::test]
    async fn test_run_all_buckets_empty() {
        let storage = storage(&["a-bucket", "b-bucket", "c-bucket"]);
        let metrics = FakeMetrics::default();
        let config  = RunConfig::default();

        let (ret, out) = run_to_string(&storage, &metrics, &config).await;

        assert!(ret.is_ok());
        assert!(out.starts_with("Total number of Buckets: 3 \n\n"));
        assert_eq!(
            out.matches("The bucket is empty, skipping cost and usage details...").count(),
            3,
        );
        assert!(!out.contains("Total size"));
        assert!(!out.contains("USD"));

        let headers: Vec<&str> = out.lines()
            .filter(|line| line.starts_with("------"))
            .collect();

        assert_eq!(headers, vec![
            "------ a-bucket ------",
            "------ b-bucket ------",
            "------ c-bucket ------",
        ]);
    }

    #[tokio::test]
    async fn test_run_single_bucket_missing() {
        let storage = storage(&["a-bucket"]);
        let metrics = FakeMetrics::default();
        let config  = RunConfig {
            scan_mode: ScanMode::SinglePrefix {
                bucket: "missing-bucket".into(),
                prefix: "logs/".into(),
            },
            include_metadata: true,
        };

        let (ret, out) = run_to_string(&storage, &metrics, &config).await;

        let err = ret.unwrap_err();
        assert_eq!(err.to_string(), "Bucket missing-bucket not found. Terminating...");
        assert_eq!(out, "");
        assert!(metrics.queries().is_empty());
    }

    #[tokio::test]
    async fn test_run_single_bucket() {
        let mut storage = storage(&["a-bucket", "b-bucket"]);

        let mut pages = HashMap::new();
        pages.insert(None, ObjectPage {
            objects: vec![ObjectEntry {
                size:          10,
                last_modified: Some(Utc.with_ymd_and_hms(2020, 3, 13, 9, 0, 0).unwrap()),
            }],
            is_truncated:            true,
            next_continuation_token: Some("token-1".into()),
        });
        pages.insert(Some("token-1".into()), ObjectPage {
            objects: vec![ObjectEntry { size: 2_500_000, last_modified: None }],
            ..Default::default()
        });
        storage.pages.insert("b-bucket".into(), pages);

        let metrics = FakeMetrics::default()
            .with_series("b-bucket", NUMBER_OF_OBJECTS, vec![vec![2.0]]);
        let config  = RunConfig {
            scan_mode: ScanMode::SinglePrefix {
                bucket: "b-bucket".into(),
                prefix: "logs/".into(),
            },
            include_metadata: false,
        };

        let (ret, out) = run_to_string(&storage, &metrics, &config).await;

        assert!(ret.is_ok());

        let expected = concat!(
            "------ b-bucket ------\n",
            "CreationDate: 2020-03-12 14:45:00 UTC\n",
            "Number of objects: 2\n",
            "Total size: 2500.00 KB\n",
            "Last modified: 2020-03-13 09:00:00 UTC\n",
            "Total storage cost: 0.00 USD\n",
            "\n",
            "\n",
        );

        assert_eq!(out, expected);
    }

    #[tokio::test]
    async fn test_run_stops_on_error() {
        let mut storage = storage(&["a-bucket", "b-bucket"]);
        storage.fail_listing = true;

        let metrics = FakeMetrics::default()
            .with_series("a-bucket", NUMBER_OF_OBJECTS, vec![vec![1.0]]);
        let config  = RunConfig::default();

        let (ret, out) = run_to_string(&storage, &metrics, &config).await;

        assert!(ret.is_err());
        assert!(!out.contains("b-bucket"));
    }
}
