// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_config::SdkConfig;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::error::{
    DisplayErrorContext,
    ProvideErrorMetadata,
    SdkError,
};
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    Buckets,
    Capability,
    ObjectEntry,
    ObjectPage,
    WebsiteCapability,
};
use std::error::Error as StdError;
use std::fmt::Debug;
use super::bucket_list::BucketList;
use tracing::debug;

// Error codes S3 returns when the configuration we asked for isn't set.
const NO_PUBLIC_ACCESS_BLOCK: &str = "NoSuchPublicAccessBlockConfiguration";
const NO_WEBSITE: &str = "NoSuchWebsiteConfiguration";
const NO_ENCRYPTION: &str = "ServerSideEncryptionConfigurationNotFoundError";

/// The S3 `Client`.
#[derive(Debug)]
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` using the shared AWS `config`.
    pub fn new(config: &SdkConfig) -> Self {
        debug!("new: Creating S3Client in region '{:?}'", config.region());

        Self {
            client: S3Client::new(config),
        }
    }

    /// Returns every bucket owned by the current credentials.
    pub async fn list_buckets(&self) -> Result<Buckets> {
        debug!("list_buckets: Listing...");

        let output = self.client.list_buckets()
            .send()
            .await
            .context("Failed to list buckets")?;

        let bucket_list = BucketList::try_from(output)?;

        Ok(bucket_list.into_buckets())
    }

    /// Returns a single page of a `ListObjectsV2` listing of `bucket`.
    pub async fn list_objects_page(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        debug!(
            "list_objects_page: '{}' prefix {:?} token {:?}",
            bucket,
            prefix,
            continuation_token,
        );

        let output = self.client.list_objects_v2()
            .bucket(bucket)
            .set_prefix(prefix.map(String::from))
            .set_continuation_token(continuation_token)
            .send()
            .await
            .with_context(|| format!("Failed to list objects in '{bucket}'"))?;

        let mut objects = Vec::new();

        for object in output.contents() {
            let size = u64::try_from(object.size().unwrap_or_default())
                .context("object size")?;

            let last_modified = object.last_modified()
                .map(|date| date.to_chrono_utc())
                .transpose()
                .context("object last modified")?;

            objects.push(ObjectEntry {
                size,
                last_modified,
            });
        }

        let page = ObjectPage {
            objects:                 objects,
            is_truncated:            output.is_truncated().unwrap_or(false),
            next_continuation_token: output.next_continuation_token()
                .map(String::from),
        };

        debug!(
            "list_objects_page: '{}' returned {} objects, truncated: {}",
            bucket,
            page.objects.len(),
            page.is_truncated,
        );

        Ok(page)
    }

    /// Returns whether `bucket` has a public access block configured.
    pub async fn get_public_access_block(&self, bucket: &str) -> Capability {
        debug!("get_public_access_block for '{}'", bucket);

        let output = self.client.get_public_access_block()
            .bucket(bucket)
            .send()
            .await;

        match output {
            Ok(_)    => Capability::Enabled,
            Err(err) => capability_from_error(bucket, &err, NO_PUBLIC_ACCESS_BLOCK),
        }
    }

    /// Returns whether `bucket` has website hosting configured, along with
    /// the host requests are redirected to, if any.
    pub async fn get_bucket_website(&self, bucket: &str) -> WebsiteCapability {
        debug!("get_bucket_website for '{}'", bucket);

        let output = self.client.get_bucket_website()
            .bucket(bucket)
            .send()
            .await;

        match output {
            Ok(output) => {
                let host = output.redirect_all_requests_to()
                    .map(|redirect| redirect.host_name().to_string());

                WebsiteCapability::enabled(host)
            },
            Err(err) => {
                let capability = capability_from_error(bucket, &err, NO_WEBSITE);

                WebsiteCapability::disabled(capability)
            },
        }
    }

    /// Returns whether `bucket` has default encryption configured.
    pub async fn get_bucket_encryption(&self, bucket: &str) -> Capability {
        debug!("get_bucket_encryption for '{}'", bucket);

        let output = self.client.get_bucket_encryption()
            .bucket(bucket)
            .send()
            .await;

        match output {
            Ok(_)    => Capability::Enabled,
            Err(err) => capability_from_error(bucket, &err, NO_ENCRYPTION),
        }
    }
}

// Any failure of a probe is a negative answer. We only keep track of whether
// it was S3 telling us the configuration is missing or something else.
fn capability_from_error<E, R>(
    bucket: &str,
    err: &SdkError<E, R>,
    not_configured: &str,
) -> Capability
where
    E: ProvideErrorMetadata + StdError + 'static,
    R: Debug,
{
    let code = err.as_service_error().and_then(|e| e.code());

    let capability = match code {
        Some(code) if code == not_configured => Capability::NotConfigured,
        Some(code) => Capability::Unknown(code.to_string()),
        None       => Capability::Unknown(DisplayErrorContext(err).to_string()),
    };

    debug!("'{}' probe failed: {:?}", bucket, capability);

    capability
}
