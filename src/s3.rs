// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Conversion of the S3 bucket listing into our `Buckets`.
mod bucket_list;

/// S3 `Client`.
mod client;

/// Implementation of the `StorageService` trait for our S3 `Client`.
mod storage_service;

pub use client::*;
