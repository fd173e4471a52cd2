// Imports all of the components needed for cloudwatch::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// CloudWatch `Client`.
mod client;

/// Implementation of the `MetricsService` trait for our CloudWatch `Client`.
mod metrics_service;

pub use client::*;
