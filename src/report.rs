// Gathers and prints the per-bucket report
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// `BucketSummary` and the metadata and usage that make it up.
mod bucket_summary;

/// `ReportContext`, shared by every bucket in a run.
mod context;

/// Sizing a prefix from the object listing.
mod object_size;

/// Text output.
mod render;

/// Bucket selection and the main report loop.
mod runner;

pub use context::ReportContext;
pub use runner::run;
