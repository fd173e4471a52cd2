// RunConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Which buckets the report covers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScanMode {
    /// Every bucket in the account, sized from CloudWatch metrics.
    AllBuckets,

    /// A single bucket, sized by listing the objects under `prefix`.
    SinglePrefix {
        /// Name of the bucket to report on.
        bucket: String,

        /// Key prefix used when listing objects.
        prefix: String,
    },
}

/// Run configuration.
///
/// Built once from the interactive answers before any AWS client exists and
/// never changed afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunConfig {
    /// The buckets to report on.
    pub scan_mode: ScanMode,

    /// Whether the public access block, encryption and website probes run.
    pub include_metadata: bool,
}

impl RunConfig {
    /// Returns the prefix to list with, if running in prefix mode.
    pub fn prefix(&self) -> Option<&str> {
        match &self.scan_mode {
            ScanMode::AllBuckets                 => None,
            ScanMode::SinglePrefix { prefix, .. } => Some(prefix),
        }
    }
}

impl Default for RunConfig {
    /// Returns a default `RunConfig`.
    ///
    /// ```rust
    /// RunConfig {
    ///     scan_mode:        ScanMode::AllBuckets,
    ///     include_metadata: false,
    /// }
    /// ```
    fn default() -> Self {
        Self {
            scan_mode:        ScanMode::AllBuckets,
            include_metadata: false,
        }
    }
}
