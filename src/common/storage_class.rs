// Storage types that S3 publishes CloudWatch metrics for
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// `StorageType` dimension value covering every storage class at once. Only
/// valid for the `NumberOfObjects` metric.
pub const ALL_STORAGE_TYPES: &str = "AllStorageTypes";

/// Storage types that make up the `BucketSizeBytes` metric of a bucket.
///
/// Summing the latest datapoint of each of these gives the bucket size.
pub const STORAGE_CLASSES: &[&str] = &[
    "StandardStorage",
    "IntelligentTieringFAStorage",
    "IntelligentTieringIAStorage",
    "IntelligentTieringAAStorage",
    "IntelligentTieringDAAStorage",
    "StandardIAStorage",
    "StandardIASizeOverhead",
    "StandardIAObjectOverhead",
    "OneZoneIAStorage",
    "OneZoneIASizeOverhead",
    "ReducedRedundancyStorage",
    "GlacierStorage",
    "GlacierStagingStorage",
    "GlacierObjectOverhead",
    "GlacierS3ObjectOverhead",
    "DeepArchiveStorage",
    "DeepArchiveObjectOverhead",
    "DeepArchiveS3ObjectOverhead",
    "DeepArchiveStagingStorage",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_storage_classes_unique() {
        let unique: HashSet<&&str> = STORAGE_CLASSES.iter().collect();

        assert_eq!(unique.len(), STORAGE_CLASSES.len());
        assert!(!STORAGE_CLASSES.contains(&ALL_STORAGE_TYPES));
    }
}
