// Storage cost calculation
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Monthly price of one GB of S3 Standard storage, in USD.
pub const STORAGE_PRICE_PER_GB: f64 = 0.0023;

// Sizes are decimal, 1 GB is 1,000,000 KB.
const KB_PER_GB: f64 = 1_000_000.0;

/// Estimated monthly cost in USD of storing `size_kb` kilobytes.
pub fn monthly_cost(size_kb: f64) -> f64 {
    (size_kb / KB_PER_GB) * STORAGE_PRICE_PER_GB
}

/// Format `value` with exactly two decimal places.
pub fn format_two_decimal_points(value: f64) -> String {
    format!("{value:.2}")
}
