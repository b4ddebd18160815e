/// Adaptive-precision number formatting.
pub mod format;
/// Text histograms of sample sets.
pub mod histogram;
/// Percentile extraction from samples.
pub mod quantiles;
