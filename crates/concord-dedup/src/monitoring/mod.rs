//! Run metrics for the deduplication pipeline.

pub mod metrics;

pub use metrics::DedupMetrics;
