//! Configuration for Concord.
//! TOML-based; every section falls back to compiled defaults.

pub mod concord_config;
pub mod dedup_config;
pub mod defaults;
pub mod matching_config;

pub use concord_config::ConcordConfig;
pub use dedup_config::DedupConfig;
pub use matching_config::MatchingConfig;
