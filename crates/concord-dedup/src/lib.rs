//! # concord-dedup
//!
//! 5-phase deduplication pipeline: validation → bucketing → merge →
//! refinement → top level. Duplicates collapse into one representative per
//! match key; representatives are then ordered by the refinement relation and
//! only the most general ones are emitted, each carrying the hashes of the
//! statements that support it.

pub mod engine;
pub mod filters;
pub mod models;
pub mod monitoring;
pub mod pipeline;

pub use engine::DedupEngine;
pub use models::{AssembledStatement, DedupInput, DedupReport, RejectedStatement};
pub use monitoring::DedupMetrics;
