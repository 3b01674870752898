use serde::{Deserialize, Serialize};

use super::defaults;

/// Deduplication driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Fan key computation and pairwise refinement out over rayon.
    pub parallel: bool,
    /// Below this many statements the sequential path is used.
    pub parallel_threshold: usize,
    /// Max memoized is-a answers per run.
    pub refinement_cache_capacity: u64,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
            refinement_cache_capacity: defaults::DEFAULT_REFINEMENT_CACHE_CAPACITY,
        }
    }
}

impl DedupConfig {
    /// Whether a run over `n` statements should go parallel.
    pub fn use_parallel(&self, n: usize) -> bool {
        self.parallel && n >= self.parallel_threshold
    }
}
