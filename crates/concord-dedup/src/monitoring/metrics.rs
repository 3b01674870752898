//! Counters collected across the five phases of a run.

use concord_core::strategy::MatchingStrategy;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DedupMetrics {
    pub strategy: MatchingStrategy,
    pub input: usize,
    pub rejected: usize,
    /// Distinct match keys, i.e. representatives after merge.
    pub buckets: usize,
    /// Ordered representative pairs that reached the refinement evaluator.
    pub pairs_evaluated: usize,
    pub strict_edges: usize,
    pub top_level: usize,
    /// Top-level statements with no reachable maximal element.
    pub promoted: usize,
    pub parallel: bool,
    pub elapsed_ms: u64,
}

impl DedupMetrics {
    pub fn new(strategy: MatchingStrategy, input: usize) -> Self {
        Self {
            strategy,
            input,
            ..Default::default()
        }
    }

    /// Accepted statements per emitted statement. 1.0 when nothing was emitted.
    pub fn compression_ratio(&self) -> f64 {
        if self.top_level == 0 {
            return 1.0;
        }
        (self.input - self.rejected) as f64 / self.top_level as f64
    }

    /// Representatives that were folded into a more general statement.
    pub fn absorbed(&self) -> usize {
        self.buckets.saturating_sub(self.top_level)
    }

    pub fn log(&self) {
        info!(
            strategy = %self.strategy,
            input = self.input,
            rejected = self.rejected,
            buckets = self.buckets,
            strict_edges = self.strict_edges,
            top_level = self.top_level,
            promoted = self.promoted,
            parallel = self.parallel,
            elapsed_ms = self.elapsed_ms,
            compression_ratio = format!("{:.2}", self.compression_ratio()),
            "Deduplication complete"
        );
    }
}
