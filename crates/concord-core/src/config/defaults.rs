// Single source of truth for all default values.

use crate::strategy::MatchingStrategy;

// --- Matching ---
pub const DEFAULT_GROUNDING_NAMESPACE: &str = "WM";
pub const DEFAULT_COMPOSITIONAL: bool = false;
pub const DEFAULT_STRATEGY: MatchingStrategy = MatchingStrategy::Grounding;

// --- Dedup ---
pub const DEFAULT_PARALLEL: bool = true;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;
pub const DEFAULT_REFINEMENT_CACHE_CAPACITY: u64 = 100_000;
