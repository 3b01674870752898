use serde::{Deserialize, Serialize};

use super::defaults;
use crate::strategy::MatchingStrategy;

/// How groundings are read and which strategy applies when none is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Grounding namespace to read candidates from.
    pub grounding_namespace: String,
    /// Read groundings as positional ontology-path tuples.
    pub compositional: bool,
    /// Strategy used by `DedupEngine::deduplicate_default`.
    pub strategy: MatchingStrategy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            grounding_namespace: defaults::DEFAULT_GROUNDING_NAMESPACE.to_string(),
            compositional: defaults::DEFAULT_COMPOSITIONAL,
            strategy: defaults::DEFAULT_STRATEGY,
        }
    }
}
