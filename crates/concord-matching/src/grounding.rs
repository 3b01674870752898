//! Grounding key resolution: the top-ranked candidate of a concept, flat or
//! as a positional tuple of ontology-path segments.

use concord_core::config::MatchingConfig;
use concord_core::constants::COMPOSITIONAL_SLOTS;
use concord_core::keys::GroundingKey;
use concord_core::statements::{Concept, GroundingCandidate};

/// Resolve the grounding key of `concept` in `namespace`.
///
/// Ungrounded concepts fall back to their surface name, so ungrounded concepts
/// with different text never collide. Never fails.
pub fn resolve_grounding(concept: &Concept, namespace: &str, compositional: bool) -> GroundingKey {
    let Some(top) = concept.top_grounding(namespace) else {
        return GroundingKey::Ungrounded(concept.name.clone());
    };
    match (top, compositional) {
        (GroundingCandidate::Flat { id, .. }, false) => GroundingKey::Flat(id.clone()),
        (GroundingCandidate::Flat { id, .. }, true) => {
            let mut slots: [Option<String>; COMPOSITIONAL_SLOTS] = Default::default();
            slots[0] = Some(id.clone());
            GroundingKey::Compositional(slots)
        }
        (GroundingCandidate::Compositional { slots, .. }, true) => {
            GroundingKey::Compositional(slots.clone())
        }
        (GroundingCandidate::Compositional { slots, .. }, false) => {
            match slots.iter().flatten().next() {
                Some(first) => GroundingKey::Flat(first.clone()),
                None => GroundingKey::Ungrounded(concept.name.clone()),
            }
        }
    }
}

/// Namespace and mode bound once, from config.
#[derive(Debug, Clone)]
pub struct GroundingResolver {
    namespace: String,
    compositional: bool,
}

impl GroundingResolver {
    pub fn new(namespace: impl Into<String>, compositional: bool) -> Self {
        Self {
            namespace: namespace.into(),
            compositional,
        }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.grounding_namespace.clone(), config.compositional)
    }

    pub fn resolve(&self, concept: &Concept) -> GroundingKey {
        resolve_grounding(concept, &self.namespace, self.compositional)
    }
}

impl Default for GroundingResolver {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}
