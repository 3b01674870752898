use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::COMPOSITIONAL_SLOTS;

/// One ranked grounding hypothesis for a concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroundingCandidate {
    /// A single ontology identifier.
    Flat { id: String, score: f64 },
    /// Positional ontology-path segments: theme, theme property, process,
    /// process property. Absent segments stay `None` in place.
    Compositional {
        slots: [Option<String>; COMPOSITIONAL_SLOTS],
        score: f64,
    },
}

impl GroundingCandidate {
    pub fn flat(id: impl Into<String>, score: f64) -> Self {
        Self::Flat {
            id: id.into(),
            score,
        }
    }

    pub fn compositional(slots: [Option<&str>; COMPOSITIONAL_SLOTS], score: f64) -> Self {
        Self::Compositional {
            slots: slots.map(|s| s.map(str::to_string)),
            score,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Self::Flat { score, .. } | Self::Compositional { score, .. } => *score,
        }
    }

    /// Sort key with NaN ranked below every real score.
    fn rank(&self) -> f64 {
        let score = self.score();
        if score.is_nan() {
            f64::NEG_INFINITY
        } else {
            score
        }
    }
}

/// A named entity with ranked groundings per namespace.
///
/// Candidates are always held in descending score order, whether the concept
/// was built in code or deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConceptRepr")]
pub struct Concept {
    /// Surface text; the fallback identity of an ungrounded concept.
    pub name: String,
    /// Namespace → candidates, best first.
    #[serde(default)]
    pub groundings: BTreeMap<String, Vec<GroundingCandidate>>,
}

#[derive(Deserialize)]
struct ConceptRepr {
    name: String,
    #[serde(default)]
    groundings: BTreeMap<String, Vec<GroundingCandidate>>,
}

impl From<ConceptRepr> for Concept {
    fn from(repr: ConceptRepr) -> Self {
        repr.groundings.into_iter().fold(
            Concept::new(repr.name),
            |concept, (namespace, candidates)| concept.with_grounding(namespace, candidates),
        )
    }
}

impl Concept {
    /// An ungrounded concept.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groundings: BTreeMap::new(),
        }
    }

    /// Attach candidates under `namespace`, sorting them best first.
    /// An empty candidate list removes the namespace.
    pub fn with_grounding(
        mut self,
        namespace: impl Into<String>,
        mut candidates: Vec<GroundingCandidate>,
    ) -> Self {
        let namespace = namespace.into();
        if candidates.is_empty() {
            self.groundings.remove(&namespace);
            return self;
        }
        candidates.sort_by(|a, b| b.rank().total_cmp(&a.rank()));
        self.groundings.insert(namespace, candidates);
        self
    }

    /// The top-ranked candidate in `namespace`, if any.
    pub fn top_grounding(&self, namespace: &str) -> Option<&GroundingCandidate> {
        self.groundings.get(namespace).and_then(|c| c.first())
    }

    pub fn is_grounded(&self, namespace: &str) -> bool {
        self.top_grounding(namespace).is_some()
    }
}
