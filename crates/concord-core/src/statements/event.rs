use serde::{Deserialize, Serialize};

use super::concept::Concept;
use super::context::{LocationContext, TimeContext, WorldContext};
use super::evidence::Evidence;
use super::polarity::Polarity;

/// A causal-graph node: something that happens to a concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub concept: Concept,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<WorldContext>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

impl Event {
    pub fn new(concept: Concept) -> Self {
        Self {
            concept,
            polarity: None,
            adjectives: Vec::new(),
            context: None,
            evidence: Vec::new(),
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    pub fn with_context(mut self, context: WorldContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_evidence(mut self, evidence: Vec<Evidence>) -> Self {
        self.evidence = evidence;
        self
    }

    /// The event's location, if it resolves to a non-blank identifier.
    pub fn location(&self) -> Option<&LocationContext> {
        self.context.as_ref().and_then(WorldContext::location)
    }

    /// The event's time interval, if any field of it is set.
    pub fn interval(&self) -> Option<&TimeContext> {
        self.context.as_ref().and_then(WorldContext::interval)
    }

    pub fn has_context(&self) -> bool {
        self.context.as_ref().is_some_and(WorldContext::is_present)
    }
}
