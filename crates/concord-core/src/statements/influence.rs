use serde::{Deserialize, Serialize};

use super::event::Event;
use super::evidence::Evidence;
use super::polarity::Polarity;

/// A directed causal edge between two events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influence {
    pub subj: Event,
    pub obj: Event,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

impl Influence {
    pub fn new(subj: Event, obj: Event) -> Self {
        Self {
            subj,
            obj,
            evidence: Vec::new(),
        }
    }

    /// Number of endpoints whose polarity is known (0, 1, or 2).
    pub fn polarity_count(&self) -> u8 {
        u8::from(self.subj.polarity.is_some()) + u8::from(self.obj.polarity.is_some())
    }

    /// Product of the endpoint polarities, unknown if either is unknown.
    pub fn overall_polarity(&self) -> Option<Polarity> {
        Some(self.subj.polarity? * self.obj.polarity?)
    }
}

/// An undirected grouping of events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub members: Vec<Event>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

impl Association {
    pub fn new(members: Vec<Event>) -> Self {
        Self {
            members,
            evidence: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements::Concept;

    fn event(polarity: Option<Polarity>) -> Event {
        Event {
            polarity,
            ..Event::new(Concept::new("x"))
        }
    }

    #[test]
    fn overall_polarity_needs_both_endpoints() {
        let inf = Influence::new(event(Some(Polarity::Negative)), event(None));
        assert_eq!(inf.polarity_count(), 1);
        assert_eq!(inf.overall_polarity(), None);

        let inf = Influence::new(
            event(Some(Polarity::Negative)),
            event(Some(Polarity::Negative)),
        );
        assert_eq!(inf.polarity_count(), 2);
        assert_eq!(inf.overall_polarity(), Some(Polarity::Positive));
    }
}
