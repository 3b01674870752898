use serde::{Deserialize, Serialize};

use super::event::Event;
use super::evidence::Evidence;
use super::influence::{Association, Influence};

/// A statement this subsystem does not look inside. It arrives with its own
/// canonical identity key, computed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueStatement {
    /// Statement class name, e.g. "Phosphorylation".
    pub kind: String,
    pub matches_key: String,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

/// Closed set of statement shapes handled by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    Event(Event),
    Influence(Influence),
    Association(Association),
    Opaque(OpaqueStatement),
}

impl Statement {
    pub fn evidence(&self) -> &[Evidence] {
        match self {
            Self::Event(e) => &e.evidence,
            Self::Influence(i) => &i.evidence,
            Self::Association(a) => &a.evidence,
            Self::Opaque(o) => &o.evidence,
        }
    }

    /// A copy of this statement carrying `evidence` instead of its own.
    pub fn with_evidence(&self, evidence: Vec<Evidence>) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            Self::Event(e) => e.evidence = evidence,
            Self::Influence(i) => i.evidence = evidence,
            Self::Association(a) => a.evidence = evidence,
            Self::Opaque(o) => o.evidence = evidence,
        }
        copy
    }

    /// The events this statement is made of (itself, for an event).
    pub fn events(&self) -> Vec<&Event> {
        match self {
            Self::Event(e) => vec![e],
            Self::Influence(i) => vec![&i.subj, &i.obj],
            Self::Association(a) => a.members.iter().collect(),
            Self::Opaque(_) => Vec::new(),
        }
    }

    pub fn events_mut(&mut self) -> Vec<&mut Event> {
        match self {
            Self::Event(e) => vec![e],
            Self::Influence(i) => vec![&mut i.subj, &mut i.obj],
            Self::Association(a) => a.members.iter_mut().collect(),
            Self::Opaque(_) => Vec::new(),
        }
    }

    /// Class name, for logs and reports.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Event(_) => "Event",
            Self::Influence(_) => "Influence",
            Self::Association(_) => "Association",
            Self::Opaque(o) => &o.kind,
        }
    }

    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event(_))
    }
}

impl From<Event> for Statement {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

impl From<Influence> for Statement {
    fn from(influence: Influence) -> Self {
        Self::Influence(influence)
    }
}

impl From<Association> for Statement {
    fn from(association: Association) -> Self {
        Self::Association(association)
    }
}

impl From<OpaqueStatement> for Statement {
    fn from(opaque: OpaqueStatement) -> Self {
        Self::Opaque(opaque)
    }
}
