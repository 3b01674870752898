//! Canonical match keys.
//!
//! A [`MatchKey`] is computed for one statement under one strategy (see
//! `concord-matching`). Two statements with equal keys are duplicates and are
//! merged; key ordering is the tie-break for deterministic output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::COMPOSITIONAL_SLOTS;
use crate::errors::ConcordResult;
use crate::statements::{Polarity, TimeContext};

/// Identity of a concept's grounding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GroundingKey {
    /// No grounding: the surface text stands in.
    Ungrounded(String),
    Flat(String),
    /// Fixed-width; `None` marks an absent segment in place.
    Compositional([Option<String>; COMPOSITIONAL_SLOTS]),
}

/// Identity of a resolved location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationKey(pub String);

/// Identity of a time interval.
///
/// Bounds decide identity whenever one is present: with both bounds the
/// duration is their span, with one bound it is dropped. A stored duration
/// only counts for intervals with no bounds at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeKey {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub duration: Option<i64>,
}

impl TimeKey {
    pub fn from_context(time: &TimeContext) -> Self {
        let duration = match (time.start, time.end) {
            (Some(s), Some(e)) => Some((e - s).num_seconds()),
            (None, None) => time.duration,
            _ => None,
        };
        Self {
            start: time.start,
            end: time.end,
            duration,
        }
    }
}

/// A context dimension inside a key.
///
/// `Ignored` is only produced when the strategy does not consider the
/// dimension. A strategy that does consider it always yields `Absent` or
/// `Present`, so events with and without context never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ContextSlot<T> {
    Ignored,
    Absent,
    Present(T),
}

impl<T> ContextSlot<T> {
    /// Build a slot for a considered dimension.
    pub fn considered(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }

    pub fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            _ => None,
        }
    }
}

/// Key of a single event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventKey {
    pub grounding: GroundingKey,
    pub polarity: Option<Polarity>,
    pub location: ContextSlot<LocationKey>,
    pub time: ContextSlot<TimeKey>,
}

/// Key of any statement, tagged by statement shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchKey {
    Event(EventKey),
    Influence {
        subj: EventKey,
        obj: EventKey,
        polarity_count: u8,
        overall_polarity: Option<Polarity>,
    },
    /// Member keys sorted, so member order never matters.
    Association { members: Vec<EventKey> },
    Opaque { kind: String, key: String },
}

impl MatchKey {
    /// Stable blake3 hex digest of the key, used as the statement's matches-hash.
    pub fn digest(&self) -> ConcordResult<String> {
        let serialized = serde_json::to_string(self)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }
}
