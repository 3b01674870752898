//! World context attached to events: geographic location and time interval.
//!
//! Presence is decided in exactly one place per type (`is_present`). A context
//! that exists but carries nothing usable is treated as no context at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time interval, possibly partially specified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    /// Raw text the interval was read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl TimeContext {
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            text: None,
            start: Some(start),
            end: Some(end),
            duration: Some((end - start).num_seconds()),
        }
    }

    /// True if any of start, end, or duration is set.
    pub fn is_present(&self) -> bool {
        self.start.is_some() || self.end.is_some() || self.duration.is_some()
    }

    /// True if both bounds are set and the end precedes the start.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if e < s)
    }
}

/// An opaque geographic entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Gazetteer identifier. Compared by identity only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl LocationContext {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id.into()),
        }
    }

    /// The identifier, if it is non-blank.
    pub fn resolved_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    pub fn is_present(&self) -> bool {
        self.resolved_id().is_some()
    }
}

/// Location and time of an event (or of the evidence describing it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<LocationContext>,
}

impl WorldContext {
    pub fn located(location: LocationContext) -> Self {
        Self {
            time: None,
            geo_location: Some(location),
        }
    }

    pub fn timed(time: TimeContext) -> Self {
        Self {
            time: Some(time),
            geo_location: None,
        }
    }

    /// The location, if present.
    pub fn location(&self) -> Option<&LocationContext> {
        self.geo_location.as_ref().filter(|l| l.is_present())
    }

    /// The time interval, if present.
    pub fn interval(&self) -> Option<&TimeContext> {
        self.time.as_ref().filter(|t| t.is_present())
    }

    pub fn is_present(&self) -> bool {
        self.location().is_some() || self.interval().is_some()
    }
}
