//! Context extraction: canonical location and time keys of an event, and the
//! event/evidence context consistency check.

use concord_core::errors::{ConcordResult, StatementError};
use concord_core::keys::{LocationKey, TimeKey};
use concord_core::statements::Event;

pub fn has_location(event: &Event) -> bool {
    event.location().is_some()
}

pub fn location_key(event: &Event) -> Option<LocationKey> {
    event
        .location()
        .and_then(|l| l.resolved_id())
        .map(|id| LocationKey(id.to_string()))
}

pub fn has_time(event: &Event) -> bool {
    event.interval().is_some()
}

pub fn time_key(event: &Event) -> Option<TimeKey> {
    event.interval().map(TimeKey::from_context)
}

/// Reject events whose evidence claims a context the event itself lacks, and
/// events whose interval ends before it starts.
pub fn check_event_context(event: &Event) -> ConcordResult<()> {
    if !event.has_context() {
        if let Some(evidence_index) = event.evidence.iter().position(|ev| ev.has_context()) {
            return Err(StatementError::InconsistentContext {
                event: event.concept.name.clone(),
                evidence_index,
            }
            .into());
        }
    }
    if event.interval().is_some_and(|t| t.is_inverted()) {
        return Err(StatementError::InvertedInterval {
            event: event.concept.name.clone(),
        }
        .into());
    }
    Ok(())
}
