use concord_core::keys::{ContextSlot, EventKey};
use concord_core::statements::Event;
use concord_core::strategy::MatchingStrategy;

use crate::context::{location_key, time_key};
use crate::grounding::GroundingResolver;

/// Key of one event. Polarity is part of the key so that equal keys always
/// mean mutual refinement.
pub fn event_key(event: &Event, strategy: MatchingStrategy, resolver: &GroundingResolver) -> EventKey {
    let location = if strategy.uses_location() {
        ContextSlot::considered(location_key(event))
    } else {
        ContextSlot::Ignored
    };
    let time = if strategy.uses_time() {
        ContextSlot::considered(time_key(event))
    } else {
        ContextSlot::Ignored
    };
    EventKey {
        grounding: resolver.resolve(&event.concept),
        polarity: event.polarity,
        location,
        time,
    }
}
