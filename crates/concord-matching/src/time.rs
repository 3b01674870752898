//! Reference time-interval refinement: containment, not overlap.

use concord_core::errors::ConcordResult;
use concord_core::statements::TimeContext;
use concord_core::traits::ITimeRefiner;

/// `specific` refines `general` when it lies within it.
///
/// A missing bound on `general` is unbounded on that side. A bound present on
/// `general` but missing on `specific` cannot be shown to hold, so it fails.
/// Intervals with no bounds at all on the general side compare by duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalContainment;

impl IntervalContainment {
    fn span_seconds(time: &TimeContext) -> Option<i64> {
        match (time.start, time.end) {
            (Some(s), Some(e)) => Some((e - s).num_seconds()),
            _ => time.duration,
        }
    }
}

impl ITimeRefiner for IntervalContainment {
    fn refines(&self, specific: &TimeContext, general: &TimeContext) -> ConcordResult<bool> {
        if general.start.is_none() && general.end.is_none() {
            return Ok(match (Self::span_seconds(specific), general.duration) {
                (_, None) => true,
                (Some(s), Some(g)) => s <= g,
                (None, Some(_)) => false,
            });
        }
        let start_ok = match (specific.start, general.start) {
            (_, None) => true,
            (Some(s), Some(g)) => s >= g,
            (None, Some(_)) => false,
        };
        let end_ok = match (specific.end, general.end) {
            (_, None) => true,
            (Some(s), Some(g)) => s <= g,
            (None, Some(_)) => false,
        };
        Ok(start_ok && end_ok)
    }

    fn name(&self) -> &str {
        "interval-containment"
    }
}
