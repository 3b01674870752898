//! Property tests for concord-matching: key consistency, monotonic
//! specificity, context-absence permissiveness, transitivity.

use proptest::prelude::*;

use concord_core::statements::{Event, Polarity, Statement, TimeContext, WorldContext};
use concord_core::MatchingStrategy;
use concord_matching::{IntervalContainment, KeyBuilder, PathHierarchy, RefinementEvaluator};
use test_fixtures::{at, during, event, month_end, month_start, standalone};

const CONCEPTS: [&str; 5] = [
    "wm/concept/causal_factor/weather",
    "wm/concept/causal_factor/weather/precipitation",
    "wm/concept/causal_factor/agriculture",
    "wm/concept/causal_factor/agriculture/crop_production",
    "wm/concept/causal_factor/agriculture/crop_production/maize",
];
const PLACES: [&str; 2] = ["Juba", "Wau"];
// (first month, last month) of 2018.
const PERIODS: [(u32, u32); 3] = [(1, 12), (1, 3), (2, 2)];
// How the interval's stored duration relates to its bounds.
const DURATIONS: usize = 3;

fn make_event(
    concept: usize,
    polarity: usize,
    place: usize,
    period: usize,
    duration: usize,
) -> Event {
    let mut e = event(CONCEPTS[concept]);
    e.polarity = match polarity {
        1 => Some(Polarity::Positive),
        2 => Some(Polarity::Negative),
        _ => None,
    };
    if let Some(p) = PLACES.get(place) {
        e = at(e, p);
    }
    if let Some(&(first, last)) = PERIODS.get(period) {
        e = during(e, month_start(2018, first), month_end(2018, last));
        let mut time = e.interval().cloned().unwrap_or_default();
        time.duration = match duration {
            0 => time.duration,
            1 => None,
            _ => Some(1),
        };
        let context = e.context.clone().unwrap_or_default();
        e = e.with_context(WorldContext {
            time: Some(time),
            ..context
        });
    }
    e
}

/// An interval known only by its length.
fn make_unbounded(concept: usize, days: i64) -> Event {
    event(CONCEPTS[concept]).with_context(WorldContext::timed(TimeContext {
        duration: Some(days * 86_400),
        ..Default::default()
    }))
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => (0..CONCEPTS.len(), 0usize..3, 0..=PLACES.len(), 0..=PERIODS.len(), 0..DURATIONS)
            .prop_map(|(c, pol, place, period, dur)| make_event(c, pol, place, period, dur)),
        1 => (0..CONCEPTS.len(), 1i64..4).prop_map(|(c, days)| make_unbounded(c, days)),
    ]
}

fn arb_strategy() -> impl Strategy<Value = MatchingStrategy> {
    prop::sample::select(MatchingStrategy::ALL.to_vec())
}

fn evaluator() -> RefinementEvaluator<'static> {
    RefinementEvaluator::new(&PathHierarchy, &IntervalContainment, KeyBuilder::default())
}

fn stmt(e: &Event) -> Statement {
    standalone(e.clone(), &["ev"])
}

proptest! {
    #[test]
    fn prop_equal_keys_refine_both_ways(a in arb_event(), b in arb_event(), strategy in arb_strategy()) {
        let eval = evaluator();
        let (sa, sb) = (stmt(&a), stmt(&b));
        if eval.keys().match_key(&sa, strategy) == eval.keys().match_key(&sb, strategy) {
            prop_assert!(eval.refines_distinct(&sa, &sb, strategy).unwrap());
            prop_assert!(eval.refines_distinct(&sb, &sa, strategy).unwrap());
        }
    }
}

proptest! {
    #[test]
    fn prop_refinement_is_reflexive(a in arb_event(), strategy in arb_strategy()) {
        let eval = evaluator();
        let sa = stmt(&a);
        prop_assert!(eval.refines(&sa, &sa, strategy).unwrap());
    }
}

proptest! {
    #[test]
    fn prop_finer_strategy_refinement_holds_for_coarser(a in arb_event(), b in arb_event()) {
        let eval = evaluator();
        let (sa, sb) = (stmt(&a), stmt(&b));
        let with_time = eval.refines(&sa, &sb, MatchingStrategy::GroundingLocationTime).unwrap();
        let with_location = eval.refines(&sa, &sb, MatchingStrategy::GroundingLocation).unwrap();
        let grounding_only = eval.refines(&sa, &sb, MatchingStrategy::Grounding).unwrap();
        if with_time {
            prop_assert!(with_location);
        }
        if with_location {
            prop_assert!(grounding_only);
        }
    }
}

proptest! {
    #[test]
    fn prop_context_free_general_is_permissive(a in arb_event(), strategy in arb_strategy()) {
        let eval = evaluator();
        let mut bare = a.clone();
        bare.context = None;
        prop_assert!(eval.refines(&stmt(&a), &stmt(&bare), strategy).unwrap());
    }
}

proptest! {
    #[test]
    fn prop_event_refinement_is_transitive(
        a in arb_event(),
        b in arb_event(),
        c in arb_event(),
        strategy in arb_strategy(),
    ) {
        let eval = evaluator();
        let (sa, sb, sc) = (stmt(&a), stmt(&b), stmt(&c));
        if eval.refines(&sa, &sb, strategy).unwrap() && eval.refines(&sb, &sc, strategy).unwrap() {
            prop_assert!(eval.refines(&sa, &sc, strategy).unwrap());
        }
    }
}
