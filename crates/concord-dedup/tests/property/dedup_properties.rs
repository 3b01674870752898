//! Property tests for concord-dedup: idempotence, evidence conservation,
//! determinism, top-level antichain.

use proptest::prelude::*;

use concord_core::statements::{Event, Polarity, Statement};
use concord_core::MatchingStrategy;
use concord_dedup::DedupEngine;
use concord_matching::{IntervalContainment, KeyBuilder, PathHierarchy, RefinementEvaluator};
use test_fixtures::{at, during, event, influence, month_end, month_start, standalone, total_evidence};

const CONCEPTS: [&str; 4] = [
    "wm/concept/causal_factor/weather",
    "wm/concept/causal_factor/weather/precipitation",
    "wm/concept/causal_factor/agriculture/crop_production",
    "wm/concept/causal_factor/agriculture/crop_production/maize",
];

fn make_event(concept: usize, negative: bool, place: usize, period: usize) -> Event {
    let mut e = event(CONCEPTS[concept]);
    if negative {
        e.polarity = Some(Polarity::Negative);
    }
    if let Some(p) = ["Juba", "Wau"].get(place) {
        e = at(e, p);
    }
    if let Some(&(first, last)) = [(1u32, 6u32), (2, 2)].get(period) {
        e = during(e, month_start(2018, first), month_end(2018, last));
    }
    e
}

fn arb_event() -> impl Strategy<Value = Event> {
    (0..CONCEPTS.len(), any::<bool>(), 0usize..3, 0usize..3)
        .prop_map(|(c, neg, place, period)| make_event(c, neg, place, period))
}

fn arb_statement() -> impl Strategy<Value = Statement> {
    prop_oneof![
        arb_event().prop_map(|e| standalone(e, &["event evidence"])),
        (arb_event(), arb_event(), 1usize..3).prop_map(|(s, o, n)| {
            let texts: Vec<String> = (0..n).map(|i| format!("influence {i}")).collect();
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            influence(s, o, &refs)
        }),
    ]
}

fn arb_strategy() -> impl Strategy<Value = MatchingStrategy> {
    prop::sample::select(MatchingStrategy::ALL.to_vec())
}

fn engine() -> DedupEngine {
    DedupEngine::new(Box::new(PathHierarchy), Box::new(IntervalContainment))
}

proptest! {
    #[test]
    fn prop_evidence_conserved(
        stmts in prop::collection::vec(arb_statement(), 0..12),
        strategy in arb_strategy(),
    ) {
        let out = engine().deduplicate(&stmts, strategy).unwrap();
        prop_assert_eq!(
            total_evidence(out.iter().map(|a| &a.statement)),
            total_evidence(&stmts)
        );
    }
}

proptest! {
    #[test]
    fn prop_idempotent(
        stmts in prop::collection::vec(arb_statement(), 0..12),
        strategy in arb_strategy(),
    ) {
        let engine = engine();
        let first = engine.deduplicate(&stmts, strategy).unwrap();
        let second = engine.deduplicate(&first, strategy).unwrap();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_deterministic(
        stmts in prop::collection::vec(arb_statement(), 0..12),
        strategy in arb_strategy(),
    ) {
        let r1 = engine().deduplicate(&stmts, strategy).unwrap();
        let r2 = engine().deduplicate(&stmts, strategy).unwrap();
        prop_assert_eq!(r1, r2);
    }
}

proptest! {
    #[test]
    fn prop_top_level_is_an_antichain(
        stmts in prop::collection::vec(arb_statement(), 0..10),
        strategy in arb_strategy(),
    ) {
        let out = engine().deduplicate(&stmts, strategy).unwrap();
        let evaluator =
            RefinementEvaluator::new(&PathHierarchy, &IntervalContainment, KeyBuilder::default());
        for a in &out {
            for b in &out {
                if a.match_key == b.match_key {
                    continue;
                }
                let forward = evaluator.refines(&a.statement, &b.statement, strategy).unwrap();
                let backward = evaluator.refines(&b.statement, &a.statement, strategy).unwrap();
                prop_assert!(!(forward && !backward));
            }
        }
    }
}
