//! Match-key building per statement shape and strategy.

mod event_key;

use concord_core::keys::{EventKey, MatchKey};
use concord_core::statements::{Event, Statement};
use concord_core::strategy::MatchingStrategy;

use crate::grounding::GroundingResolver;

pub use event_key::event_key;

/// Computes canonical match keys with a fixed grounding resolver.
#[derive(Debug, Clone, Default)]
pub struct KeyBuilder {
    resolver: GroundingResolver,
}

impl KeyBuilder {
    pub fn new(resolver: GroundingResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &GroundingResolver {
        &self.resolver
    }

    pub fn event_key(&self, event: &Event, strategy: MatchingStrategy) -> EventKey {
        event_key(event, strategy, &self.resolver)
    }

    /// The match key of `statement` under `strategy`.
    ///
    /// Influences embed both endpoint keys plus their polarity signature;
    /// associations embed their member keys sorted; opaque statements keep the
    /// identity they arrived with.
    pub fn match_key(&self, statement: &Statement, strategy: MatchingStrategy) -> MatchKey {
        match statement {
            Statement::Event(event) => MatchKey::Event(self.event_key(event, strategy)),
            Statement::Influence(inf) => MatchKey::Influence {
                subj: self.event_key(&inf.subj, strategy),
                obj: self.event_key(&inf.obj, strategy),
                polarity_count: inf.polarity_count(),
                overall_polarity: inf.overall_polarity(),
            },
            Statement::Association(assoc) => {
                let mut members: Vec<EventKey> = assoc
                    .members
                    .iter()
                    .map(|m| self.event_key(m, strategy))
                    .collect();
                members.sort();
                MatchKey::Association { members }
            }
            Statement::Opaque(opaque) => MatchKey::Opaque {
                kind: opaque.kind.clone(),
                key: opaque.matches_key.clone(),
            },
        }
    }
}

/// Free-function form of [`KeyBuilder::match_key`].
pub fn match_key(
    statement: &Statement,
    strategy: MatchingStrategy,
    resolver: &GroundingResolver,
) -> MatchKey {
    KeyBuilder::new(resolver.clone()).match_key(statement, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_core::keys::{ContextSlot, GroundingKey, LocationKey};
    use concord_core::statements::{
        Association, Concept, Evidence, GroundingCandidate, Influence, LocationContext,
        OpaqueStatement, Polarity, WorldContext,
    };

    fn event(id: &str) -> Event {
        Event::new(
            Concept::new(id).with_grounding("WM", vec![GroundingCandidate::flat(id, 0.9)]),
        )
    }

    fn located(id: &str, geo: &str) -> Event {
        event(id).with_context(WorldContext::located(LocationContext::new(geo, geo)))
    }

    #[test]
    fn influence_keys_ignore_evidence_text() {
        let builder = KeyBuilder::default();
        let mut a = Influence::new(event("wm/rain"), event("wm/crops"));
        a.evidence = vec![Evidence::new("eidos", "rain helps crops")];
        let mut b = Influence::new(event("wm/rain"), event("wm/crops"));
        b.evidence = vec![Evidence::new("hume", "crops grow with rain")];
        assert_eq!(
            builder.match_key(&a.into(), MatchingStrategy::Grounding),
            builder.match_key(&b.into(), MatchingStrategy::Grounding)
        );
    }

    #[test]
    fn influence_key_embeds_polarity_signature() {
        let builder = KeyBuilder::default();
        let plain = Influence::new(event("wm/rain"), event("wm/crops"));
        let signed = Influence::new(
            event("wm/rain").with_polarity(Polarity::Negative),
            event("wm/crops"),
        );
        match builder.match_key(&signed.clone().into(), MatchingStrategy::Grounding) {
            MatchKey::Influence { polarity_count, overall_polarity, .. } => {
                assert_eq!(polarity_count, 1);
                assert_eq!(overall_polarity, None);
            }
            other => panic!("unexpected key {other:?}"),
        }
        assert_ne!(
            builder.match_key(&plain.into(), MatchingStrategy::Grounding),
            builder.match_key(&signed.into(), MatchingStrategy::Grounding)
        );
    }

    #[test]
    fn association_member_order_is_irrelevant() {
        let builder = KeyBuilder::default();
        let ab = Association::new(vec![event("wm/a"), event("wm/b")]);
        let ba = Association::new(vec![event("wm/b"), event("wm/a")]);
        assert_eq!(
            builder.match_key(&ab.into(), MatchingStrategy::GroundingLocation),
            builder.match_key(&ba.into(), MatchingStrategy::GroundingLocation)
        );
    }

    #[test]
    fn location_only_counts_when_strategy_uses_it() {
        let builder = KeyBuilder::default();
        let here = Statement::from(located("wm/food", "juba"));
        let nowhere = Statement::from(event("wm/food"));
        assert_eq!(
            builder.match_key(&here, MatchingStrategy::Grounding),
            builder.match_key(&nowhere, MatchingStrategy::Grounding)
        );
        assert_ne!(
            builder.match_key(&here, MatchingStrategy::GroundingLocation),
            builder.match_key(&nowhere, MatchingStrategy::GroundingLocation)
        );
        match builder.match_key(&here, MatchingStrategy::GroundingLocationTime) {
            MatchKey::Event(key) => {
                assert_eq!(key.grounding, GroundingKey::Flat("wm/food".into()));
                assert_eq!(key.location, ContextSlot::Present(LocationKey("juba".into())));
                assert_eq!(key.time, ContextSlot::Absent);
            }
            other => panic!("unexpected key {other:?}"),
        }
    }

    #[test]
    fn opaque_key_ignores_strategy() {
        let builder = KeyBuilder::default();
        let stmt = Statement::from(OpaqueStatement {
            kind: "Phosphorylation".into(),
            matches_key: "MAP2K1-MAPK1-T185".into(),
            evidence: vec![],
        });
        let keys: Vec<MatchKey> = MatchingStrategy::ALL
            .iter()
            .map(|&s| builder.match_key(&stmt, s))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] == w[1]));
    }
}
