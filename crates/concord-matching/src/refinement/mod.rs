//! Strategy-aware refinement: is one statement a more specific instance of another?
//!
//! Rules by shape:
//! - Event: grounding ancestor-or-equal, polarity compatible, plus location
//!   and time compatibility as the strategy requires.
//! - Influence: both endpoints refine, and the overall polarity is compatible.
//! - Association: an injective member mapping where every pair refines.
//! - Opaque: delegated to the structural refiner.
//!
//! Missing context on the general side is permissive and never an error.
//! Statements with equal match keys always refine each other.

mod association;

use concord_core::errors::ConcordResult;
use concord_core::keys::{GroundingKey, TimeKey};
use concord_core::statements::{Association, Event, Influence, Polarity, Statement};
use concord_core::strategy::MatchingStrategy;
use concord_core::traits::{
    IHierarchyProvider, IStructuralRefiner, ITimeRefiner, KeyIdentityRefiner,
};

use crate::context::location_key;
use crate::keys::KeyBuilder;

pub use association::has_injective_mapping;

static KEY_IDENTITY: KeyIdentityRefiner = KeyIdentityRefiner;

/// Evaluates the refinement relation against injected collaborators.
pub struct RefinementEvaluator<'a> {
    hierarchy: &'a dyn IHierarchyProvider,
    time: &'a dyn ITimeRefiner,
    structural: &'a dyn IStructuralRefiner,
    keys: KeyBuilder,
}

impl<'a> RefinementEvaluator<'a> {
    pub fn new(
        hierarchy: &'a dyn IHierarchyProvider,
        time: &'a dyn ITimeRefiner,
        keys: KeyBuilder,
    ) -> Self {
        Self {
            hierarchy,
            time,
            structural: &KEY_IDENTITY,
            keys,
        }
    }

    /// Use a custom refiner for opaque statements.
    pub fn with_structural(mut self, structural: &'a dyn IStructuralRefiner) -> Self {
        self.structural = structural;
        self
    }

    pub fn keys(&self) -> &KeyBuilder {
        &self.keys
    }

    /// Whether `specific` refines `general` under `strategy`.
    pub fn refines(
        &self,
        specific: &Statement,
        general: &Statement,
        strategy: MatchingStrategy,
    ) -> ConcordResult<bool> {
        if self.keys.match_key(specific, strategy) == self.keys.match_key(general, strategy) {
            return Ok(true);
        }
        self.refines_distinct(specific, general, strategy)
    }

    /// Like [`refines`](Self::refines) for callers that already know the two
    /// statements have different match keys.
    pub fn refines_distinct(
        &self,
        specific: &Statement,
        general: &Statement,
        strategy: MatchingStrategy,
    ) -> ConcordResult<bool> {
        match (specific, general) {
            (Statement::Event(s), Statement::Event(g)) => self.event_refines(s, g, strategy),
            (Statement::Influence(s), Statement::Influence(g)) => {
                self.influence_refines(s, g, strategy)
            }
            (Statement::Association(s), Statement::Association(g)) => {
                self.association_refines(s, g, strategy)
            }
            (Statement::Opaque(s), Statement::Opaque(g)) => self.structural.refines_opaque(s, g),
            _ => Ok(false),
        }
    }

    /// Event refinement under `strategy`. Cheap local checks run before any
    /// collaborator is consulted.
    pub fn event_refines(
        &self,
        specific: &Event,
        general: &Event,
        strategy: MatchingStrategy,
    ) -> ConcordResult<bool> {
        if !Polarity::compatible(specific.polarity, general.polarity) {
            return Ok(false);
        }
        if strategy.uses_location() && !Self::location_refines(specific, general) {
            return Ok(false);
        }
        let resolver = self.keys.resolver();
        let specific_grounding = resolver.resolve(&specific.concept);
        let general_grounding = resolver.resolve(&general.concept);
        if !self.grounding_refines(&specific_grounding, &general_grounding)? {
            return Ok(false);
        }
        if strategy.uses_time() {
            return self.time_refines(specific, general);
        }
        Ok(true)
    }

    fn influence_refines(
        &self,
        specific: &Influence,
        general: &Influence,
        strategy: MatchingStrategy,
    ) -> ConcordResult<bool> {
        if !Polarity::compatible(specific.overall_polarity(), general.overall_polarity()) {
            return Ok(false);
        }
        Ok(self.event_refines(&specific.subj, &general.subj, strategy)?
            && self.event_refines(&specific.obj, &general.obj, strategy)?)
    }

    fn association_refines(
        &self,
        specific: &Association,
        general: &Association,
        strategy: MatchingStrategy,
    ) -> ConcordResult<bool> {
        if specific.members.len() > general.members.len() {
            return Ok(false);
        }
        let compatible = specific
            .members
            .iter()
            .map(|s| {
                general
                    .members
                    .iter()
                    .map(|g| self.event_refines(s, g, strategy))
                    .collect::<ConcordResult<Vec<bool>>>()
            })
            .collect::<ConcordResult<Vec<Vec<bool>>>>()?;
        Ok(has_injective_mapping(&compatible, general.members.len()))
    }

    /// General ancestor-or-equal of specific. Compositional keys compare slot
    /// by slot; an absent general slot constrains nothing.
    fn grounding_refines(
        &self,
        specific: &GroundingKey,
        general: &GroundingKey,
    ) -> ConcordResult<bool> {
        match (specific, general) {
            (GroundingKey::Ungrounded(s), GroundingKey::Ungrounded(g)) => Ok(s == g),
            (GroundingKey::Flat(s), GroundingKey::Flat(g)) => self.hierarchy.is_a_or_eq(s, g),
            (GroundingKey::Compositional(s), GroundingKey::Compositional(g)) => {
                for (s_slot, g_slot) in s.iter().zip(g.iter()) {
                    let holds = match (s_slot, g_slot) {
                        (_, None) => true,
                        (None, Some(_)) => false,
                        (Some(s_id), Some(g_id)) => self.hierarchy.is_a_or_eq(s_id, g_id)?,
                    };
                    if !holds {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// A general event without location admits any specific location;
    /// otherwise locations must be identical.
    fn location_refines(specific: &Event, general: &Event) -> bool {
        match location_key(general) {
            None => true,
            Some(g) => location_key(specific).as_ref() == Some(&g),
        }
    }

    fn time_refines(&self, specific: &Event, general: &Event) -> ConcordResult<bool> {
        let Some(g) = general.interval() else {
            return Ok(true);
        };
        let Some(s) = specific.interval() else {
            return Ok(false);
        };
        if TimeKey::from_context(s) == TimeKey::from_context(g) {
            return Ok(true);
        }
        self.time.refines(s, g)
    }
}
