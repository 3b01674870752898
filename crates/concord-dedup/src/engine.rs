//! DedupEngine: owns the collaborators and config, runs the pipeline.

use std::collections::BTreeMap;

use concord_core::config::ConcordConfig;
use concord_core::errors::ConcordResult;
use concord_core::statements::Statement;
use concord_core::strategy::MatchingStrategy;
use concord_core::traits::{IHierarchyProvider, IStructuralRefiner, ITimeRefiner};
use concord_matching::{CachedHierarchy, GroundingResolver, KeyBuilder, RefinementEvaluator};
use tracing::info;

use crate::filters;
use crate::models::{AssembledStatement, DedupInput, DedupReport};
use crate::pipeline;

/// The deduplication engine.
///
/// Holds the injected collaborators. Each run wraps the hierarchy in a fresh
/// memoizing cache; nothing else is kept between runs, so one engine can
/// serve concurrent callers.
pub struct DedupEngine {
    hierarchy: Box<dyn IHierarchyProvider>,
    time: Box<dyn ITimeRefiner>,
    /// Refiner for opaque statements; key identity when unset.
    structural: Option<Box<dyn IStructuralRefiner>>,
    config: ConcordConfig,
}

impl DedupEngine {
    /// Create an engine with the default config.
    pub fn new(hierarchy: Box<dyn IHierarchyProvider>, time: Box<dyn ITimeRefiner>) -> Self {
        Self {
            hierarchy,
            time,
            structural: None,
            config: ConcordConfig::default(),
        }
    }

    /// Validate and install `config`.
    pub fn with_config(mut self, config: ConcordConfig) -> ConcordResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_structural(mut self, structural: Box<dyn IStructuralRefiner>) -> Self {
        self.structural = Some(structural);
        self
    }

    pub fn config(&self) -> &ConcordConfig {
        &self.config
    }

    /// Top-level statements of `statements` under `strategy`, in key order.
    ///
    /// Output of an earlier run can be fed back in; its `supported_by`
    /// records are kept.
    pub fn deduplicate<S: DedupInput>(
        &self,
        statements: &[S],
        strategy: MatchingStrategy,
    ) -> ConcordResult<Vec<AssembledStatement>> {
        Ok(self.deduplicate_with_report(statements, strategy)?.statements)
    }

    /// Like [`deduplicate`](Self::deduplicate) under the configured strategy.
    pub fn deduplicate_default<S: DedupInput>(
        &self,
        statements: &[S],
    ) -> ConcordResult<Vec<AssembledStatement>> {
        self.deduplicate(statements, self.config.matching.strategy)
    }

    /// Full run output: statements, rejections, and metrics.
    pub fn deduplicate_with_report<S: DedupInput>(
        &self,
        statements: &[S],
        strategy: MatchingStrategy,
    ) -> ConcordResult<DedupReport> {
        let cache = CachedHierarchy::new(
            self.hierarchy.as_ref(),
            self.config.dedup.refinement_cache_capacity,
        );
        let keys = KeyBuilder::new(GroundingResolver::from_config(&self.config.matching));
        let mut evaluator = RefinementEvaluator::new(&cache, self.time.as_ref(), keys);
        if let Some(structural) = &self.structural {
            evaluator = evaluator.with_structural(structural.as_ref());
        }
        pipeline::run_pipeline(statements, strategy, &evaluator, &self.config.dedup)
    }

    /// Run every strategy. Events and non-events are assembled separately,
    /// with events lifted out of influences and associations first.
    pub fn assemble_all_strategies(
        &self,
        statements: &[Statement],
    ) -> ConcordResult<BTreeMap<MatchingStrategy, Vec<AssembledStatement>>> {
        let events = filters::get_events(statements);
        let non_events = filters::get_non_events(statements);
        let mut assembled = BTreeMap::new();
        for strategy in MatchingStrategy::ALL {
            let mut output = self.deduplicate(&events, strategy)?;
            output.extend(self.deduplicate(&non_events, strategy)?);
            output.sort_by(|a, b| a.match_key.cmp(&b.match_key));
            info!(
                %strategy,
                events = events.len(),
                non_events = non_events.len(),
                assembled = output.len(),
                "assembled strategy"
            );
            assembled.insert(strategy, output);
        }
        Ok(assembled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_core::config::{DedupConfig, MatchingConfig};
    use concord_core::statements::{Concept, Event, Evidence, GroundingCandidate};
    use concord_matching::{IntervalContainment, PathHierarchy};

    fn engine() -> DedupEngine {
        DedupEngine::new(Box::new(PathHierarchy), Box::new(IntervalContainment))
    }

    fn grounded(id: &str, text: &str) -> Statement {
        Event::new(Concept::new(id).with_grounding("WM", vec![GroundingCandidate::flat(id, 0.9)]))
            .with_evidence(vec![Evidence::new("eidos", text)])
            .into()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let empty: Vec<Statement> = Vec::new();
        let report = engine()
            .deduplicate_with_report(&empty, MatchingStrategy::Grounding)
            .unwrap();
        assert!(report.statements.is_empty());
        assert!(report.rejected.is_empty());
        assert_eq!(report.metrics.buckets, 0);
    }

    #[test]
    fn invalid_config_refused() {
        let config = ConcordConfig {
            matching: MatchingConfig {
                grounding_namespace: " ".into(),
                ..Default::default()
            },
            dedup: DedupConfig::default(),
        };
        assert!(engine().with_config(config).is_err());
    }

    #[test]
    fn namespace_comes_from_config() {
        let config = ConcordConfig {
            matching: MatchingConfig {
                grounding_namespace: "UN".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let engine = engine().with_config(config).unwrap();
        // Grounded only under "WM", so both fall back to their names and stay apart.
        let out = engine
            .deduplicate(
                &[grounded("wm/a/b", "x"), grounded("wm/a", "y")],
                MatchingStrategy::Grounding,
            )
            .unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn default_strategy_used() {
        let out = engine()
            .deduplicate_default(&[grounded("wm/a/b", "x"), grounded("wm/a", "y")])
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].supported_by.len(), 1);
        assert_eq!(out[0].statement.evidence().len(), 2);
    }
}
