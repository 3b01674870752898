//! 5-phase deduplication pipeline orchestrator.
//!
//! Phase 1: Validation → Phase 2: Bucketing → Phase 3: Merge →
//! Phase 4: Refinement → Phase 5: Top level

pub mod phase1_validation;
pub mod phase2_bucketing;
pub mod phase3_merge;
pub mod phase4_refinement;
pub mod phase5_toplevel;

use std::time::Instant;

use concord_core::config::DedupConfig;
use concord_core::errors::ConcordResult;
use concord_core::strategy::MatchingStrategy;
use concord_matching::RefinementEvaluator;
use tracing::info;

use crate::models::{DedupInput, DedupReport};
use crate::monitoring::DedupMetrics;

/// Run the full pipeline over `statements` under `strategy`.
///
/// Input statements are never modified; every output statement is a new value.
/// Support recorded on assembled input is kept on the output.
pub fn run_pipeline<S: DedupInput>(
    statements: &[S],
    strategy: MatchingStrategy,
    evaluator: &RefinementEvaluator<'_>,
    config: &DedupConfig,
) -> ConcordResult<DedupReport> {
    let started = Instant::now();
    let mut metrics = DedupMetrics::new(strategy, statements.len());
    metrics.parallel = config.use_parallel(statements.len());

    // Phase 1: Validation.
    let validation = phase1_validation::validate(statements, evaluator.keys().resolver())?;
    metrics.rejected = validation.rejected.len();
    info!(
        accepted = validation.accepted.len(),
        rejected = validation.rejected.len(),
        "Phase 1: validation complete"
    );

    // Phase 2: Bucketing.
    let keys = phase2_bucketing::compute_keys(
        statements,
        &validation.accepted,
        strategy,
        evaluator.keys(),
        metrics.parallel,
    );
    let buckets = phase2_bucketing::bucket(&validation.accepted, keys);
    metrics.buckets = buckets.len();
    info!(buckets = buckets.len(), %strategy, "Phase 2: bucketing complete");

    // Phase 3: Merge.
    let reps = phase3_merge::merge_buckets(statements, buckets);
    info!(representatives = reps.len(), "Phase 3: merge complete");

    // Phase 4: Refinement.
    let (matrix, pairs) =
        phase4_refinement::refinement_matrix(&reps, strategy, evaluator, metrics.parallel)?;
    let graph = phase4_refinement::strict_graph(&matrix);
    metrics.pairs_evaluated = pairs;
    metrics.strict_edges = graph.edge_count();
    info!(
        pairs,
        strict_edges = graph.edge_count(),
        "Phase 4: refinement graph built"
    );

    // Phase 5: Top level.
    let top = phase5_toplevel::assemble_top_level(&reps, &graph)?;
    metrics.top_level = top.statements.len();
    metrics.promoted = top.promoted;
    info!(
        top_level = top.statements.len(),
        promoted = top.promoted,
        "Phase 5: top-level statements assembled"
    );

    metrics.elapsed_ms = started.elapsed().as_millis() as u64;
    metrics.log();

    Ok(DedupReport {
        statements: top.statements,
        rejected: validation.rejected,
        metrics,
    })
}
