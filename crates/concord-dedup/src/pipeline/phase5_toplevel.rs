//! Phase 5: Top level. Emit the most general representatives.
//!
//! Maximal representatives are emitted with the matches-hashes of their direct
//! refiners, joined with any support carried in from an earlier run. Every other representative hands its evidence to the
//! smallest-keyed maximal representative it can reach, so no evidence is lost.
//! A representative that reaches no maximal one (only possible when the
//! collaborators are not transitive) is emitted as well.

use std::collections::BTreeSet;

use concord_core::errors::ConcordResult;

use super::phase3_merge::Representative;
use super::phase4_refinement::RefinementGraph;
use crate::models::AssembledStatement;

#[derive(Debug, Clone, Default)]
pub struct TopLevel {
    pub statements: Vec<AssembledStatement>,
    pub promoted: usize,
}

/// Assemble the output. `reps` must be in key order and match `graph`.
pub fn assemble_top_level(
    reps: &[Representative],
    graph: &RefinementGraph,
) -> ConcordResult<TopLevel> {
    let hashes = reps
        .iter()
        .map(|r| r.key.digest())
        .collect::<ConcordResult<Vec<String>>>()?;

    let mut owned: Vec<Vec<usize>> = vec![Vec::new(); reps.len()];
    let mut emitted = vec![false; reps.len()];
    let mut promoted = 0;
    for i in 0..reps.len() {
        if graph.is_maximal(i) {
            emitted[i] = true;
        } else if let Some(owner) = graph.first_reachable_maximal(i) {
            owned[owner].push(i);
        } else {
            emitted[i] = true;
            promoted += 1;
        }
    }

    let statements = (0..reps.len())
        .filter(|&i| emitted[i])
        .map(|i| {
            let rep = &reps[i];
            let mut evidence = rep.statement.evidence().to_vec();
            for &j in &owned[i] {
                evidence.extend(reps[j].statement.evidence().iter().cloned());
            }
            let mut supported_by: BTreeSet<String> = graph
                .direct_refiners(i)
                .into_iter()
                .map(|j| hashes[j].clone())
                .collect();
            supported_by.extend(rep.prior_support.iter().cloned());
            AssembledStatement {
                statement: rep.statement.with_evidence(evidence),
                match_key: rep.key.clone(),
                matches_hash: hashes[i].clone(),
                supported_by: supported_by.into_iter().collect(),
            }
        })
        .collect();

    Ok(TopLevel {
        statements,
        promoted,
    })
}
