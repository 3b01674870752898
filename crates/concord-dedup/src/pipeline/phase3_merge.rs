//! Phase 3: Merge. Collapse each bucket into one representative.
//!
//! The representative takes every field from the bucket's first member and
//! the concatenated evidence of all members, in input order. Support already
//! recorded on any member carries over.

use std::collections::{BTreeMap, BTreeSet};

use concord_core::keys::MatchKey;
use concord_core::statements::Statement;
use tracing::debug;

use crate::models::DedupInput;

/// One bucket after merging.
#[derive(Debug, Clone)]
pub struct Representative {
    pub key: MatchKey,
    pub statement: Statement,
    /// Support recorded on the members by an earlier run.
    pub prior_support: BTreeSet<String>,
}

/// Representatives in key order.
pub fn merge_buckets<S: DedupInput>(
    statements: &[S],
    buckets: BTreeMap<MatchKey, Vec<usize>>,
) -> Vec<Representative> {
    buckets
        .into_iter()
        .filter_map(|(key, members)| {
            let first = statements[*members.first()?].statement();
            let evidence = members
                .iter()
                .flat_map(|&i| statements[i].statement().evidence().iter().cloned())
                .collect();
            let prior_support = members
                .iter()
                .flat_map(|&i| statements[i].supported_by().iter().cloned())
                .collect();
            if members.len() > 1 {
                debug!(
                    statement_type = first.type_name(),
                    duplicates = members.len(),
                    "merged duplicate bucket"
                );
            }
            Some(Representative {
                key,
                statement: first.with_evidence(evidence),
                prior_support,
            })
        })
        .collect()
}
