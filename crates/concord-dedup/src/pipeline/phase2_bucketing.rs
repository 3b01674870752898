//! Phase 2: Bucketing. Compute one match key per accepted statement and
//! group positions by key.
//!
//! Keys are independent per statement, so they fan out over rayon when the
//! run is large enough. Buckets live in a `BTreeMap` so iteration follows key
//! order; positions inside a bucket keep input order.

use std::collections::BTreeMap;

use concord_core::keys::MatchKey;
use concord_core::strategy::MatchingStrategy;
use concord_matching::KeyBuilder;
use rayon::prelude::*;

use crate::models::DedupInput;

/// Keys for `accepted` positions, in the same order.
pub fn compute_keys<S: DedupInput>(
    statements: &[S],
    accepted: &[usize],
    strategy: MatchingStrategy,
    keys: &KeyBuilder,
    parallel: bool,
) -> Vec<MatchKey> {
    if parallel {
        accepted
            .par_iter()
            .map(|&i| keys.match_key(statements[i].statement(), strategy))
            .collect()
    } else {
        accepted
            .iter()
            .map(|&i| keys.match_key(statements[i].statement(), strategy))
            .collect()
    }
}

/// Group positions by key. `keys` is parallel to `accepted`.
pub fn bucket(accepted: &[usize], keys: Vec<MatchKey>) -> BTreeMap<MatchKey, Vec<usize>> {
    let mut buckets: BTreeMap<MatchKey, Vec<usize>> = BTreeMap::new();
    for (&index, key) in accepted.iter().zip(keys) {
        buckets.entry(key).or_default().push(index);
    }
    buckets
}
