//! Per-run memo of is-a answers using moka.
//!
//! Built fresh for each deduplication run over an immutable hierarchy
//! snapshot, so there is nothing to invalidate. Errors are never cached.

use concord_core::errors::ConcordResult;
use concord_core::traits::IHierarchyProvider;
use moka::sync::Cache;
use tracing::warn;

/// Memoizing wrapper around a borrowed hierarchy provider.
pub struct CachedHierarchy<'a> {
    inner: &'a dyn IHierarchyProvider,
    cache: Cache<(String, String), bool>,
}

impl<'a> CachedHierarchy<'a> {
    pub fn new(inner: &'a dyn IHierarchyProvider, max_entries: u64) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Number of memoized answers.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IHierarchyProvider for CachedHierarchy<'_> {
    fn is_a(&self, child: &str, ancestor: &str) -> ConcordResult<bool> {
        let key = (child.to_string(), ancestor.to_string());
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let answer = self.inner.is_a(child, ancestor).inspect_err(|err| {
            warn!(collaborator = self.inner.name(), child, ancestor, error = %err, "is-a query failed");
        })?;
        self.cache.insert(key, answer);
        Ok(answer)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
