use crate::errors::ConcordResult;

/// Ontology "is-a" queries over grounding identifiers.
///
/// Implementations are read-only snapshots for the duration of a run and must
/// be safe to call from several workers at once.
pub trait IHierarchyProvider: Send + Sync {
    /// Whether `child` is a strict descendant of `ancestor`.
    fn is_a(&self, child: &str, ancestor: &str) -> ConcordResult<bool>;

    /// Name used in logs and collaborator errors.
    fn name(&self) -> &str;

    /// Ancestor-or-equal. Equality never reaches the collaborator.
    fn is_a_or_eq(&self, child: &str, ancestor: &str) -> ConcordResult<bool> {
        if child == ancestor {
            return Ok(true);
        }
        self.is_a(child, ancestor)
    }
}
