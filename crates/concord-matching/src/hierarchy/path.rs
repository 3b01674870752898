use concord_core::constants::ONTOLOGY_PATH_SEPARATOR;
use concord_core::errors::ConcordResult;
use concord_core::traits::IHierarchyProvider;

/// Hierarchy implied by path-shaped ids: `wm/concept/agriculture/crop` is-a
/// `wm/concept/agriculture`. Only whole segments count as ancestors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathHierarchy;

impl IHierarchyProvider for PathHierarchy {
    fn is_a(&self, child: &str, ancestor: &str) -> ConcordResult<bool> {
        let ancestor = ancestor.trim_end_matches(ONTOLOGY_PATH_SEPARATOR);
        if ancestor.is_empty() {
            return Ok(false);
        }
        Ok(child
            .strip_prefix(ancestor)
            .and_then(|rest| rest.strip_prefix(ONTOLOGY_PATH_SEPARATOR))
            .is_some_and(|rest| !rest.is_empty()))
    }

    fn name(&self) -> &str {
        "path-hierarchy"
    }
}
