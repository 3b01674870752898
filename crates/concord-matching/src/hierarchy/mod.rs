//! Reference `IHierarchyProvider` implementations and the per-run cache.

mod cached;
mod ontology;
mod path;

pub use cached::CachedHierarchy;
pub use ontology::OntologyHierarchy;
pub use path::PathHierarchy;
