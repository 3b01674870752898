//! # concord-matching
//!
//! Grounding key resolution, context extraction, match-key building, and the
//! strategy-aware refinement relation, plus reference collaborators
//! (path and explicit ontology hierarchies, interval containment) and a
//! per-run memoizing hierarchy cache.

pub mod context;
pub mod grounding;
pub mod hierarchy;
pub mod keys;
pub mod refinement;
pub mod time;

pub use grounding::{resolve_grounding, GroundingResolver};
pub use hierarchy::{CachedHierarchy, OntologyHierarchy, PathHierarchy};
pub use keys::KeyBuilder;
pub use refinement::RefinementEvaluator;
pub use time::IntervalContainment;
