//! Collaborator capabilities injected into the engine at call time.

pub mod hierarchy;
pub mod structural;
pub mod time_refiner;

pub use hierarchy::IHierarchyProvider;
pub use structural::{IStructuralRefiner, KeyIdentityRefiner};
pub use time_refiner::ITimeRefiner;
