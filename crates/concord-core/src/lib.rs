//! # concord-core
//!
//! Foundation crate for Concord.
//! Defines the statement model, match keys, strategies, errors, collaborator
//! traits, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod keys;
pub mod statements;
pub mod strategy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ConcordConfig;
pub use errors::{ConcordError, ConcordResult};
pub use keys::{ContextSlot, EventKey, GroundingKey, LocationKey, MatchKey, TimeKey};
pub use statements::{
    Association, Concept, Event, Evidence, GroundingCandidate, Influence, LocationContext,
    OpaqueStatement, Polarity, Statement, TimeContext, WorldContext,
};
pub use strategy::MatchingStrategy;
